//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and turned
//! into Discord replies by the command layer. They carry typed values (parsed snowflakes,
//! skill enums) so business rules never touch raw database strings.

pub mod audio;
pub mod character;
pub mod dice;
pub mod skill;
