//! SeaORM entity definitions for the Cantrip database.

pub mod prelude;

pub mod character;
