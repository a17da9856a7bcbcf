//! Database repository layer.
//!
//! Repositories hold a borrowed connection and perform the CRUD queries for one domain
//! each. They accept parameter models from the service layer and return SeaORM entity
//! models, which the service converts into domain models.

pub mod character;
