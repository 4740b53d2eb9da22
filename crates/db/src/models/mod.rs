//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates

pub mod account;
pub mod artist;
pub mod beat;
pub mod playlist;
pub mod product;
