//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` request DTOs for inserts and full updates

pub mod actor;
pub mod cast;
pub mod genre;
pub mod movie;
