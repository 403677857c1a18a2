//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO and the validated insert value it produces
//! - A `Deserialize` update DTO (all `Option` fields) and the validated patch

pub mod project;
