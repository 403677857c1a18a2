//! Pure domain logic for ProjectHub: error taxonomy, shared types, role names,
//! project field rules, and access rules. No I/O lives here.

pub mod access;
pub mod error;
pub mod project;
pub mod roles;
pub mod types;
