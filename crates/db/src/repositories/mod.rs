//! Repositories issuing SQL against the connection pool.

pub mod project_repo;

pub use project_repo::ProjectRepo;
