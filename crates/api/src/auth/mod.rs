//! Session verification primitives.
//!
//! - [`session`] -- HS256 session-token claims, verification, and minting.
//!
//! Credential checks and token issuance belong to the identity provider;
//! this service only verifies what it signed.

pub mod session;
