//! Client side of the auth service: provider trait, HTTP client and wire types.

pub mod auth;
pub mod types;

pub use auth::*;
pub use types::*;
