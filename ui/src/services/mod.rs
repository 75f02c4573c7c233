//! Infrastructure Services
//!
//! - **client**: auth collaborator trait and the HTTP client implementing it
//! - **config**: auth service endpoint configuration
//! - **errors**: validation, collaborator and configuration error types
//!
//! WASM-first: async traits carry no Send/Sync bounds.

pub mod client;
pub mod config;
pub mod errors;
