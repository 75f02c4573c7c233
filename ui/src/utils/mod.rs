//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **validation**: Email pattern matching and input styling helpers

pub mod console_macros;
pub mod validation;

pub use validation::*;
