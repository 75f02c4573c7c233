//! Sign-up feature
//!
//! - **types**: screen state, actions and the in-place reducer
//! - **form_validation**: synchronous email/password checks
//! - **submit**: the validate-then-signup flow and its injection seams

pub mod form_validation;
pub mod submit;
pub mod types;

pub use form_validation::*;
pub use submit::*;
pub use types::*;
