//! User Interface Components
//!
//! Reusable Dioxus components for the sign-up screen:
//!
//! - **forms**: the sign-up form itself
//! - **display**: spinner and blocking alert dialog
//! - **inputs**: text inputs and inline field error text

pub mod display;
pub mod forms;
pub mod inputs;

pub use forms::SignupForm;
