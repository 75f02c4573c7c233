//! This crate contains all shared UI components for the sign-up screen.

pub mod app;
pub use app::SignupScreen;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;

pub use features::signup::{AppRoute, SignupState};
pub use services::client::{AuthSession, HttpSignupClient, SignupProvider, SignupService};
pub use services::config::SignupServiceConfig;
