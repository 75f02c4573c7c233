// Core types for the sign-up screen - no dioxus imports needed here
use crate::services::errors::{SignupError, ValidationError};

pub const SIGNUP_FAILED_TITLE: &str = "Sign Up Failed";
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred.";

/// Destinations the sign-up screen can send the user to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppRoute {
    /// Application root, reached after a successful sign up
    Root,
    Login,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Root => "/",
            AppRoute::Login => "/login",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SignupField {
    Email,
    Password,
}

/// Per-field validation result. Empty means the form is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<ValidationError>,
    pub password: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    pub fn len(&self) -> usize {
        self.fields().count()
    }

    pub fn get(&self, field: SignupField) -> Option<ValidationError> {
        match field {
            SignupField::Email => self.email,
            SignupField::Password => self.password,
        }
    }

    pub fn message_for(&self, field: SignupField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    /// Fields that currently carry an error, in display order
    pub fn fields(&self) -> impl Iterator<Item = SignupField> + '_ {
        [SignupField::Email, SignupField::Password]
            .into_iter()
            .filter(|field| self.get(*field).is_some())
    }
}

/// Blocking alert shown when the collaborator rejects a sign up
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupAlert {
    pub title: String,
    pub message: String,
}

impl SignupAlert {
    pub fn from_error(error: &SignupError) -> Self {
        Self {
            title: SIGNUP_FAILED_TITLE.to_string(),
            message: error
                .user_message()
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SignupPhase {
    #[default]
    Idle,
    Submitting,
    /// Navigation away has been requested; the screen is about to unmount
    Navigated,
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum SignupAction {
    SetEmail(String),
    SetPassword(String),
    SetErrors(FieldErrors),
    BeginSubmit,
    FailSubmit(SignupAlert),
    DismissAlert,
    MarkNavigated,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupState {
    pub email: String,
    pub password: String,
    pub errors: FieldErrors,
    pub loading: bool,
    pub alert: Option<SignupAlert>,
    pub phase: SignupPhase,
}

impl SignupState {
    pub fn with_input(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            ..Self::default()
        }
    }

    pub fn reduce_in_place(&mut self, action: SignupAction) {
        match action {
            SignupAction::SetEmail(email) => {
                self.email = email;
            }
            SignupAction::SetPassword(password) => {
                self.password = password;
            }
            SignupAction::SetErrors(errors) => {
                // Replaced wholesale, never merged with the previous result
                self.errors = errors;
            }
            SignupAction::BeginSubmit => {
                self.loading = true;
                self.alert = None;
                self.phase = SignupPhase::Submitting;
            }
            SignupAction::FailSubmit(alert) => {
                self.loading = false;
                self.alert = Some(alert);
                self.phase = SignupPhase::Idle;
            }
            SignupAction::DismissAlert => {
                self.alert = None;
            }
            SignupAction::MarkNavigated => {
                self.loading = false;
                self.phase = SignupPhase::Navigated;
            }
        }
    }
}
