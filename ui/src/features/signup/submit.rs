//! Sign-up submission flow.
//!
//! Runs independent of any renderer: state is reached through [`SignupStore`],
//! navigation through [`SignupNavigator`] and account creation through
//! [`SignupProvider`]. The Dioxus screen plugs a `Signal` and an
//! `EventHandler` into these seams.

use dioxus::prelude::*;

use super::form_validation::validate_signup;
use super::types::{AppRoute, FieldErrors, SignupAction, SignupAlert, SignupPhase, SignupState};
use crate::services::client::{AuthSession, SignupProvider};
use crate::services::errors::SignupError;
use crate::{console_debug, console_error, console_info, console_warn};

pub trait SignupStore {
    fn snapshot(&self) -> SignupState;
    fn dispatch(&self, action: SignupAction);
}

impl SignupStore for Signal<SignupState> {
    fn snapshot(&self) -> SignupState {
        self.read().clone()
    }

    fn dispatch(&self, action: SignupAction) {
        let mut state = *self;
        state.with_mut(|s| s.reduce_in_place(action));
    }
}

pub trait SignupNavigator {
    /// Replace the current history entry with `route`
    fn replace(&self, route: AppRoute);
}

impl SignupNavigator for EventHandler<AppRoute> {
    fn replace(&self, route: AppRoute) {
        self.call(route);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A previous submission has not settled yet
    AlreadyInFlight,
    /// A previous submission succeeded; the screen is on its way out
    AlreadyNavigated,
    Invalid(FieldErrors),
    Navigated(AuthSession),
    Failed(SignupError),
}

impl SubmitOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitOutcome::AlreadyInFlight => "already in flight",
            SubmitOutcome::AlreadyNavigated => "already navigated",
            SubmitOutcome::Invalid(_) => "invalid",
            SubmitOutcome::Navigated(_) => "navigated",
            SubmitOutcome::Failed(_) => "failed",
        }
    }
}

/// Validate the current input and store the result, replacing any previous
/// errors. Returns whether the form is valid.
pub fn validate_form<S: SignupStore + ?Sized>(store: &S) -> bool {
    let current = store.snapshot();
    let errors = validate_signup(&current.email, &current.password);
    let valid = errors.is_empty();
    store.dispatch(SignupAction::SetErrors(errors));
    valid
}

pub async fn submit_signup<S, P, N>(store: &S, provider: &P, navigator: &N) -> SubmitOutcome
where
    S: SignupStore + ?Sized,
    P: SignupProvider + ?Sized,
    N: SignupNavigator + ?Sized,
{
    let current = store.snapshot();
    if current.loading {
        console_warn!("[Signup] Submit ignored: a sign up request is already in flight");
        return SubmitOutcome::AlreadyInFlight;
    }
    if current.phase == SignupPhase::Navigated {
        console_warn!("[Signup] Submit ignored: account already created");
        return SubmitOutcome::AlreadyNavigated;
    }

    if !validate_form(store) {
        let errors = store.snapshot().errors;
        console_debug!("[Signup] Validation failed for {} field(s)", errors.len());
        return SubmitOutcome::Invalid(errors);
    }

    let current = store.snapshot();
    store.dispatch(SignupAction::BeginSubmit);
    console_info!("[Signup] Creating account for {}", current.email);

    match provider.signup(&current.email, &current.password).await {
        Ok(session) => {
            console_info!("[Signup] Account created, leaving sign-up screen");
            store.dispatch(SignupAction::MarkNavigated);
            navigator.replace(AppRoute::Root);
            SubmitOutcome::Navigated(session)
        }
        Err(error) => {
            console_error!(
                "[Signup] Sign up failed: {} (retryable: {})",
                error,
                error.is_retryable()
            );
            store.dispatch(SignupAction::FailSubmit(SignupAlert::from_error(&error)));
            SubmitOutcome::Failed(error)
        }
    }
}
