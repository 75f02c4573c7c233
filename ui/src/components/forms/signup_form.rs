use dioxus::prelude::*;

use crate::components::{
    display::{AlertDialog, LoadingIndicator},
    inputs::{FieldErrorText, InputType, ValidatedInput},
};
use crate::features::signup::{AppRoute, SignupAction, SignupState};
use crate::utils::{field_error_class, field_error_style};

#[derive(Props, PartialEq, Clone)]
pub struct SignupFormProps {
    pub state: Signal<SignupState>,
    pub dispatch: EventHandler<SignupAction>,
    pub on_submit: EventHandler<()>,
}

#[component]
pub fn SignupForm(props: SignupFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_submit = props.on_submit;

    let current = state();
    let errors = current.errors.clone();

    rsx! {
        div {
            class: "signup-container",

            h1 {
                class: "signup-title",
                "Create Account"
            }

            ValidatedInput {
                value: current.email.clone(),
                placeholder: "Email".to_string(),
                input_type: InputType::Email,
                input_class: field_error_class(errors.email.as_ref()).to_string(),
                input_style: field_error_style(errors.email.as_ref()).to_string(),
                on_change: move |data: String| {
                    dispatch.call(SignupAction::SetEmail(data));
                }
            }
            FieldErrorText { error: errors.email }

            ValidatedInput {
                value: current.password.clone(),
                placeholder: "Password".to_string(),
                input_type: InputType::Password,
                input_class: field_error_class(errors.password.as_ref()).to_string(),
                input_style: field_error_style(errors.password.as_ref()).to_string(),
                on_change: move |data: String| {
                    dispatch.call(SignupAction::SetPassword(data));
                }
            }
            FieldErrorText { error: errors.password }

            button {
                class: "primary-button",
                disabled: current.loading,
                onclick: move |_| on_submit.call(()),
                if current.loading {
                    LoadingIndicator { message: "Creating account".to_string() }
                } else {
                    span {
                        class: "primary-button-text",
                        "Sign Up"
                    }
                }
            }

            div {
                class: "login-row",
                span { "Already have an account? " }
                span {
                    class: "link",
                    Link {
                        to: AppRoute::Login.path(),
                        "Log In"
                    }
                }
            }

            if let Some(alert) = current.alert.clone() {
                AlertDialog {
                    title: alert.title,
                    message: alert.message,
                    on_dismiss: move |_| dispatch.call(SignupAction::DismissAlert)
                }
            }
        }
    }
}
