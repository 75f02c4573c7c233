//! Input components for form entry and inline validation feedback

use crate::services::errors::ValidationError;
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Email,
    Password,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Email => "email",
            InputType::Password => "password",
        }
    }

    /// Virtual keyboard hint
    pub fn input_mode(&self) -> &'static str {
        match self {
            InputType::Email => "email",
            InputType::Password => "text",
        }
    }

    pub fn autocomplete(&self) -> &'static str {
        match self {
            InputType::Email => "email",
            InputType::Password => "new-password",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub input_class: String,
    pub input_style: String,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            class: "{props.input_class}",
            style: "{props.input_style}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            "autocapitalize": "none",
            "autocorrect": "off",
            "inputmode": props.input_type.input_mode(),
            "autocomplete": props.input_type.autocomplete(),
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorTextProps {
    #[props(!optional)]
    pub error: Option<ValidationError>,
}

#[component]
pub fn FieldErrorText(props: FieldErrorTextProps) -> Element {
    match props.error {
        Some(error) => rsx! {
            div {
                class: "error-text",
                role: "alert",
                "{error}"
            }
        },
        None => rsx! {},
    }
}
