use crate::console_debug;
use dioxus::prelude::*;

use crate::components::forms::SignupForm;
use crate::features::signup::{submit_signup, AppRoute, SignupAction, SignupState};
use crate::services::client::SignupService;

const SIGNUP_CSS: Asset = asset!("/assets/styling/signup.css");

#[derive(Props, PartialEq, Clone)]
pub struct SignupScreenProps {
    /// Creates the account
    pub service: SignupService,
    /// Performs a replacing navigation to the given route
    pub on_navigate: EventHandler<AppRoute>,
}

#[component]
pub fn SignupScreen(props: SignupScreenProps) -> Element {
    let mut state = use_signal(SignupState::default);

    // Dispatch function for actions - in-place reduction keeps Signal reactivity
    let dispatch = EventHandler::new(move |action: SignupAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    let service = props.service.clone();
    let navigator = props.on_navigate;
    // Spawned on this scope: if the screen unmounts mid-request the task is
    // dropped and its result never reaches the state.
    let on_submit = EventHandler::new(move |_: ()| {
        let service = service.clone();
        spawn(async move {
            let outcome = submit_signup(&state, service.provider(), &navigator).await;
            console_debug!("[SignupScreen] Submit finished: {}", outcome.label());
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: SIGNUP_CSS }

        SignupForm {
            state: state,
            dispatch: dispatch,
            on_submit: on_submit
        }
    }
}
