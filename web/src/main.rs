use dioxus::prelude::*;
use signup_ui::{AppRoute, HttpSignupClient, SignupScreen, SignupService, SignupServiceConfig};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/signup")]
    Signup {},
    #[route("/login")]
    Login {},
}

impl From<AppRoute> for Route {
    fn from(route: AppRoute) -> Self {
        match route {
            AppRoute::Root => Route::Home {},
            AppRoute::Login => Route::Login {},
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        div {
            class: "page",
            h1 { "Welcome" }
            Link { to: Route::Signup {}, "Create Account" }
        }
    }
}

#[component]
fn Signup() -> Element {
    let navigator = use_navigator();
    let service = use_hook(|| {
        HttpSignupClient::new(SignupServiceConfig::from_window()).map(SignupService::new)
    });

    match service {
        Ok(service) => rsx! {
            SignupScreen {
                service: service,
                on_navigate: move |route: AppRoute| {
                    navigator.replace(Route::from(route));
                }
            }
        },
        Err(errors) => rsx! {
            div {
                class: "page",
                h1 { "Sign up unavailable" }
                for error in errors {
                    p { "{error}" }
                }
            }
        },
    }
}

#[component]
fn Login() -> Element {
    rsx! {
        div {
            class: "page",
            h1 { "Log In" }
            Link { to: Route::Signup {}, "Need an account? Sign Up" }
        }
    }
}
