use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct AlertDialogProps {
    pub title: String,
    pub message: String,
    pub on_dismiss: EventHandler<()>,
}

/// Modal alert. The overlay covers the screen so nothing behind it can be
/// used until the dialog is dismissed.
#[component]
pub fn AlertDialog(props: AlertDialogProps) -> Element {
    rsx! {
        div {
            class: "alert-overlay",
            div {
                class: "alert-dialog",
                role: "alertdialog",
                "aria-modal": "true",
                h2 {
                    class: "alert-title",
                    "{props.title}"
                }
                p {
                    class: "alert-message",
                    "{props.message}"
                }
                button {
                    class: "alert-button",
                    autofocus: true,
                    onclick: move |_| props.on_dismiss.call(()),
                    "OK"
                }
            }
        }
    }
}
