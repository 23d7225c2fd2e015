use dioxus::prelude::*;

use crate::client::error::{ClientError, Recovery};

/// Inline error message for a failed request.
#[component]
pub fn ErrorAlert(error: ClientError) -> Element {
    let hint = match error.recovery() {
        Recovery::Retry => Some("Please try again."),
        Recovery::Reauthenticate => Some("Please log in again."),
        _ => None,
    };

    rsx!(
        div { role: "alert", class: "alert alert-error",
            span { "{error}" }
            if let Some(hint) = hint {
                span { class: "text-sm", "{hint}" }
            }
        }
    )
}

#[component]
pub fn Spinner() -> Element {
    rsx!(
        div { class: "flex justify-center p-8",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}
