use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    app::use_session,
    components::Page,
    router::{dashboard_for, Route},
};

#[component]
pub fn Home() -> Element {
    let state = use_session();
    let role = state.read().session.role();

    rsx!(
        Title { "Job Board" }
        Meta {
            name: "description",
            content: "Browse developer job openings and track your applications."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-6 max-w-2xl text-center",
                p { class: "text-4xl font-bold", "Find your next developer role" }
                p {
                    "Browse open positions by experience level and employment type, apply with your resume, and follow your applications from submission to offer."
                }
                ul { class: "flex gap-2",
                    li {
                        Link { to: Route::JobList {}, class: "btn btn-primary w-36", "Browse Jobs" }
                    }
                    if let Some(role) = role {
                        li {
                            Link { to: dashboard_for(role), class: "btn btn-secondary w-36", "Dashboard" }
                        }
                    } else if state.read().restored {
                        li {
                            Link { to: Route::Register {}, class: "btn btn-outline w-36", "Create Account" }
                        }
                    }
                }
            }
        }
    )
}
