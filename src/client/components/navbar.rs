use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBriefcase, FaRightFromBracket};
use dioxus_free_icons::Icon;

use crate::client::app::{use_app, use_session};
use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    let app = use_app();
    let state = use_session();
    let navigator = use_navigator();

    let identity = state.read().session.identity().cloned();

    let logout = move |_| {
        app.store.logout();
        navigator.push(Route::Home {});
    };

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "btn btn-ghost text-xl flex gap-2",
                    Icon {
                        width: 20,
                        height: 20,
                        icon: FaBriefcase
                    }
                    "Job Board"
                }
                Link { to: Route::JobList {}, class: "btn btn-ghost", "Jobs" }
            }
            div {
                class: "navbar-end flex gap-2",
                if let Some(identity) = identity {
                    if identity.role.is_admin() {
                        Link { to: Route::AdminDashboard {}, class: "btn btn-ghost", "Dashboard" }
                    } else {
                        Link { to: Route::ApplicantDashboard {}, class: "btn btn-ghost", "My Applications" }
                    }
                    Link { to: Route::Profile {}, class: "btn btn-ghost", "{identity.full_name}" }
                    button {
                        class: "btn btn-outline flex gap-2",
                        onclick: logout,
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaRightFromBracket
                        }
                        "Logout"
                    }
                } else if state.read().restored {
                    Link { to: Route::Login {}, class: "btn btn-ghost", "Login" }
                    Link { to: Route::Register {}, class: "btn btn-primary", "Register" }
                }
            }
        }

        Outlet::<Route> {}
    }
}
