use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    app::use_session,
    components::Spinner,
    guard::{authorize, GuardDecision, RoleSet},
    router::Route,
};

/// Renders the nested route only while the session satisfies `required_roles`.
///
/// Re-evaluated whenever the session changes; nothing is rendered until start-up
/// restoration finishes.
#[component]
pub fn RouteGuard(required_roles: RoleSet) -> Element {
    let state = use_session();
    let navigator = use_navigator();

    let decision = use_memo(move || {
        let state = state.read();
        state
            .restored
            .then(|| authorize(&state.session, required_roles))
    });

    use_effect(move || match decision() {
        Some(GuardDecision::RedirectToLogin) => {
            tracing::debug!(?required_roles, "Guarded route requires login");
            navigator.replace(Route::Login {});
        }
        Some(GuardDecision::RedirectToHome) => {
            tracing::debug!(?required_roles, "Role not permitted on guarded route");
            navigator.replace(Route::Home {});
        }
        _ => {}
    });

    match decision() {
        Some(GuardDecision::Allow) => rsx!(Outlet::<Route> {}),
        Some(_) => rsx!(),
        None => rsx!(Spinner {}),
    }
}

#[component]
pub fn AdminLayout() -> Element {
    rsx!(RouteGuard {
        required_roles: RoleSet::ADMINS
    })
}

#[component]
pub fn ApplicantLayout() -> Element {
    rsx!(RouteGuard {
        required_roles: RoleSet::APPLICANTS
    })
}

#[component]
pub fn MemberLayout() -> Element {
    rsx!(RouteGuard {
        required_roles: RoleSet::ANY
    })
}
