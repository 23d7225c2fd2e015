use dioxus::prelude::*;

use crate::{
    client::{
        app::use_app,
        components::{ErrorAlert, Page, TextField},
        form::{FieldErrors, FormState, LoginForm},
        router::{dashboard_for, Route},
    },
    model::user::UserDto,
};

#[component]
pub fn Login() -> Element {
    let app = use_app();
    let navigator = use_navigator();

    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut submission = use_signal(FormState::<UserDto>::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let form = LoginForm {
            email: email(),
            password: password(),
        };
        let request = match form.to_request() {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());

        if !submission.write().begin() {
            return;
        }

        let app = app.clone();
        spawn(async move {
            let result = app.store.login(&request).await;
            if let Ok(identity) = &result {
                navigator.push(dashboard_for(identity.role));
            }
            submission.write().resolve(result);
        });
    };

    let pending = submission.read().is_pending();
    let failure = submission.read().error().cloned();

    rsx!(
        Title { "Login | Job Board" }
        Page { class: "flex items-center justify-center",
            form { class: "card shadow-sm w-full max-w-md",
                onsubmit: onsubmit,
                div { class: "card-body gap-2",
                    h1 { class: "card-title text-2xl", "Log in" }
                    if let Some(error) = failure {
                        ErrorAlert { error: error }
                    }
                    TextField {
                        label: "Email",
                        name: "email",
                        kind: "email",
                        value: email,
                        error: errors.read().get("email").map(str::to_string),
                    }
                    TextField {
                        label: "Password",
                        name: "password",
                        kind: "password",
                        value: password,
                        error: errors.read().get("password").map(str::to_string),
                    }
                    button {
                        class: "btn btn-primary mt-2",
                        r#type: "submit",
                        disabled: pending,
                        if pending {
                            span { class: "loading loading-spinner" }
                        }
                        "Log in"
                    }
                    p { class: "text-sm text-center",
                        "No account yet? "
                        Link { to: Route::Register {}, class: "link", "Register" }
                    }
                }
            }
        }
    )
}
