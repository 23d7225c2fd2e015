use dioxus::prelude::*;

use crate::{
    client::{
        app::use_app,
        components::{ErrorAlert, Page, SelectField, TextField},
        form::{FieldErrors, FormState, RegisterForm},
        router::Route,
    },
    model::user::{Role, UserDto},
};

#[component]
pub fn Register() -> Element {
    let app = use_app();
    let navigator = use_navigator();

    let full_name = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let role = use_signal(|| Role::Applicant.as_str().to_string());
    let mut errors = use_signal(FieldErrors::default);
    let mut submission = use_signal(FormState::<UserDto>::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let form = RegisterForm {
            full_name: full_name(),
            email: email(),
            password: password(),
            role: role.read().parse().unwrap_or_default(),
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
            let result = app.store.register(&request).await;
            if result.is_ok() {
                navigator.push(Route::Login {});
            }
            submission.write().resolve(result);
        });
    };

    let pending = submission.read().is_pending();
    let failure = submission.read().error().cloned();

    rsx!(
        Title { "Register | Job Board" }
        Page { class: "flex items-center justify-center",
            form { class: "card shadow-sm w-full max-w-md",
                onsubmit: onsubmit,
                div { class: "card-body gap-2",
                    h1 { class: "card-title text-2xl", "Create an account" }
                    if let Some(error) = failure {
                        ErrorAlert { error: error }
                    }
                    TextField {
                        label: "Full Name",
                        name: "full_name",
                        value: full_name,
                        error: errors.read().get("full_name").map(str::to_string),
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
                    SelectField {
                        label: "Account Type",
                        name: "role",
                        value: role,
                        options: vec![Role::Applicant.as_str(), Role::Admin.as_str()],
                        placeholder: "Select a role",
                    }
                    button {
                        class: "btn btn-primary mt-2",
                        r#type: "submit",
                        disabled: pending,
                        "Register"
                    }
                    p { class: "text-sm text-center",
                        "Already registered? "
                        Link { to: Route::Login {}, class: "link", "Log in" }
                    }
                }
            }
        }
    )
}
