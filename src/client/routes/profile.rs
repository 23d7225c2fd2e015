use dioxus::prelude::*;

use crate::{
    client::{
        app::{use_app, use_session},
        components::{ErrorAlert, Page, SelectField, TextArea, TextField},
        form::{FieldErrors, FormState, ProfileForm},
    },
    model::{job::DeveloperLevel, user::UserDto},
};

#[component]
pub fn Profile() -> Element {
    let state = use_session();
    let identity = state.read().session.identity().cloned();

    rsx!(
        Title { "Profile | Job Board" }
        Page { class: "flex flex-col items-center",
            if let Some(identity) = identity {
                ProfileEditor { key: "{identity.id}", identity: identity }
            }
        }
    )
}

#[component]
fn ProfileEditor(identity: UserDto) -> Element {
    let app = use_app();
    let initial = use_hook(|| ProfileForm::from_identity(&identity));

    let full_name = use_signal(|| initial.full_name.clone());
    let email = use_signal(|| initial.email.clone());
    let phone = use_signal(|| initial.phone.clone());
    let bio = use_signal(|| initial.bio.clone());
    let skills = use_signal(|| initial.skills.clone());
    let developer_level = use_signal(|| initial.developer_level.clone());
    let github_profile = use_signal(|| initial.github_profile.clone());
    let linkedin_profile = use_signal(|| initial.linkedin_profile.clone());
    let mut errors = use_signal(FieldErrors::default);
    let mut submission = use_signal(FormState::<UserDto>::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let form = ProfileForm {
            full_name: full_name(),
            email: email(),
            phone: phone(),
            bio: bio(),
            skills: skills(),
            developer_level: developer_level(),
            github_profile: github_profile(),
            linkedin_profile: linkedin_profile(),
        };
        let patch = match form.to_patch() {
            Ok(patch) => patch,
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
            let result = app.store.update_profile(&patch).await;
            submission.write().resolve(result);
        });
    };

    let pending = submission.read().is_pending();
    let failure = submission.read().error().cloned();
    let saved = matches!(*submission.read(), FormState::Succeeded(_));
    let error = move |field: &str| errors.read().get(field).map(str::to_string);

    rsx!(
        form { class: "card shadow-sm w-full max-w-2xl",
            onsubmit: onsubmit,
            div { class: "card-body gap-2",
                div { class: "flex items-center gap-4",
                    if let Some(picture) = &identity.profile_picture {
                        div { class: "avatar",
                            div { class: "w-16 rounded-full",
                                img { src: "{picture}", alt: "{identity.full_name}" }
                            }
                        }
                    }
                    div {
                        h1 { class: "card-title text-2xl", "{identity.full_name}" }
                        p { class: "text-sm opacity-70", "{identity.role.label()}" }
                    }
                }
                if let Some(error) = failure {
                    ErrorAlert { error: error }
                }
                if saved {
                    div { role: "alert", class: "alert alert-success", "Profile updated" }
                }
                TextField { label: "Full Name", name: "full_name", value: full_name, error: error("full_name") }
                TextField { label: "Email", name: "email", kind: "email", value: email, error: error("email") }
                TextField { label: "Phone", name: "phone", kind: "tel", value: phone, error: error("phone") }
                TextArea { label: "Bio", name: "bio", value: bio, error: error("bio") }
                TextField { label: "Skills (comma separated)", name: "skills", value: skills, error: error("skills") }
                SelectField {
                    label: "Developer Level",
                    name: "developer_level",
                    value: developer_level,
                    options: DeveloperLevel::ALL.iter().map(|level| level.as_str()).collect::<Vec<_>>(),
                    placeholder: "Not specified",
                    error: error("developer_level"),
                }
                TextField { label: "GitHub", name: "github_profile", kind: "url", value: github_profile, error: error("github_profile") }
                TextField { label: "LinkedIn", name: "linkedin_profile", kind: "url", value: linkedin_profile, error: error("linkedin_profile") }
                button {
                    class: "btn btn-primary mt-2",
                    r#type: "submit",
                    disabled: pending,
                    "Save"
                }
            }
        }
    )
}
