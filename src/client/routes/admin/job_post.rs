use dioxus::prelude::*;

use crate::{
    client::{
        api::JobApi,
        app::use_app,
        components::{ErrorAlert, Page, SelectField, TextArea, TextField},
        form::{FieldErrors, FormState, JobPostForm},
        router::Route,
    },
    model::job::{DeveloperLevel, EmploymentType, JobDto},
};

#[component]
pub fn JobPost() -> Element {
    let app = use_app();
    let navigator = use_navigator();

    let title = use_signal(String::new);
    let description = use_signal(String::new);
    let experience_level = use_signal(String::new);
    let employment_type = use_signal(String::new);
    let required_skills = use_signal(String::new);
    let requirements = use_signal(String::new);
    let deadline = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut submission = use_signal(FormState::<JobDto>::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let form = JobPostForm {
            title: title(),
            description: description(),
            experience_level: experience_level(),
            employment_type: employment_type(),
            required_skills: required_skills(),
            requirements: requirements(),
            deadline: deadline(),
        };
        let job = match form.to_request() {
            Ok(job) => job,
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
            let result = match app.bearer() {
                Ok(bearer) => {
                    let result = app.api.create_job(bearer.token(), &job).await;
                    app.observe(&bearer, result)
                }
                Err(e) => Err(e),
            };
            if result.is_ok() {
                navigator.push(Route::AdminDashboard {});
            }
            submission.write().resolve(result);
        });
    };

    let pending = submission.read().is_pending();
    let failure = submission.read().error().cloned();
    let error = move |field: &str| errors.read().get(field).map(str::to_string);

    rsx!(
        Title { "Post a Job | Job Board" }
        Page { class: "flex flex-col items-center",
            form { class: "card shadow-sm w-full max-w-2xl",
                onsubmit: onsubmit,
                div { class: "card-body gap-2",
                    h1 { class: "card-title text-2xl", "Post a Job" }
                    if let Some(error) = failure {
                        ErrorAlert { error: error }
                    }
                    TextField { label: "Title", name: "title", value: title, error: error("title") }
                    TextArea { label: "Description", name: "description", value: description, rows: 6, error: error("description") }
                    div { class: "flex flex-col md:flex-row gap-2",
                        SelectField {
                            label: "Experience Level",
                            name: "experience_level",
                            value: experience_level,
                            options: DeveloperLevel::ALL.iter().map(|level| level.as_str()).collect::<Vec<_>>(),
                            error: error("experience_level"),
                        }
                        SelectField {
                            label: "Employment Type",
                            name: "employment_type",
                            value: employment_type,
                            options: EmploymentType::ALL.iter().map(|kind| kind.as_str()).collect::<Vec<_>>(),
                            error: error("employment_type"),
                        }
                    }
                    TextField { label: "Required Skills (comma separated)", name: "required_skills", value: required_skills, error: error("required_skills") }
                    TextArea { label: "Requirements (one per line)", name: "requirements", value: requirements, error: error("requirements") }
                    TextField { label: "Deadline", name: "deadline", kind: "date", value: deadline, error: error("deadline") }
                    div { class: "flex justify-end gap-2 mt-2",
                        Link { to: Route::AdminDashboard {}, class: "btn btn-ghost", "Cancel" }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: pending,
                            "Publish"
                        }
                    }
                }
            }
        }
    )
}
