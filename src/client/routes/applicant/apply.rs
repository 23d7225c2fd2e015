use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::JobApi,
        app::use_app,
        components::{ErrorAlert, Page, SelectField, Spinner, TextArea, TextField},
        form::{ApplicationForm, FieldErrors, FormState},
        router::Route,
    },
    model::{
        application::{ApplicationReceiptDto, ResumeFile},
        job::DeveloperLevel,
    },
};

#[component]
pub fn Apply(id: String) -> Element {
    let app = use_app();

    let job = use_resource(use_reactive!(|id| {
        let app = app.clone();
        async move { app.api.get_job_by_id(&id).await }
    }));

    rsx!(
        Title { "Apply | Job Board" }
        Page { class: "flex flex-col items-center",
            match &*job.read_unchecked() {
                Some(Ok(job)) => rsx!(
                    ApplicationEditor { key: "{job.id}", job_id: job.id.clone(), job_title: job.title.clone() }
                ),
                Some(Err(e)) => rsx!(ErrorAlert { error: e.clone() }),
                None => rsx!(Spinner {}),
            }
        }
    )
}

#[component]
fn ApplicationEditor(job_id: String, job_title: String) -> Element {
    let app = use_app();
    let navigator = use_navigator();

    let cover_letter = use_signal(String::new);
    let developer_level = use_signal(String::new);
    let years_of_experience = use_signal(String::new);
    let portfolio = use_signal(String::new);
    let mut resume = use_signal(|| None::<ResumeFile>);
    let mut errors = use_signal(FieldErrors::default);
    let mut submission = use_signal(FormState::<ApplicationReceiptDto>::default);

    let onresume = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            resume.set(None);
            return;
        };

        match file.read_bytes().await {
            Ok(bytes) => resume.set(Some(ResumeFile::new(file.name(), bytes.to_vec()))),
            Err(e) => {
                tracing::error!("Failed to read resume {}: {}", file.name(), e);
                resume.set(None);
            }
        }
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let form = ApplicationForm {
            cover_letter: cover_letter(),
            developer_level: developer_level(),
            years_of_experience: years_of_experience(),
            portfolio: portfolio(),
            resume: resume(),
        };
        let application = match form.to_request() {
            Ok(application) => application,
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
        let job_id = job_id.clone();
        spawn(async move {
            let result = match app.bearer() {
                Ok(bearer) => {
                    let result = app
                        .api
                        .apply_for_job(bearer.token(), &job_id, application)
                        .await;
                    app.observe(&bearer, result)
                }
                Err(e) => Err(e),
            };
            if result.is_ok() {
                navigator.push(Route::ApplicantDashboard {});
            }
            submission.write().resolve(result);
        });
    };

    let pending = submission.read().is_pending();
    let failure = submission.read().error().cloned();
    let error = move |field: &str| errors.read().get(field).map(str::to_string);
    let resume_name = resume.read().as_ref().map(|file| file.file_name.clone());

    rsx!(
        form { class: "card shadow-sm w-full max-w-2xl",
            onsubmit: onsubmit,
            div { class: "card-body gap-2",
                h1 { class: "card-title text-2xl", "Apply for {job_title}" }
                if let Some(error) = failure {
                    ErrorAlert { error: error }
                }
                TextArea { label: "Cover Letter", name: "cover_letter", value: cover_letter, rows: 8, error: error("cover_letter") }
                div { class: "flex flex-col md:flex-row gap-2",
                    SelectField {
                        label: "Developer Level",
                        name: "developer_level",
                        value: developer_level,
                        options: DeveloperLevel::ALL.iter().map(|level| level.as_str()).collect::<Vec<_>>(),
                        error: error("developer_level"),
                    }
                    TextField {
                        label: "Years of Experience",
                        name: "years_of_experience",
                        kind: "number",
                        value: years_of_experience,
                        error: error("years_of_experience"),
                    }
                }
                TextField { label: "Portfolio", name: "portfolio", kind: "url", value: portfolio, error: error("portfolio") }
                fieldset { class: "fieldset w-full",
                    legend { class: "fieldset-legend", "Resume (PDF, DOC, DOCX)" }
                    input {
                        class: "file-input w-full",
                        r#type: "file",
                        accept: ".pdf,.doc,.docx",
                        onchange: onresume,
                    }
                    if let Some(name) = resume_name {
                        p { class: "label", "{name}" }
                    }
                    if let Some(message) = error("resume") {
                        p { class: "label text-error", "{message}" }
                    }
                }
                button {
                    class: "btn btn-primary mt-2",
                    r#type: "submit",
                    disabled: pending,
                    "Submit Application"
                }
            }
        }
    )
}
