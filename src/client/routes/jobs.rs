use chrono::Utc;
use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        api::JobApi,
        app::{use_app, use_session},
        components::{ErrorAlert, Page, SelectField, Spinner},
        form::non_blank,
        router::Route,
    },
    model::job::{DeveloperLevel, EmploymentType, JobDto, JobFilter},
};

#[component]
pub fn JobList() -> Element {
    let app = use_app();
    let mut search = use_signal(String::new);
    let experience_level = use_signal(String::new);
    let employment_type = use_signal(String::new);

    let jobs = use_resource(move || {
        let app = app.clone();
        let filter = JobFilter {
            search: non_blank(&search.read()),
            experience_level: experience_level.read().parse().ok(),
            employment_type: employment_type.read().parse().ok(),
        };
        async move { app.api.get_jobs(&filter).await }
    });

    rsx!(
        Title { "Jobs | Job Board" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1080px] flex flex-col gap-4",
                div { class: "flex flex-col md:flex-row gap-2 items-end",
                    fieldset { class: "fieldset w-full",
                        legend { class: "fieldset-legend", "Search" }
                        input {
                            class: "input w-full",
                            placeholder: "Title, company or skill",
                            value: "{search}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                    }
                    SelectField {
                        label: "Experience Level",
                        name: "experience_level",
                        value: experience_level,
                        options: DeveloperLevel::ALL.iter().map(|level| level.as_str()).collect::<Vec<_>>(),
                        placeholder: "Any level",
                    }
                    SelectField {
                        label: "Employment Type",
                        name: "employment_type",
                        value: employment_type,
                        options: EmploymentType::ALL.iter().map(|kind| kind.as_str()).collect::<Vec<_>>(),
                        placeholder: "Any type",
                    }
                }
                match &*jobs.read_unchecked() {
                    Some(Ok(jobs)) if jobs.is_empty() => rsx!(
                        p { class: "text-center opacity-70", "No jobs match your filters." }
                    ),
                    Some(Ok(jobs)) => rsx!(
                        div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                            for job in jobs.iter() {
                                JobCard { key: "{job.id}", job: job.clone() }
                            }
                        }
                    ),
                    Some(Err(e)) => rsx!(ErrorAlert { error: e.clone() }),
                    None => rsx!(Spinner {}),
                }
            }
        }
    )
}

#[component]
fn JobCard(job: JobDto) -> Element {
    let active = job.is_active(Utc::now());
    let deadline = job.deadline.format("%b %d, %Y").to_string();

    rsx!(
        div { class: "card shadow-sm bg-base-100",
            div { class: "card-body",
                h2 { class: "card-title",
                    "{job.title}"
                    if !active {
                        span { class: "badge badge-ghost", "Closed" }
                    }
                }
                if let Some(company) = &job.company {
                    p { class: "text-sm opacity-70", "{company}" }
                }
                div { class: "flex flex-wrap gap-1",
                    span { class: "badge badge-primary", "{job.experience_level}" }
                    span { class: "badge badge-secondary", "{job.employment_type}" }
                    for skill in job.required_skills.iter() {
                        span { class: "badge badge-outline", "{skill}" }
                    }
                }
                p { class: "text-sm", "Apply by {deadline}" }
                div { class: "card-actions justify-end",
                    Link {
                        to: Route::JobDetail { id: job.id.clone() },
                        class: "btn btn-sm btn-outline",
                        "View"
                    }
                }
            }
        }
    )
}

#[component]
pub fn JobDetail(id: String) -> Element {
    let app = use_app();
    let state = use_session();

    let job = use_resource(use_reactive!(|id| {
        let app = app.clone();
        async move { app.api.get_job_by_id(&id).await }
    }));

    let is_applicant = state
        .read()
        .session
        .role()
        .is_some_and(|role| !role.is_admin());
    let authenticated = state.read().session.is_authenticated();

    rsx!(
        Title { "Job | Job Board" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[860px]",
                match &*job.read_unchecked() {
                    Some(Ok(job)) => {
                        let active = job.is_active(Utc::now());
                        let deadline = job.deadline.format("%b %d, %Y").to_string();

                        rsx!(
                            div { class: "card shadow-sm",
                                div { class: "card-body gap-4",
                                    h1 { class: "card-title text-2xl", "{job.title}" }
                                    div { class: "flex flex-wrap gap-1",
                                        span { class: "badge badge-primary", "{job.experience_level}" }
                                        span { class: "badge badge-secondary", "{job.employment_type}" }
                                        span { class: "badge badge-ghost", "{job.application_count} applicants" }
                                    }
                                    p { class: "whitespace-pre-line", "{job.description}" }
                                    if !job.requirements.is_empty() {
                                        h2 { class: "text-lg font-semibold", "Requirements" }
                                        ul { class: "list-disc pl-6",
                                            for requirement in job.requirements.iter() {
                                                li { "{requirement}" }
                                            }
                                        }
                                    }
                                    if !job.required_skills.is_empty() {
                                        h2 { class: "text-lg font-semibold", "Skills" }
                                        div { class: "flex flex-wrap gap-1",
                                            for skill in job.required_skills.iter() {
                                                span { class: "badge badge-outline", "{skill}" }
                                            }
                                        }
                                    }
                                    p { class: "text-sm", "Applications close {deadline}" }
                                    div { class: "card-actions justify-end",
                                        if !active {
                                            span { class: "badge badge-ghost", "This position is closed" }
                                        } else if is_applicant {
                                            Link {
                                                to: Route::Apply { id: job.id.clone() },
                                                class: "btn btn-primary",
                                                "Apply"
                                            }
                                        } else if !authenticated {
                                            Link { to: Route::Login {}, class: "btn btn-primary", "Log in to apply" }
                                        }
                                    }
                                }
                            }
                        )
                    }
                    Some(Err(e)) => rsx!(ErrorAlert { error: e.clone() }),
                    None => rsx!(Spinner {}),
                }
            }
        }
    )
}
