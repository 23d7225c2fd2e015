use chrono::Utc;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::JobApi,
        app::use_app,
        components::{ErrorAlert, Page, Spinner},
        error::ClientError,
        router::Route,
    },
    model::{
        application::{ApplicationDto, ApplicationStatus, DashboardStats},
        job::{JobDto, JobFilter},
    },
};

#[component]
pub fn AdminDashboard() -> Element {
    let app = use_app();

    let mut overview = use_resource(move || {
        let app = app.clone();
        async move {
            let bearer = app.bearer()?;
            let jobs = app.api.get_jobs(&JobFilter::default()).await;
            let jobs = app.observe(&bearer, jobs)?;
            let applications = app.api.get_all_applications(bearer.token()).await;
            let applications = app.observe(&bearer, applications)?;

            Ok::<_, ClientError>((jobs, applications))
        }
    });

    rsx!(
        Title { "Admin Dashboard | Job Board" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                div { class: "flex justify-between items-center",
                    h1 { class: "text-2xl", "Admin Dashboard" }
                    Link { to: Route::JobPost {}, class: "btn btn-primary", "Post a Job" }
                }
                match &*overview.read_unchecked() {
                    Some(Ok((jobs, applications))) => {
                        let stats = DashboardStats::compute(jobs, applications, Utc::now());

                        rsx!(
                            StatsBar { stats }
                            ApplicationTable {
                                applications: applications.clone(),
                                on_updated: move |_| overview.restart(),
                            }
                            JobTable { jobs: jobs.clone() }
                        )
                    }
                    Some(Err(e)) => rsx!(ErrorAlert { error: e.clone() }),
                    None => rsx!(Spinner {}),
                }
            }
        }
    )
}

#[component]
fn StatsBar(stats: DashboardStats) -> Element {
    rsx!(
        div { class: "stats shadow w-full",
            div { class: "stat",
                div { class: "stat-title", "Total Jobs" }
                div { class: "stat-value", "{stats.total_jobs}" }
            }
            div { class: "stat",
                div { class: "stat-title", "Active Jobs" }
                div { class: "stat-value", "{stats.active_jobs}" }
            }
            div { class: "stat",
                div { class: "stat-title", "Applications" }
                div { class: "stat-value", "{stats.total_applications}" }
            }
            div { class: "stat",
                div { class: "stat-title", "Pending Review" }
                div { class: "stat-value", "{stats.pending_reviews}" }
            }
        }
    )
}

#[component]
fn ApplicationTable(applications: Vec<ApplicationDto>, on_updated: EventHandler<()>) -> Element {
    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Applications" }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Job" }
                                th { "Applied" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for application in applications.iter() {
                                ApplicationRow {
                                    key: "{application.id}",
                                    application: application.clone(),
                                    on_updated: on_updated,
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn ApplicationRow(application: ApplicationDto, on_updated: EventHandler<()>) -> Element {
    let app = use_app();
    let mut error = use_signal(|| None::<ClientError>);
    let applied = application.applied_date.format("%Y-%m-%d").to_string();
    let badge = application.status.badge_class();
    let id = application.id.clone();

    let onchange = move |evt: FormEvent| {
        let Ok(status) = evt.value().parse::<ApplicationStatus>() else {
            return;
        };

        let app = app.clone();
        let id = id.clone();
        spawn(async move {
            let result = match app.bearer() {
                Ok(bearer) => {
                    let result = app
                        .api
                        .update_application_status(bearer.token(), &id, status)
                        .await;
                    app.observe(&bearer, result)
                }
                Err(e) => Err(e),
            };

            match result {
                Ok(_) => {
                    error.set(None);
                    on_updated.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to update application {}: {}", id, e);
                    error.set(Some(e));
                }
            }
        });
    };

    rsx!(
        tr {
            td { "{application.job_title}" }
            td { "{applied}" }
            td {
                select {
                    class: "select select-sm {badge}",
                    onchange: onchange,
                    for status in ApplicationStatus::ALL {
                        option {
                            value: status.as_str(),
                            selected: status == application.status,
                            "{status}"
                        }
                    }
                }
                if let Some(error) = error() {
                    p { class: "text-error text-xs", "{error}" }
                }
            }
        }
    )
}

#[component]
fn JobTable(jobs: Vec<JobDto>) -> Element {
    let now = Utc::now();

    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Job Postings" }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Title" }
                                th { "Level" }
                                th { "Type" }
                                th { "Deadline" }
                                th { "Applicants" }
                            }
                        }
                        tbody {
                            for job in jobs.iter() {
                                tr { key: "{job.id}",
                                    td {
                                        Link { to: Route::JobDetail { id: job.id.clone() }, class: "link", "{job.title}" }
                                        if !job.is_active(now) {
                                            span { class: "badge badge-ghost ml-2", "Closed" }
                                        }
                                    }
                                    td { "{job.experience_level}" }
                                    td { "{job.employment_type}" }
                                    td { {job.deadline.format("%Y-%m-%d").to_string()} }
                                    td { "{job.application_count}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
