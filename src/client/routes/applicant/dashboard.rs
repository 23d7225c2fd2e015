use dioxus::prelude::*;

use crate::client::{
    api::JobApi,
    app::{use_app, use_session},
    components::{ErrorAlert, Page, Spinner},
    error::ClientError,
    router::Route,
};

#[component]
pub fn ApplicantDashboard() -> Element {
    let app = use_app();
    let state = use_session();

    let applications = use_resource(move || {
        let app = app.clone();
        let user_id = state.read().session.identity().map(|identity| identity.id.clone());
        async move {
            let bearer = app.bearer()?;
            let user_id = user_id.ok_or(ClientError::NotAuthenticated)?;
            let applications = app.api.get_user_applications(bearer.token(), &user_id).await;
            app.observe(&bearer, applications)
        }
    });

    rsx!(
        Title { "My Applications | Job Board" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1080px] flex flex-col gap-4",
                div { class: "flex justify-between items-center",
                    h1 { class: "text-2xl", "My Applications" }
                    Link { to: Route::JobList {}, class: "btn btn-primary", "Find Jobs" }
                }
                match &*applications.read_unchecked() {
                    Some(Ok(applications)) if applications.is_empty() => rsx!(
                        p { class: "text-center opacity-70", "You have not applied to any jobs yet." }
                    ),
                    Some(Ok(applications)) => rsx!(
                        div { class: "overflow-x-auto card shadow-sm",
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
                                        tr { key: "{application.id}",
                                            td {
                                                Link {
                                                    to: Route::JobDetail { id: application.job_id.clone() },
                                                    class: "link",
                                                    "{application.job_title}"
                                                }
                                            }
                                            td { {application.applied_date.format("%Y-%m-%d").to_string()} }
                                            td {
                                                span {
                                                    class: "badge {application.status.badge_class()}",
                                                    "{application.status}"
                                                }
                                            }
                                        }
                                    }
                                }
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
