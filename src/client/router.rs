use dioxus::prelude::*;

use crate::{
    client::{
        components::{AdminLayout, ApplicantLayout, MemberLayout, Navbar},
        routes::{
            admin::{AdminDashboard, JobPost},
            applicant::{ApplicantDashboard, Apply},
            Home, JobDetail, JobList, Login, NotFound, Profile, Register,
        },
    },
    model::user::Role,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/jobs")]
    JobList {},

    #[route("/jobs/:id")]
    JobDetail { id: String },

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[nest("/admin")]

        #[layout(AdminLayout)]

        #[route("/")]
        AdminDashboard {},

        #[route("/jobs/new")]
        JobPost {},

        #[end_layout]

    #[end_nest]

    #[nest("/applicant")]

        #[layout(ApplicantLayout)]

        #[route("/")]
        ApplicantDashboard {},

        #[route("/jobs/:id/apply")]
        Apply { id: String },

        #[end_layout]

    #[end_nest]

    #[layout(MemberLayout)]

    #[route("/profile")]
    Profile {},

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Landing page for a freshly authenticated user.
pub fn dashboard_for(role: Role) -> Route {
    if role.is_admin() {
        Route::AdminDashboard {}
    } else {
        Route::ApplicantDashboard {}
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::client::guard::{requirement_for, RoleSet};

    #[test]
    /// Expect admins to land on the admin dashboard and applicants on theirs
    fn dashboard_by_role() {
        assert_eq!(dashboard_for(Role::SuperAdmin), Route::AdminDashboard {});
        assert_eq!(dashboard_for(Role::Applicant), Route::ApplicantDashboard {});
    }

    #[test]
    /// Expect every guarded route's path to be covered by the matching requirement
    fn guarded_routes_match_requirements() {
        let cases = [
            (Route::AdminDashboard {}, RoleSet::ADMINS),
            (Route::JobPost {}, RoleSet::ADMINS),
            (Route::ApplicantDashboard {}, RoleSet::APPLICANTS),
            (
                Route::Apply {
                    id: "42".to_string(),
                },
                RoleSet::APPLICANTS,
            ),
            (Route::Profile {}, RoleSet::ANY),
        ];

        for (route, required) in cases {
            let path = route.to_string();
            assert_eq!(
                requirement_for(&path).map(|r| r.required_roles),
                Some(required),
                "path = {path}"
            );
        }
    }

    #[test]
    /// Expect public pages to carry no requirement
    fn public_routes_are_unguarded() {
        for route in [
            Route::Home {},
            Route::JobList {},
            Route::Login {},
            Route::JobDetail {
                id: "1".to_string(),
            },
        ] {
            assert_eq!(requirement_for(&route.to_string()), None);
        }
    }

    #[test]
    /// Expect nested paths to parse into their routes
    fn parses_nested_paths() {
        assert_eq!(
            Route::from_str("/applicant/jobs/7/apply").ok(),
            Some(Route::Apply {
                id: "7".to_string()
            })
        );
    }
}
