//! Route authorization.
//!
//! [`authorize`] is a total function over the current [`Session`] and a route's required
//! roles. It never caches: views call it on every render so a session change (e.g. logout on
//! a protected page) is reflected immediately.

use std::fmt;

use crate::{client::store::Session, model::user::Role};

/// Outcome of evaluating a guarded route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

/// Set of roles permitted on a route. The empty set means "any authenticated user".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoleSet(u8);

impl RoleSet {
    /// Any authenticated user
    pub const ANY: RoleSet = RoleSet(0);
    /// Administrators; `admin` and `super_admin` are equally privileged
    pub const ADMINS: RoleSet = RoleSet::of(&[Role::Admin, Role::SuperAdmin]);
    pub const APPLICANTS: RoleSet = RoleSet::of(&[Role::Applicant]);

    pub const fn of(roles: &[Role]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < roles.len() {
            bits |= role_bit(roles[i]);
            i += 1;
        }
        RoleSet(bits)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, role: Role) -> bool {
        self.0 & role_bit(role) != 0
    }

    pub fn iter(self) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |role| self.contains(*role))
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

const fn role_bit(role: Role) -> u8 {
    match role {
        Role::Applicant => 1,
        Role::Admin => 1 << 1,
        Role::SuperAdmin => 1 << 2,
    }
}

/// Decide whether the session may view a route requiring `required` roles.
pub fn authorize(session: &Session, required: RoleSet) -> GuardDecision {
    if !session.is_authenticated() {
        return GuardDecision::RedirectToLogin;
    }

    match session.role() {
        Some(role) if required.is_empty() || required.contains(role) => GuardDecision::Allow,
        _ => GuardDecision::RedirectToHome,
    }
}

/// Static authorization requirement of a protected path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequirement {
    pub path: &'static str,
    pub required_roles: RoleSet,
}

/// Protected path prefixes. Paths not listed here are public.
pub const PROTECTED_ROUTES: &[RouteRequirement] = &[
    RouteRequirement {
        path: "/admin",
        required_roles: RoleSet::ADMINS,
    },
    RouteRequirement {
        path: "/applicant",
        required_roles: RoleSet::APPLICANTS,
    },
    RouteRequirement {
        path: "/profile",
        required_roles: RoleSet::ANY,
    },
];

/// Find the requirement guarding `path`, matching whole path segments.
pub fn requirement_for(path: &str) -> Option<&'static RouteRequirement> {
    let path = path.split(['?', '#']).next().unwrap_or_default();

    PROTECTED_ROUTES.iter().find(|requirement| {
        path == requirement.path
            || path
                .strip_prefix(requirement.path)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Authorize navigation to an arbitrary path; public paths are always allowed.
pub fn authorize_path(session: &Session, path: &str) -> GuardDecision {
    match requirement_for(path) {
        Some(requirement) => authorize(session, requirement.required_roles),
        None => GuardDecision::Allow,
    }
}
