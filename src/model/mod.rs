//! Wire models exchanged with the job board API.

pub mod api;
pub mod application;
pub mod job;
pub mod user;

use thiserror::Error;

/// Returned when a string does not name any variant of one of the closed
/// model enumerations (roles, developer levels, employment types, statuses).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {value:?}")]
pub struct UnknownVariantError {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariantError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
