//! Form models and submission state.
//!
//! Each form holds its raw field values as typed by the user, validates them with
//! `validator`, and converts them into the request the API collaborators expect. Submission
//! progress is tracked by [`FormState`], independent of how the form is rendered.

pub mod application;
pub mod job_post;
pub mod login;
pub mod profile;
pub mod register;

use std::{borrow::Cow, collections::BTreeMap};

use validator::{ValidateEmail, ValidateUrl, ValidationError, ValidationErrors};

use crate::client::error::ClientError;

pub use application::ApplicationForm;
pub use job_post::JobPostForm;
pub use login::LoginForm;
pub use profile::ProfileForm;
pub use register::RegisterForm;

/// Submission state of a form: `Idle -> Pending -> Succeeded | Failed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState<T> {
    #[default]
    Idle,
    Pending,
    Succeeded(T),
    Failed(ClientError),
}

impl<T> FormState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Enter the pending state. Returns `false`, leaving the state unchanged, if a submission
    /// is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    pub fn resolve(&mut self, result: Result<T, ClientError>) {
        *self = match result {
            Ok(value) => Self::Succeeded(value),
            Err(e) => Self::Failed(e),
        };
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

/// First validation message for each invalid field, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Record an error, keeping an earlier message for the same field.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Ok when no field failed
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::default();
        for (field, errors) in errors.field_errors() {
            if let Some(error) = errors.first() {
                let message = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                fields.insert(&field, message);
            }
        }
        fields
    }
}

/// Validate with `validator`, collecting failures into [`FieldErrors`].
pub(crate) fn validate_fields<T: validator::Validate>(form: &T) -> FieldErrors {
    match form.validate() {
        Ok(()) => FieldErrors::default(),
        Err(errors) => errors.into(),
    }
}

pub(crate) fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub(crate) fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "This field is required"));
    }
    Ok(())
}

pub(crate) fn email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "Email is required"));
    }
    if !value.trim().validate_email() {
        return Err(invalid("email", "Invalid email"));
    }
    Ok(())
}

/// Blank is accepted; anything else must be a URL
pub(crate) fn optional_url(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.trim().validate_url() {
        return Ok(());
    }
    Err(invalid("url", "Must be a valid URL"))
}

/// `None` for blank input, otherwise the trimmed value
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Split comma-separated input into trimmed, non-empty items.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
