use validator::{Validate, ValidationError};

use crate::{
    client::form::{email, invalid, non_blank, optional_url, split_list, validate_fields, FieldErrors},
    model::{
        job::DeveloperLevel,
        user::{ProfilePatch, UserDto},
    },
};

pub const MAX_BIO_LENGTH: u64 = 500;

/// Editable profile fields, prefilled from the signed-in identity.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ProfileForm {
    #[validate(custom(function = "full_name"))]
    pub full_name: String,
    #[validate(custom(function = "email"))]
    pub email: String,
    #[validate(custom(function = "phone"))]
    pub phone: String,
    #[validate(length(max = MAX_BIO_LENGTH, message = "Bio must be at most 500 characters"))]
    pub bio: String,
    #[validate(custom(function = "skills"))]
    pub skills: String,
    #[validate(custom(function = "developer_level"))]
    pub developer_level: String,
    #[validate(custom(function = "optional_url"))]
    pub github_profile: String,
    #[validate(custom(function = "optional_url"))]
    pub linkedin_profile: String,
}

fn full_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "Full name is required"));
    }
    Ok(())
}

/// Digits, spaces and dashes with an optional leading `+`. Blank is accepted.
fn phone(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }

    let digits = value.strip_prefix('+').unwrap_or(value);
    let valid = !digits.is_empty()
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '-');

    if !valid {
        return Err(invalid("phone", "Invalid phone number"));
    }
    Ok(())
}

fn skills(value: &str) -> Result<(), ValidationError> {
    if split_list(value).is_empty() {
        return Err(invalid("required", "Skills are required"));
    }
    Ok(())
}

fn developer_level(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.parse::<DeveloperLevel>().is_ok() {
        return Ok(());
    }
    Err(invalid("developer_level", "Unknown developer level"))
}

impl ProfileForm {
    pub fn from_identity(identity: &UserDto) -> Self {
        Self {
            full_name: identity.full_name.clone(),
            email: identity.email.clone(),
            phone: identity.phone.clone().unwrap_or_default(),
            bio: identity.bio.clone().unwrap_or_default(),
            skills: identity.skills.join(", "),
            developer_level: identity
                .developer_level
                .map(|level| level.to_string())
                .unwrap_or_default(),
            github_profile: identity.github_profile.clone().unwrap_or_default(),
            linkedin_profile: identity.linkedin_profile.clone().unwrap_or_default(),
        }
    }

    pub fn to_patch(&self) -> Result<ProfilePatch, FieldErrors> {
        validate_fields(self).into_result()?;

        Ok(ProfilePatch {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_blank(&self.phone),
            bio: non_blank(&self.bio),
            skills: split_list(&self.skills),
            developer_level: self.developer_level.parse().ok(),
            github_profile: non_blank(&self.github_profile),
            linkedin_profile: non_blank(&self.linkedin_profile),
        })
    }
}
