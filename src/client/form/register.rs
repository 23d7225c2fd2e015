use validator::{Validate, ValidationError};

use crate::{
    client::form::{email, invalid, validate_fields, FieldErrors},
    model::user::{RegisterRequest, Role},
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct RegisterForm {
    #[validate(custom(function = "full_name"))]
    pub full_name: String,
    #[validate(custom(function = "email"))]
    pub email: String,
    #[validate(custom(function = "password"))]
    pub password: String,
    pub role: Role,
}

fn full_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "Full name is required"));
    }
    Ok(())
}

fn password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(invalid("required", "Password is required"));
    }
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(invalid("length", "Password must be at least 6 characters"));
    }
    Ok(())
}

impl RegisterForm {
    pub fn to_request(&self) -> Result<RegisterRequest, FieldErrors> {
        validate_fields(self).into_result()?;

        Ok(RegisterRequest {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Expect new accounts to default to the applicant role
    fn defaults_to_applicant() {
        assert_eq!(RegisterForm::default().role, Role::Applicant);
    }

    #[test]
    /// Expect a valid form to carry the chosen role
    fn builds_request_with_role() {
        let form = RegisterForm {
            full_name: "Linus".to_string(),
            email: "linus@example.com".to_string(),
            password: "kernel".to_string(),
            role: Role::Admin,
        };

        let request = form.to_request().unwrap();

        assert_eq!(request.role, Role::Admin);
        assert_eq!(request.full_name, "Linus");
    }

    #[test]
    /// Expect short passwords and blank names to be rejected
    fn rejects_short_password() {
        let form = RegisterForm {
            full_name: "  ".to_string(),
            email: "linus@example.com".to_string(),
            password: "12345".to_string(),
            role: Role::Applicant,
        };

        let errors = form.to_request().unwrap_err();

        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(errors.get("full_name"), Some("Full name is required"));
        assert_eq!(errors.get("email"), None);
    }
}
