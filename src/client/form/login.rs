use validator::{Validate, ValidationError};

use crate::{
    client::form::{email, invalid, validate_fields, FieldErrors},
    model::user::LoginRequest,
};

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct LoginForm {
    #[validate(custom(function = "email"))]
    pub email: String,
    #[validate(custom(function = "password"))]
    pub password: String,
}

fn password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(invalid("required", "Password is required"));
    }
    Ok(())
}

impl LoginForm {
    pub fn to_request(&self) -> Result<LoginRequest, FieldErrors> {
        validate_fields(self).into_result()?;

        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}
