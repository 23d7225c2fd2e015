use chrono::{DateTime, NaiveDate, Utc};
use validator::{Validate, ValidationError};

use crate::{
    client::form::{invalid, required, split_list, validate_fields, FieldErrors},
    model::job::{DeveloperLevel, EmploymentType, NewJobDto},
};

/// Admin form for publishing a job. `deadline` holds an HTML date input value (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct JobPostForm {
    #[validate(custom(function = "required"))]
    pub title: String,
    #[validate(custom(function = "required"))]
    pub description: String,
    #[validate(custom(function = "experience_level"))]
    pub experience_level: String,
    #[validate(custom(function = "employment_type"))]
    pub employment_type: String,
    #[validate(custom(function = "required_skills"))]
    pub required_skills: String,
    pub requirements: String,
    pub deadline: String,
}

fn experience_level(value: &str) -> Result<(), ValidationError> {
    if value.parse::<DeveloperLevel>().is_err() {
        return Err(invalid("required", "Experience level is required"));
    }
    Ok(())
}

fn employment_type(value: &str) -> Result<(), ValidationError> {
    if value.parse::<EmploymentType>().is_err() {
        return Err(invalid("required", "Employment type is required"));
    }
    Ok(())
}

fn required_skills(value: &str) -> Result<(), ValidationError> {
    if split_list(value).is_empty() {
        return Err(invalid("required", "Required skills are required"));
    }
    Ok(())
}

/// Accepts a date input value or a full RFC 3339 timestamp.
fn parse_deadline(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|deadline| deadline.and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|deadline| deadline.with_timezone(&Utc))
}

impl JobPostForm {
    /// Build the creation request, requiring the deadline to fall after `now`.
    pub fn to_request_at(&self, now: DateTime<Utc>) -> Result<NewJobDto, FieldErrors> {
        let mut errors = validate_fields(self);

        let deadline = match parse_deadline(&self.deadline) {
            Some(deadline) if deadline > now => Some(deadline),
            Some(_) => {
                errors.insert("deadline", "Deadline must be in the future");
                None
            }
            None if self.deadline.trim().is_empty() => {
                errors.insert("deadline", "Deadline is required");
                None
            }
            None => {
                errors.insert("deadline", "Invalid date");
                None
            }
        };

        errors.into_result()?;

        let (Ok(experience_level), Ok(employment_type), Some(deadline)) = (
            self.experience_level.parse::<DeveloperLevel>(),
            self.employment_type.parse::<EmploymentType>(),
            deadline,
        ) else {
            let mut errors = FieldErrors::default();
            errors.insert("form", "Invalid job posting");
            return Err(errors);
        };

        Ok(NewJobDto {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            experience_level,
            employment_type,
            required_skills: split_list(&self.required_skills),
            requirements: self
                .requirements
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            deadline,
        })
    }

    pub fn to_request(&self) -> Result<NewJobDto, FieldErrors> {
        self.to_request_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 3, 10, 12, 0, 0).unwrap()
    }

    fn form() -> JobPostForm {
        JobPostForm {
            title: "Rust Engineer".to_string(),
            description: "Build services".to_string(),
            experience_level: "Mid-Level Developer".to_string(),
            employment_type: "Contract".to_string(),
            required_skills: "rust, tokio".to_string(),
            requirements: "3 years Rust\n\n  async experience  \n".to_string(),
            deadline: "2030-04-01".to_string(),
        }
    }

    #[test]
    /// Expect skills split on commas and requirements split on lines
    fn builds_request() {
        let request = form().to_request_at(now()).unwrap();

        assert_eq!(request.required_skills, vec!["rust", "tokio"]);
        assert_eq!(request.requirements, vec!["3 years Rust", "async experience"]);
        assert_eq!(request.employment_type, EmploymentType::Contract);
        assert_eq!(
            request.deadline,
            Utc.with_ymd_and_hms(2030, 4, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    /// Expect a deadline on or before today to be rejected
    fn rejects_past_deadline() {
        let mut form = form();
        form.deadline = "2030-03-10".to_string();

        let errors = form.to_request_at(now()).unwrap_err();

        assert_eq!(errors.get("deadline"), Some("Deadline must be in the future"));
    }

    #[test]
    /// Expect every required field to be reported when the form is empty
    fn reports_missing_fields() {
        let errors = JobPostForm::default().to_request_at(now()).unwrap_err();

        for field in [
            "title",
            "description",
            "experience_level",
            "employment_type",
            "required_skills",
            "deadline",
        ] {
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
        assert_eq!(errors.get("requirements"), None);
    }
}
