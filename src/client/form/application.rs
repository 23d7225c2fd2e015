use validator::{Validate, ValidationError};

use crate::{
    client::form::{invalid, non_blank, optional_url, validate_fields, FieldErrors},
    model::{
        application::{NewApplication, ResumeFile},
        job::DeveloperLevel,
    },
};

/// Job application submitted by an applicant, including the uploaded resume.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ApplicationForm {
    #[validate(custom(function = "cover_letter"))]
    pub cover_letter: String,
    #[validate(custom(function = "developer_level"))]
    pub developer_level: String,
    #[validate(custom(function = "years_of_experience"))]
    pub years_of_experience: String,
    #[validate(custom(function = "optional_url"))]
    pub portfolio: String,
    pub resume: Option<ResumeFile>,
}

fn cover_letter(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "Cover letter is required"));
    }
    Ok(())
}

fn developer_level(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "Developer level is required"));
    }
    if value.parse::<DeveloperLevel>().is_err() {
        return Err(invalid("developer_level", "Unknown developer level"));
    }
    Ok(())
}

fn years_of_experience(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(invalid("required", "Years of experience is required"));
    }
    match value.parse::<i64>() {
        Ok(years) if years < 0 => Err(invalid("range", "Experience cannot be negative")),
        Ok(years) if u32::try_from(years).is_err() => {
            Err(invalid("range", "Years of experience is too large"))
        }
        Ok(_) => Ok(()),
        Err(_) => Err(invalid("number", "Years of experience must be a whole number")),
    }
}

impl ApplicationForm {
    pub fn to_request(&self) -> Result<NewApplication, FieldErrors> {
        let mut errors = validate_fields(self);

        match &self.resume {
            None => errors.insert("resume", "Resume is required"),
            Some(resume) if !resume.has_accepted_extension() => {
                errors.insert("resume", "Resume must be a PDF, DOC or DOCX file")
            }
            Some(_) => {}
        }

        errors.into_result()?;

        let (Ok(developer_level), Ok(years_of_experience), Some(resume)) = (
            self.developer_level.parse::<DeveloperLevel>(),
            self.years_of_experience.trim().parse::<u32>(),
            self.resume.clone(),
        ) else {
            let mut errors = FieldErrors::default();
            errors.insert("form", "Invalid application");
            return Err(errors);
        };

        Ok(NewApplication {
            cover_letter: self.cover_letter.trim().to_string(),
            developer_level,
            years_of_experience,
            portfolio: non_blank(&self.portfolio),
            resume,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ApplicationForm {
        ApplicationForm {
            cover_letter: "I write Rust".to_string(),
            developer_level: "Senior Developer".to_string(),
            years_of_experience: "6".to_string(),
            portfolio: String::new(),
            resume: Some(ResumeFile::new("cv.pdf", b"%PDF".to_vec())),
        }
    }

    #[test]
    /// Expect a complete form to convert into an application request
    fn builds_request() {
        let request = form().to_request().unwrap();

        assert_eq!(request.developer_level, DeveloperLevel::SeniorDeveloper);
        assert_eq!(request.years_of_experience, 6);
        assert_eq!(request.portfolio, None);
        assert_eq!(request.resume.file_name, "cv.pdf");
    }

    #[test]
    /// Expect a missing resume to be reported alongside other field errors
    fn requires_resume() {
        let mut form = form();
        form.resume = None;
        form.cover_letter = "  ".to_string();

        let errors = form.to_request().unwrap_err();

        assert_eq!(errors.get("resume"), Some("Resume is required"));
        assert_eq!(errors.get("cover_letter"), Some("Cover letter is required"));
    }

    #[test]
    /// Expect resumes in other formats to be rejected
    fn rejects_unsupported_resume_format() {
        let mut form = form();
        form.resume = Some(ResumeFile::new("cv.png", vec![0u8; 4]));

        let errors = form.to_request().unwrap_err();

        assert_eq!(
            errors.get("resume"),
            Some("Resume must be a PDF, DOC or DOCX file")
        );
    }

    #[test]
    /// Expect negative and missing experience to be rejected with distinct messages
    fn validates_years_of_experience() {
        assert_eq!(
            years_of_experience("-1").unwrap_err().message.as_deref(),
            Some("Experience cannot be negative")
        );
        assert_eq!(
            years_of_experience("").unwrap_err().message.as_deref(),
            Some("Years of experience is required")
        );
        assert!(years_of_experience("0").is_ok());
    }
}
