use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    job::{DeveloperLevel, JobDto},
    UnknownVariantError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationStatus {
    Pending,
    UnderReview,
    Shortlisted,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        Self::Pending,
        Self::UnderReview,
        Self::Shortlisted,
        Self::Accepted,
        Self::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::UnderReview => "under-review",
            Self::Shortlisted => "shortlisted",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Badge class used by dashboards
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Pending => "badge-warning",
            Self::UnderReview => "badge-info",
            Self::Shortlisted => "badge-primary",
            Self::Accepted => "badge-success",
            Self::Rejected => "badge-error",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| UnknownVariantError::new("application status", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    pub id: String,
    pub job_id: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub status: ApplicationStatus,
    pub applied_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationReceiptDto {
    pub application_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationStatusUpdate {
    pub status: ApplicationStatus,
}

/// Resume attached to an application, uploaded as a multipart file part.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    /// Accepted resume extensions
    pub const EXTENSIONS: [&'static str; 3] = ["pdf", "doc", "docx"];

    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = Self::content_type_for(&file_name).to_string();

        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, extension)| extension.to_ascii_lowercase())
    }

    pub fn has_accepted_extension(&self) -> bool {
        self.extension()
            .is_some_and(|extension| Self::EXTENSIONS.contains(&extension.as_str()))
    }

    fn content_type_for(file_name: &str) -> &'static str {
        let lower = file_name.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            "application/pdf"
        } else if lower.ends_with(".docx") {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        } else if lower.ends_with(".doc") {
            "application/msword"
        } else {
            "application/octet-stream"
        }
    }
}

/// A validated job application ready to be submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub cover_letter: String,
    pub developer_level: DeveloperLevel,
    pub years_of_experience: u32,
    pub portfolio: Option<String>,
    pub resume: ResumeFile,
}

/// Summary counters shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_jobs: usize,
    pub active_jobs: usize,
    pub total_applications: usize,
    pub pending_reviews: usize,
}

impl DashboardStats {
    pub fn compute(jobs: &[JobDto], applications: &[ApplicationDto], now: DateTime<Utc>) -> Self {
        Self {
            total_jobs: jobs.len(),
            active_jobs: jobs.iter().filter(|job| job.is_active(now)).count(),
            total_applications: applications.len(),
            pending_reviews: applications
                .iter()
                .filter(|application| application.status == ApplicationStatus::Pending)
                .count(),
        }
    }
}
