use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::UnknownVariantError;

/// Self-reported seniority of a developer, also used as the experience level
/// a job posting asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeveloperLevel {
    #[serde(rename = "Beginner")]
    Beginner,
    #[serde(rename = "Early Beginner")]
    EarlyBeginner,
    #[serde(rename = "Junior Developer")]
    JuniorDeveloper,
    #[serde(rename = "Mid-Level Developer")]
    MidLevelDeveloper,
    #[serde(rename = "Senior Developer")]
    SeniorDeveloper,
    #[serde(rename = "Tech Lead")]
    TechLead,
    #[serde(rename = "Expert Developer")]
    ExpertDeveloper,
    #[serde(rename = "Master Developer")]
    MasterDeveloper,
}

impl DeveloperLevel {
    /// Every level in ascending order of seniority, as offered by form selects.
    pub const ALL: [DeveloperLevel; 8] = [
        Self::Beginner,
        Self::EarlyBeginner,
        Self::JuniorDeveloper,
        Self::MidLevelDeveloper,
        Self::SeniorDeveloper,
        Self::TechLead,
        Self::ExpertDeveloper,
        Self::MasterDeveloper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::EarlyBeginner => "Early Beginner",
            Self::JuniorDeveloper => "Junior Developer",
            Self::MidLevelDeveloper => "Mid-Level Developer",
            Self::SeniorDeveloper => "Senior Developer",
            Self::TechLead => "Tech Lead",
            Self::ExpertDeveloper => "Expert Developer",
            Self::MasterDeveloper => "Master Developer",
        }
    }
}

impl fmt::Display for DeveloperLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeveloperLevel {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s.trim())
            .ok_or_else(|| UnknownVariantError::new("developer level", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "Full Time")]
    FullTime,
    #[serde(rename = "Part Time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
    #[serde(rename = "Internship")]
    Internship,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        Self::FullTime,
        Self::PartTime,
        Self::Contract,
        Self::Internship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "Full Time",
            Self::PartTime => "Part Time",
            Self::Contract => "Contract",
            Self::Internship => "Internship",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentType {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| UnknownVariantError::new("employment type", s))
    }
}

/// A job posting as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    pub description: String,
    pub experience_level: DeveloperLevel,
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub required_level: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub deadline: DateTime<Utc>,
    #[serde(default)]
    pub application_count: u32,
}

impl JobDto {
    /// A posting accepts applications until its deadline has passed.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.deadline > now
    }
}

/// Body of a job creation request issued from the admin job form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobDto {
    pub title: String,
    pub description: String,
    pub experience_level: DeveloperLevel,
    pub employment_type: EmploymentType,
    pub required_skills: Vec<String>,
    pub requirements: Vec<String>,
    pub deadline: DateTime<Utc>,
}

/// Optional filters for listing jobs, sent as query parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<DeveloperLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
}

impl JobFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.experience_level.is_none() && self.employment_type.is_none()
    }
}
