//! Job posting and application payloads.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

use crate::constant::TEST_USER_ID;

/// Job JSON with a deadline `days_open` days from now; negative values produce a closed job.
pub fn job(id: &str, title: &str, days_open: i64) -> Value {
    let deadline = Utc::now() + Duration::days(days_open);

    json!({
        "id": id,
        "title": title,
        "company": "Acme",
        "description": format!("{} at Acme", title),
        "experienceLevel": "Mid-Level Developer",
        "employmentType": "Full Time",
        "requiredSkills": ["rust", "tokio"],
        "requirements": ["3 years of Rust"],
        "deadline": deadline.to_rfc3339(),
        "applicationCount": 0
    })
}

/// Application JSON for the test user.
pub fn application(id: &str, job_id: &str, status: &str) -> Value {
    application_at(id, job_id, status, Utc::now())
}

pub fn application_at(id: &str, job_id: &str, status: &str, applied: DateTime<Utc>) -> Value {
    json!({
        "id": id,
        "jobId": job_id,
        "jobTitle": format!("Job {}", job_id),
        "userId": TEST_USER_ID,
        "status": status,
        "appliedDate": applied.to_rfc3339()
    })
}
