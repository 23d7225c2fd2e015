use jobboard::{
    client::{api::JobApi, error::ClientError},
    model::{
        application::{ApplicationStatus, NewApplication, ResumeFile},
        job::{DeveloperLevel, EmploymentType, JobFilter},
    },
};
use jobboard_test_utils::prelude::*;
use mockito::Matcher;
use serde_json::json;

use crate::util::client;

mod jobs {
    use super::*;

    #[tokio::test]
    /// Expect filters to be sent as camelCase query parameters
    async fn sends_filter_as_query() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("GET", TestContext::path("/jobs").as_str())
                    .match_query(Matcher::AllOf(vec![
                        Matcher::UrlEncoded("search".into(), "rust".into()),
                        Matcher::UrlEncoded("employmentType".into(), "Part Time".into()),
                    ]))
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(json!([job::job("1", "Rust Engineer", 10)]).to_string())
                    .create()
            })
            .build()
            .await?;

        let filter = JobFilter {
            search: Some("rust".to_string()),
            employment_type: Some(EmploymentType::PartTime),
            ..Default::default()
        };
        let jobs = client(&test).get_jobs(&filter).await.unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Rust Engineer");
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect a missing job to be reported as not found
    async fn missing_job() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_error_endpoint("GET", "/jobs/404", 404, "Job not found", 1)
            .build()
            .await?;

        let result = client(&test).get_job_by_id("404").await;

        assert_eq!(result, Err(ClientError::NotFound));

        Ok(())
    }

    #[tokio::test]
    /// Expect a server error to be reported as a retryable outage
    async fn server_error() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_error_endpoint("GET", "/jobs", 503, "Maintenance", 1)
            .build()
            .await?;

        let result = client(&test).get_jobs(&JobFilter::default()).await;

        assert_eq!(result, Err(ClientError::ServiceUnavailable(503)));

        Ok(())
    }

    #[tokio::test]
    /// Expect a malformed body to be reported as a decode error
    async fn malformed_body() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("GET", TestContext::path("/jobs/1").as_str())
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"id": 1}"#)
                    .create()
            })
            .build()
            .await?;

        let result = client(&test).get_job_by_id("1").await;

        assert!(matches!(result, Err(ClientError::Decode(_))));

        Ok(())
    }
}

mod applications {
    use super::*;

    fn application() -> NewApplication {
        NewApplication {
            cover_letter: "I write Rust".to_string(),
            developer_level: DeveloperLevel::SeniorDeveloper,
            years_of_experience: 6,
            portfolio: Some("https://example.com".to_string()),
            resume: ResumeFile::new("cv.pdf", b"%PDF-1.7".to_vec()),
        }
    }

    #[tokio::test]
    /// Expect the application to be posted as multipart form data with the resume attached
    async fn apply_sends_multipart() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", TestContext::path("/applications/job/7").as_str())
                    .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
                    .match_header(
                        "content-type",
                        Matcher::Regex("^multipart/form-data".to_string()),
                    )
                    .match_body(Matcher::AllOf(vec![
                        Matcher::Regex(r#"name="coverLetter""#.to_string()),
                        Matcher::Regex("Senior Developer".to_string()),
                        Matcher::Regex(r#"name="resume"; filename="cv.pdf""#.to_string()),
                        Matcher::Regex("application/pdf".to_string()),
                    ]))
                    .with_status(201)
                    .with_header("content-type", "application/json")
                    .with_body(json!({ "applicationId": "app-1" }).to_string())
                    .create()
            })
            .build()
            .await?;

        let receipt = client(&test)
            .apply_for_job(TEST_TOKEN, "7", application())
            .await
            .unwrap();

        assert_eq!(receipt.application_id, "app-1");
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect a user without applications to get an empty list rather than an error
    async fn user_without_applications() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_error_endpoint(
                "GET",
                &format!("/applications/user/{}", TEST_USER_ID),
                404,
                "No applications",
                1,
            )
            .build()
            .await?;

        let applications = client(&test)
            .get_user_applications(TEST_TOKEN, TEST_USER_ID)
            .await
            .unwrap();

        assert!(applications.is_empty());

        Ok(())
    }

    #[tokio::test]
    /// Expect applicants listing every application to be forbidden
    async fn all_applications_forbidden() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_error_endpoint("GET", "/applications", 403, "Admins only", 1)
            .build()
            .await?;

        let result = client(&test).get_all_applications(TEST_TOKEN).await;

        assert_eq!(result, Err(ClientError::Forbidden));

        Ok(())
    }

    #[tokio::test]
    /// Expect a status update to PUT the kebab-case status and return the updated application
    async fn updates_status() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("PUT", TestContext::path("/applications/app-1").as_str())
                    .match_body(Matcher::Json(json!({ "status": "under-review" })))
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(job::application("app-1", "7", "under-review").to_string())
                    .create()
            })
            .build()
            .await?;

        let application = client(&test)
            .update_application_status(TEST_TOKEN, "app-1", ApplicationStatus::UnderReview)
            .await
            .unwrap();

        assert_eq!(application.status, ApplicationStatus::UnderReview);
        test.assert_mocks();

        Ok(())
    }
}
