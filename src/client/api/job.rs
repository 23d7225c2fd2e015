use reqwest::multipart::{Form, Part};

use crate::{
    client::{
        api::{
            client::{read_json, send},
            ApiClient, JobApi,
        },
        error::ClientError,
    },
    model::{
        application::{
            ApplicationDto, ApplicationReceiptDto, ApplicationStatus, ApplicationStatusUpdate,
            NewApplication,
        },
        job::{JobDto, JobFilter, NewJobDto},
    },
};

impl JobApi for ApiClient {
    async fn get_jobs(&self, filter: &JobFilter) -> Result<Vec<JobDto>, ClientError> {
        let mut request = self.http.get(self.endpoint(&["jobs"]));
        if !filter.is_empty() {
            request = request.query(filter);
        }

        read_json(send(request).await?).await
    }

    async fn get_job_by_id(&self, id: &str) -> Result<JobDto, ClientError> {
        let request = self.http.get(self.endpoint(&["jobs", id]));

        read_json(send(request).await?).await
    }

    async fn create_job(&self, token: &str, job: &NewJobDto) -> Result<JobDto, ClientError> {
        let request = self
            .http
            .post(self.endpoint(&["jobs"]))
            .bearer_auth(token)
            .json(job);

        read_json(send(request).await?).await
    }

    async fn apply_for_job(
        &self,
        token: &str,
        job_id: &str,
        application: NewApplication,
    ) -> Result<ApplicationReceiptDto, ClientError> {
        let resume = Part::bytes(application.resume.bytes)
            .file_name(application.resume.file_name)
            .mime_str(&application.resume.content_type)
            .map_err(|e| ClientError::Validation(format!("Invalid resume file type: {}", e)))?;

        let mut form = Form::new()
            .text("coverLetter", application.cover_letter)
            .text("developerLevel", application.developer_level.as_str())
            .text(
                "yearsOfExperience",
                application.years_of_experience.to_string(),
            );
        if let Some(portfolio) = application.portfolio {
            form = form.text("portfolio", portfolio);
        }
        let form = form.part("resume", resume);

        let request = self
            .http
            .post(self.endpoint(&["applications", "job", job_id]))
            .bearer_auth(token)
            .multipart(form);

        read_json(send(request).await?).await
    }

    async fn get_user_applications(
        &self,
        token: &str,
        user_id: &str,
    ) -> Result<Vec<ApplicationDto>, ClientError> {
        let request = self
            .http
            .get(self.endpoint(&["applications", "user", user_id]))
            .bearer_auth(token);

        match read_json(send(request).await?).await {
            // A user who never applied has no application collection
            Err(ClientError::NotFound) => Ok(Vec::new()),
            result => result,
        }
    }

    async fn get_all_applications(&self, token: &str) -> Result<Vec<ApplicationDto>, ClientError> {
        let request = self
            .http
            .get(self.endpoint(&["applications"]))
            .bearer_auth(token);

        read_json(send(request).await?).await
    }

    async fn update_application_status(
        &self,
        token: &str,
        application_id: &str,
        status: ApplicationStatus,
    ) -> Result<ApplicationDto, ClientError> {
        let request = self
            .http
            .put(self.endpoint(&["applications", application_id]))
            .bearer_auth(token)
            .json(&ApplicationStatusUpdate { status });

        read_json(send(request).await?).await
    }
}
