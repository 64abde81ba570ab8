//! Job listings, applications, and management.
//!
//! Mutating operations run the relevant authorization decision first; a
//! local deny (or a failed upload pre-check) never reaches the network.
//! Listing is open to anonymous visitors.

use reqwest::multipart::Form;
use serde_json::json;
use tracing::debug;
use validator::Validate;

use joblink_access::{
    decide_job_application, decide_job_management, decide_view_applicants, Viewer,
};
use joblink_models::{
    validate_resume_upload, Application, ApplicationStatus, ApplicationStatusStats, Job, JobDraft,
    JobStats, Role, UserPermissions,
};

use crate::client::{decode, decode_list, ApiClient, FileUpload};
use crate::error::{ApiError, ApiResult};
use crate::inflight::Action;

/// Operations under `/api/`.
pub struct JobsService {
    client: ApiClient,
}

impl JobsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // =========================================================================
    // Listings
    // =========================================================================

    /// All postings. Works without a session; anonymous visitors can browse.
    pub async fn list(&self) -> ApiResult<Vec<Job>> {
        decode_list(self.client.get("/api/jobs/").await?)
    }

    pub async fn get(&self, job_id: i64) -> ApiResult<Job> {
        decode(self.client.get(&format!("/api/jobs/{job_id}/")).await?)
    }

    /// Postings published by the current user.
    pub async fn my_posted(&self) -> ApiResult<Vec<Job>> {
        decode_list(self.client.get("/api/my-posted-jobs/").await?)
    }

    /// Applications submitted by the current user.
    pub async fn my_applied(&self) -> ApiResult<Vec<Application>> {
        decode_list(self.client.get("/api/my-applied-jobs/").await?)
    }

    // =========================================================================
    // Management
    // =========================================================================

    pub async fn create(&self, draft: &JobDraft) -> ApiResult<Job> {
        self.ensure_management()?;
        draft.validate()?;
        decode(self.client.post("/api/jobs/", draft).await?)
    }

    pub async fn update(&self, job_id: i64, draft: &JobDraft) -> ApiResult<Job> {
        self.ensure_management()?;
        draft.validate()?;
        decode(
            self.client
                .patch(&format!("/api/jobs/{job_id}/"), draft)
                .await?,
        )
    }

    pub async fn delete(&self, job_id: i64) -> ApiResult<()> {
        self.ensure_management()?;
        self.client.delete(&format!("/api/jobs/{job_id}/")).await?;
        Ok(())
    }

    pub async fn activate(&self, job_id: i64) -> ApiResult<()> {
        self.ensure_management()?;
        self.client
            .patch(&format!("/api/jobs/{job_id}/activate/"), &json!({}))
            .await?;
        Ok(())
    }

    pub async fn deactivate(&self, job_id: i64) -> ApiResult<()> {
        self.ensure_management()?;
        self.client
            .patch(&format!("/api/jobs/{job_id}/deactivate/"), &json!({}))
            .await?;
        Ok(())
    }

    // =========================================================================
    // Applications
    // =========================================================================

    /// Apply to a posting with a resume and optional cover letter.
    ///
    /// The authorization decision and the resume pre-check run first and
    /// block the request locally on failure. A duplicate submission while
    /// one is already in flight resolves to `Ok(None)` without touching the
    /// network.
    pub async fn apply(
        &self,
        job: &Job,
        resume: FileUpload,
        cover_letter: Option<&str>,
    ) -> ApiResult<Option<Application>> {
        let session = self.client.session().get();
        let decision = decide_job_application(
            session.as_ref().map(|s| s.role),
            Some(job),
            &session.as_ref().map(Viewer::from).unwrap_or_default(),
            session.is_some(),
        );
        if !decision.allowed {
            return Err(ApiError::validation(decision.message));
        }

        validate_resume_upload(&resume.file_name, resume.size())?;

        let Some(_guard) = self.client.inflight().try_begin(Action::Apply, job.id) else {
            debug!("Application to job {} already in flight, skipping", job.id);
            return Ok(None);
        };

        let mut form = Form::new().part("resume", resume.into_part());
        if let Some(cover) = cover_letter {
            form = form.text("cover_letter", cover.to_string());
        }

        let value = self
            .client
            .post_form(&format!("/api/jobs/{}/apply/", job.id), form)
            .await?;
        Ok(Some(decode(value)?))
    }

    /// Applicants for one of the current user's postings, optionally
    /// filtered by status.
    pub async fn applicants(
        &self,
        job_id: i64,
        status: Option<ApplicationStatus>,
    ) -> ApiResult<Vec<Application>> {
        self.ensure_view_applicants()?;
        let path = match status {
            Some(status) => format!(
                "/api/jobs/{job_id}/applicants/?status={}",
                urlencoding::encode(status.as_str())
            ),
            None => format!("/api/jobs/{job_id}/applicants/"),
        };
        decode_list(self.client.get(&path).await?)
    }

    pub async fn application(&self, application_id: i64) -> ApiResult<Application> {
        self.ensure_view_applicants()?;
        decode(
            self.client
                .get(&format!("/api/applications/{application_id}/"))
                .await?,
        )
    }

    /// Request a status change; the backend owns the transition rules.
    pub async fn update_application_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> ApiResult<Application> {
        self.ensure_view_applicants()?;
        decode(
            self.client
                .patch(
                    &format!("/api/applications/{application_id}/status/"),
                    &json!({ "status": status }),
                )
                .await?,
        )
    }

    /// Download an applicant's resume.
    pub async fn download_resume(&self, application_id: i64) -> ApiResult<Vec<u8>> {
        self.ensure_view_applicants()?;
        self.client
            .get_bytes(&format!("/api/applications/{application_id}/resume/download/"))
            .await
    }

    // =========================================================================
    // Aggregates
    // =========================================================================

    pub async fn job_stats(&self) -> ApiResult<JobStats> {
        decode(self.client.get("/api/job-stats/").await?)
    }

    pub async fn application_stats(&self) -> ApiResult<ApplicationStatusStats> {
        decode(self.client.get("/api/application-stats/").await?)
    }

    /// Capability flags as the backend computes them.
    pub async fn user_permissions(&self) -> ApiResult<UserPermissions> {
        decode(self.client.get("/api/user-permissions/").await?)
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn role(&self) -> Option<Role> {
        self.client.session().get().map(|s| s.role)
    }

    fn ensure_management(&self) -> ApiResult<()> {
        let decision = decide_job_management(self.role(), self.client.session().is_logged_in());
        if !decision.allowed {
            return Err(ApiError::validation(decision.message));
        }
        Ok(())
    }

    fn ensure_view_applicants(&self) -> ApiResult<()> {
        let decision = decide_view_applicants(self.role(), self.client.session().is_logged_in());
        if !decision.allowed {
            return Err(ApiError::validation(decision.message));
        }
        Ok(())
    }
}
