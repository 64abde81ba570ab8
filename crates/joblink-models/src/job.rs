//! Job postings.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employment type of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    #[default]
    Fulltime,
    Parttime,
    Intern,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Fulltime => "fulltime",
            JobType::Parttime => "parttime",
            JobType::Intern => "intern",
        }
    }
}

/// Where the work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    #[default]
    Onsite,
    Remote,
    Hybrid,
}

impl WorkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMode::Onsite => "onsite",
            WorkMode::Remote => "remote",
            WorkMode::Hybrid => "hybrid",
        }
    }
}

/// A job posting as served by the backend.
///
/// The client only ever holds ephemeral copies fetched per view; the backend
/// owns the record. Historical API revisions used camelCase for a few fields,
/// so those are accepted as aliases on input.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Job {
    /// Posting id
    pub id: i64,

    /// Posting title
    pub title: String,

    /// Full description
    #[serde(default)]
    pub description: String,

    /// Free-form requirements text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,

    /// Publishing company's display name
    #[serde(default)]
    pub company_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,

    #[serde(default, alias = "jobType")]
    pub job_type: JobType,

    #[serde(default, alias = "workMode")]
    pub work_mode: WorkMode,

    /// Publishing user's id; some list endpoints call this `publisher`
    #[serde(default, alias = "publisher", skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<i64>,

    /// Publishing user's email, used as the ownership fallback when the id
    /// is absent from the payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_role: Option<String>,

    /// Whether the posting accepts applications
    #[serde(default = "default_true")]
    pub is_active: bool,

    /// Whether the current user already applied (personalized by the backend)
    #[serde(default, alias = "hasApplied")]
    pub has_applied: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Fields the publisher fills in when creating or editing a posting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, Validate)]
pub struct JobDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,

    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,

    #[serde(default)]
    pub job_type: JobType,

    #[serde(default)]
    pub work_mode: WorkMode,
}

/// Aggregate posting counts, computed server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct JobStats {
    #[serde(default)]
    pub total_jobs: u64,
    #[serde(default)]
    pub active_jobs: u64,
    #[serde(default)]
    pub total_applications: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_minimal_payload_gets_defaults() {
        let job: Job = serde_json::from_str(
            r#"{"id": 1, "title": "Backend Engineer"}"#,
        )
        .unwrap();
        assert!(job.is_active);
        assert!(!job.has_applied);
        assert_eq!(job.job_type, JobType::Fulltime);
        assert_eq!(job.work_mode, WorkMode::Onsite);
        assert!(job.publisher_id.is_none());
    }

    #[test]
    fn test_job_accepts_camel_case_aliases() {
        let job: Job = serde_json::from_str(
            r#"{"id": 2, "title": "t", "jobType": "parttime", "workMode": "remote", "hasApplied": true}"#,
        )
        .unwrap();
        assert_eq!(job.job_type, JobType::Parttime);
        assert_eq!(job.work_mode, WorkMode::Remote);
        assert!(job.has_applied);
    }

    #[test]
    fn test_job_accepts_publisher_alias() {
        let job: Job =
            serde_json::from_str(r#"{"id": 3, "title": "t", "publisher": 42}"#).unwrap();
        assert_eq!(job.publisher_id, Some(42));
    }

    #[test]
    fn test_job_draft_requires_title_and_description() {
        let draft = JobDraft {
            company_name: "Acme".into(),
            ..JobDraft::default()
        };
        assert!(draft.validate().is_err());

        let draft = JobDraft {
            title: "Backend Engineer".into(),
            description: "Build things".into(),
            company_name: "Acme".into(),
            ..JobDraft::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_job_type_wire_spelling() {
        assert_eq!(serde_json::to_string(&JobType::Intern).unwrap(), "\"intern\"");
        assert_eq!(serde_json::to_string(&WorkMode::Hybrid).unwrap(), "\"hybrid\"");
    }
}
