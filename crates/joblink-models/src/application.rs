//! Job applications.

use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Review state of an application.
///
/// A one-way-advancing label set by the job's manager; the client names the
/// states but never computes transitions itself, it only requests them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Submitted,
    Reviewing,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }

    /// All states, in review order. Used for filter UIs.
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Submitted,
        ApplicationStatus::Reviewing,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Rejected,
        ApplicationStatus::Hired,
    ];

    /// Whether the review reached a final outcome.
    pub fn is_decided(&self) -> bool {
        matches!(self, ApplicationStatus::Rejected | ApplicationStatus::Hired)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An application to a job posting.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Application {
    pub id: i64,

    /// Referenced job id
    #[serde(default, alias = "job_id", skip_serializing_if = "Option::is_none")]
    pub job: Option<i64>,

    /// Denormalized for list views
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(default, alias = "name", skip_serializing_if = "Option::is_none")]
    pub applicant_name: Option<String>,

    #[serde(default, alias = "email", skip_serializing_if = "Option::is_none")]
    pub applicant_email: Option<String>,

    #[serde(default)]
    pub status: ApplicationStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<DateTime<Utc>>,

    /// Server-side reference to the uploaded resume
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
}

/// Per-status application counts, computed server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ApplicationStatusStats {
    #[serde(default)]
    pub submitted: u64,
    #[serde(default)]
    pub reviewing: u64,
    #[serde(default)]
    pub shortlisted: u64,
    #[serde(default)]
    pub rejected: u64,
    #[serde(default)]
    pub hired: u64,
    #[serde(default)]
    pub total: u64,
}
