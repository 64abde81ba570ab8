//! The allow/deny decision type.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Machine-readable reason attached to a deny decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    /// Viewer is not logged in
    AuthenticationRequired,
    /// Role does not permit the action
    AccessDenied,
    /// Company accounts never apply to jobs
    CompanyCannotApply,
    /// Viewer published this job
    OwnJobApplication,
    /// The job no longer accepts applications
    JobInactive,
    /// Viewer already has an application on file
    AlreadyApplied,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::AuthenticationRequired => "AUTHENTICATION_REQUIRED",
            ReasonCode::AccessDenied => "ACCESS_DENIED",
            ReasonCode::CompanyCannotApply => "COMPANY_CANNOT_APPLY",
            ReasonCode::OwnJobApplication => "OWN_JOB_APPLICATION",
            ReasonCode::JobInactive => "JOB_INACTIVE",
            ReasonCode::AlreadyApplied => "ALREADY_APPLIED",
        }
    }
}

/// Outcome of an authorization check: whether the action is permitted, and
/// if not, why, in both machine- and human-readable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Decision {
    pub allowed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<ReasonCode>,

    pub message: String,
}

impl Decision {
    pub fn allow(message: impl Into<String>) -> Self {
        Self {
            allowed: true,
            reason: None,
            message: message.into(),
        }
    }

    pub fn deny(reason: ReasonCode, message: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
            message: message.into(),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }
}
