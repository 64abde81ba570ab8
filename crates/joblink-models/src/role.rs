//! User roles.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Account role as reported by the backend.
///
/// The role decides which actions the client offers: Employees and Employers
/// apply to jobs, Employers and Companies publish and manage them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Role {
    /// Job seeker
    Employee,
    /// Individual recruiter; may both publish and apply
    Employer,
    /// Company account; publishes jobs, never applies
    Company,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Employer => "Employer",
            Role::Company => "Company",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role string is not one of the known variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    // The backend stores roles capitalized; tolerate any casing on input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "employee" => Ok(Role::Employee),
            "employer" => Ok(Role::Employer),
            "company" => Ok(Role::Company),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}
