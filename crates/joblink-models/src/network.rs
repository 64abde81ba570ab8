//! Follow-graph types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Aggregate follow counts.
///
/// Derived server-side and fetched, never computed client-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct NetworkStats {
    #[serde(default)]
    pub followers_count: u64,

    #[serde(default)]
    pub following_count: u64,

    /// Some API revisions include the combined count; when absent it is the
    /// sum of the other two.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_connections: Option<u64>,
}

impl NetworkStats {
    pub fn total(&self) -> u64 {
        self.total_connections
            .unwrap_or(self.followers_count + self.following_count)
    }
}

/// A user row in suggestions, followers, and following lists.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UserSummary {
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, alias = "job_role", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Whether the current user already follows this one
    #[serde(default)]
    pub is_following: bool,
}
