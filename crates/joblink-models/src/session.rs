//! Authenticated session.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The authenticated user's token and identity, held client-side for the
/// duration of use.
///
/// Created on successful login or OTP verification, cleared on logout or
/// when the server reports the token invalid/expired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Session {
    /// Bearer token attached to authenticated requests
    pub token: String,

    /// Backend user id
    pub user_id: i64,

    /// Account email
    pub email: String,

    /// Display name
    pub name: String,

    /// Account role
    pub role: Role,

    /// CSRF token, where the backend hands one out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,
}

impl Session {
    pub fn new(
        token: impl Into<String>,
        user_id: i64,
        email: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            token: token.into(),
            user_id,
            email: email.into(),
            name: name.into(),
            role,
            csrf_token: None,
        }
    }
}
