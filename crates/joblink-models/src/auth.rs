//! Auth request/response payloads.
//!
//! Request types carry `validator` rules for the checks the client runs
//! before any network call: email shape, password length, confirmation
//! match. A failed validation blocks submission locally.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::role::Role;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: u64 = 6;

/// Payload for `POST /accounts/register/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[validate(email(message = "Enter a valid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,

    pub job_role: Role,
}

/// Payload for `POST /accounts/login/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Successful login/verification response.
///
/// Older API revisions returned the token as `token`, newer ones as
/// `access_token`; both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,

    pub user_id: i64,

    #[serde(alias = "role")]
    pub job_role: Role,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,
}

impl LoginResponse {
    /// Display name assembled from whatever the backend sent.
    pub fn display_name(&self) -> String {
        let name = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let name = name.trim();
        if name.is_empty() {
            self.email.clone().unwrap_or_default()
        } else {
            name.to_string()
        }
    }
}

/// Payload for `POST /accounts/forgot-password/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Enter a valid email"))]
    pub email: String,
}

/// Payload for `POST /accounts/verify-otp/` and the forgot-password variant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct OtpVerifyRequest {
    #[validate(email(message = "Enter a valid email"))]
    pub email: String,

    #[validate(length(min = 4, max = 8, message = "Enter the code from your email"))]
    pub otp: String,
}

/// Payload for `POST /accounts/reset-password/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct ResetPasswordRequest {
    #[validate(email(message = "Enter a valid email"))]
    pub email: String,

    #[validate(length(min = 4, max = 8, message = "Enter the code from your email"))]
    pub otp: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,

    #[validate(must_match(other = "new_password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

/// Payload for `POST /accounts/change-password/`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub old_password: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,

    #[validate(must_match(other = "new_password", message = "Passwords do not match"))]
    pub confirm_password: String,
}
