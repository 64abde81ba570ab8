//! Account and session operations.
//!
//! Client-side `validator` checks run before any network call; a failed
//! check blocks submission locally. Successful login and OTP verification
//! persist the session in the injected store; logout and token expiry clear
//! it as a unit.

use serde_json::{json, Value};
use tracing::debug;
use validator::Validate;

use joblink_models::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse, OtpVerifyRequest,
    RegisterRequest, ResetPasswordRequest, Role, Session,
};

use crate::client::{decode, ApiClient};
use crate::error::ApiResult;

/// Operations under `/accounts/`.
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Register a new account; the backend follows up with an OTP email.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<Value> {
        request.validate()?;
        self.client.post("/accounts/register/", request).await
    }

    /// Log in and persist the session.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<Session> {
        request.validate()?;
        let value = self.client.post("/accounts/login/", request).await?;
        self.store_session(value, &request.email)
    }

    /// Verify the signup OTP; success logs the user in.
    pub async fn verify_otp(&self, request: &OtpVerifyRequest) -> ApiResult<Session> {
        request.validate()?;
        let value = self.client.post("/accounts/verify-otp/", request).await?;
        self.store_session(value, &request.email)
    }

    /// Ask for a fresh OTP email.
    pub async fn resend_otp(&self, email: &str) -> ApiResult<Value> {
        self.client
            .post("/accounts/resend-otp/", &json!({ "email": email }))
            .await
    }

    /// Start the password-reset flow.
    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> ApiResult<Value> {
        request.validate()?;
        self.client.post("/accounts/forgot-password/", request).await
    }

    /// Verify the reset OTP before the new password is chosen.
    pub async fn forgot_password_otp_verify(&self, request: &OtpVerifyRequest) -> ApiResult<Value> {
        request.validate()?;
        self.client
            .post("/accounts/forgot-password-otp-verify/", request)
            .await
    }

    /// Set a new password using a verified reset OTP.
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> ApiResult<Value> {
        request.validate()?;
        self.client.post("/accounts/reset-password/", request).await
    }

    /// Change the password of the logged-in account.
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> ApiResult<Value> {
        request.validate()?;
        self.client.post("/accounts/change-password/", request).await
    }

    /// Switch the account role; the stored session is updated on success.
    pub async fn update_job_role(&self, role: Role) -> ApiResult<Role> {
        let value = self
            .client
            .patch("/accounts/update-job-role/", &json!({ "job_role": role }))
            .await?;

        if let Some(mut session) = self.client.session().get() {
            session.role = role;
            self.client.session().set(session);
        }

        let confirmed = value
            .get("job_role")
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse().ok())
            .unwrap_or(role);
        Ok(confirmed)
    }

    /// Fetch a CSRF token; when a session exists the token is attached to it.
    pub async fn csrf_token(&self) -> ApiResult<Option<String>> {
        let value = self.client.get("/accounts/csrf/").await?;
        let token = ["csrf_token", "csrfToken", "token"]
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()))
            .map(str::to_string);

        if let Some(token) = &token {
            if let Some(mut session) = self.client.session().get() {
                session.csrf_token = Some(token.clone());
                self.client.session().set(session);
            }
        }

        Ok(token)
    }

    /// Drop the stored session. Purely local.
    pub fn logout(&self) {
        debug!("Clearing stored session");
        self.client.session().clear();
    }

    fn store_session(&self, value: Value, fallback_email: &str) -> ApiResult<Session> {
        let response: LoginResponse = decode(value)?;

        let email = response
            .email
            .clone()
            .unwrap_or_else(|| fallback_email.to_string());
        let name = match response.display_name() {
            name if name.is_empty() => email.clone(),
            name => name,
        };

        let session = Session::new(response.token, response.user_id, email, name, response.job_role);
        self.client.session().set(session.clone());
        Ok(session)
    }
}
