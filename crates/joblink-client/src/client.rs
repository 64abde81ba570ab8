//! HTTP transport.
//!
//! Single choke point for all outbound calls: resource services never touch
//! the HTTP layer directly. Every request attaches the stored bearer token
//! when a session is present, runs inside a tracing span, records metrics,
//! and normalizes the response through one routine so every caller sees the
//! same error kinds.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info_span, Instrument};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::inflight::InflightRegistry;
use crate::metrics::record_request;
use crate::session::SessionStore;

/// A file staged for multipart upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub(crate) fn into_part(self) -> Part {
        Part::bytes(self.bytes).file_name(self.file_name)
    }
}

/// The API client.
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    session: Arc<dyn SessionStore>,
    inflight: Arc<InflightRegistry>,
}

impl Clone for ApiClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config.clone(),
            session: Arc::clone(&self.session),
            inflight: Arc::clone(&self.inflight),
        }
    }
}

impl ApiClient {
    /// Create a new client against a validated configuration.
    pub fn new(config: ClientConfig, session: Arc<dyn SessionStore>) -> ApiResult<Self> {
        let mut builder = Client::builder()
            .user_agent(concat!("joblink-client/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::Network)?;

        Ok(Self {
            http,
            config,
            session,
            inflight: InflightRegistry::new(),
        })
    }

    /// Create from environment variables.
    pub fn from_env(session: Arc<dyn SessionStore>) -> ApiResult<Self> {
        Self::new(ClientConfig::from_env()?, session)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Registry used to suppress duplicate in-flight actions.
    pub fn inflight(&self) -> &Arc<InflightRegistry> {
        &self.inflight
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base(), path.trim_start_matches('/'))
    }

    // =========================================================================
    // Request Methods
    // =========================================================================

    pub async fn get(&self, path: &str) -> ApiResult<Value> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        self.request(Method::POST, path, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        self.request(Method::PUT, path, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        self.request(Method::PATCH, path, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.request(Method::DELETE, path, None).await
    }

    /// Multipart POST, for file uploads.
    pub async fn post_form(&self, path: &str, form: Form) -> ApiResult<Value> {
        self.request_form(Method::POST, path, form).await
    }

    /// Multipart PATCH, for file uploads on existing resources.
    pub async fn patch_form(&self, path: &str, form: Form) -> ApiResult<Value> {
        self.request_form(Method::PATCH, path, form).await
    }

    /// GET returning the raw body (resume downloads).
    pub async fn get_bytes(&self, path: &str) -> ApiResult<Vec<u8>> {
        let url = self.endpoint(path);
        let operation = format!("GET {path}");

        self.execute(&operation, async {
            let mut request = self.http.get(&url);
            if let Some(session) = self.session.get() {
                request = request.bearer_auth(&session.token);
            }
            let response = request.send().await.map_err(ApiError::Network)?;

            let status = response.status();
            if self.is_session_expiry(status) {
                self.session.clear();
                return Err(ApiError::SessionExpired);
            }
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ApiError::from_error_body(status.as_u16(), &body));
            }

            Ok(response.bytes().await.map_err(ApiError::Network)?.to_vec())
        })
        .await
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<Value> {
        let url = self.endpoint(path);
        let operation = format!("{method} {path}");

        self.execute(&operation, async {
            let mut request = self.http.request(method.clone(), &url);
            if let Some(session) = self.session.get() {
                request = request.bearer_auth(&session.token);
            }
            if let Some(body) = &body {
                request = request.json(body);
            }
            let response = request.send().await.map_err(ApiError::Network)?;
            self.handle_response(response).await
        })
        .await
    }

    async fn request_form(&self, method: Method, path: &str, form: Form) -> ApiResult<Value> {
        let url = self.endpoint(path);
        let operation = format!("{method} {path} (multipart)");

        self.execute(&operation, async {
            let mut request = self.http.request(method.clone(), &url).multipart(form);
            if let Some(session) = self.session.get() {
                request = request.bearer_auth(&session.token);
            }
            let response = request.send().await.map_err(ApiError::Network)?;
            self.handle_response(response).await
        })
        .await
    }

    fn is_session_expiry(&self, status: StatusCode) -> bool {
        status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
    }

    /// Normalize a response into a JSON value or an error.
    ///
    /// 401/403 clear the stored session; other non-2xx carry the server's
    /// message when it sent one; a 2xx with an empty or unparsable body
    /// resolves to `{}` so no-content endpoints never fail decoding.
    async fn handle_response(&self, response: Response) -> ApiResult<Value> {
        let status = response.status();

        if self.is_session_expiry(status) {
            self.session.clear();
            return Err(ApiError::SessionExpired);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_error_body(status.as_u16(), &body));
        }

        let body = response.text().await.unwrap_or_default();
        if body.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                debug!("Unparsable body on {} response, treating as empty: {e}", status);
                Ok(Value::Object(Map::new()))
            }
        }
    }

    /// Execute a request with tracing and metrics.
    async fn execute<T, F>(&self, operation: &str, fut: F) -> ApiResult<T>
    where
        F: Future<Output = ApiResult<T>>,
    {
        let span = info_span!("api_request", operation = %operation);

        let start = Instant::now();
        let result = fut.instrument(span).await;
        let latency_ms = start.elapsed().as_millis() as f64;

        let status = match &result {
            Ok(_) => 200,
            Err(e) => e.http_status().unwrap_or(0),
        };
        record_request(operation, status, latency_ms);

        result
    }
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Decode a normalized response value into a typed record.
pub fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(ApiError::Json)
}

/// Decode a list response into `Vec<T>`.
///
/// The backend is inconsistent about list shapes: some endpoints return a
/// bare array, others wrap it as `{"results": [...]}` or `{"data": [...]}`.
/// Both decode identically here so downstream code never branches on shape.
pub fn decode_list<T: DeserializeOwned>(value: Value) -> ApiResult<Vec<T>> {
    match value {
        Value::Object(mut map) => {
            if let Some(inner) = map.remove("results").or_else(|| map.remove("data")) {
                decode(inner)
            } else {
                decode(Value::Object(map))
            }
        }
        other => decode(other),
    }
}
