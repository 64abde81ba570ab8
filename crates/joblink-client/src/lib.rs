//! Typed REST client for the JobLink backend.
//!
//! This crate provides:
//! - A single HTTP choke point with uniform error normalization
//!   (session expiry, server messages, empty-body defaults)
//! - An injectable session store standing in for browser storage
//! - Resource services for accounts, jobs, posts, the follow graph, and
//!   profiles
//! - Per-target in-flight guards for double-click-prone actions
//!
//! Construction wires everything explicitly; nothing reads global state:
//!
//! ```no_run
//! use std::sync::Arc;
//! use joblink_client::{ApiClient, ClientConfig, JobsService, MemorySessionStore};
//!
//! # async fn run() -> joblink_client::ApiResult<()> {
//! let store = Arc::new(MemorySessionStore::new());
//! let client = ApiClient::new(ClientConfig::new("https://api.example.com")?, store)?;
//! let jobs = JobsService::new(client.clone());
//! let open_roles = jobs.list().await?;
//! # let _ = open_roles;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod inflight;
pub mod jobs;
pub mod metrics;
pub mod network;
pub mod posts;
pub mod profiles;
pub mod session;

pub use auth::AuthService;
pub use client::{decode, decode_list, ApiClient, FileUpload};
pub use config::{ClientConfig, ENV_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use inflight::{Action, InflightGuard, InflightRegistry};
pub use jobs::JobsService;
pub use network::NetworkService;
pub use posts::PostsService;
pub use profiles::ProfileService;
pub use session::{MemorySessionStore, SessionStore};
