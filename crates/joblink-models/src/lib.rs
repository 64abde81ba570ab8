//! Shared data models for the JobLink client.
//!
//! This crate provides Serde-serializable types for:
//! - User roles and sessions
//! - Job postings and applications
//! - Feed posts and comments
//! - Follow-graph statistics and user summaries
//! - User and company profiles
//! - Auth request/response payloads with client-side validation
//! - Upload pre-checks for resumes and images

pub mod application;
pub mod auth;
pub mod constants;
pub mod job;
pub mod network;
pub mod post;
pub mod profile;
pub mod role;
pub mod session;
pub mod upload;

// Re-export common types
pub use application::{Application, ApplicationStatus, ApplicationStatusStats};
pub use auth::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse, OtpVerifyRequest,
    RegisterRequest, ResetPasswordRequest,
};
pub use job::{Job, JobDraft, JobStats, JobType, WorkMode};
pub use network::{NetworkStats, UserSummary};
pub use post::{Comment, Post, PostImage};
pub use profile::{CompanyProfile, EducationEntry, PublicProfile, UserPermissions, UserProfile};
pub use role::{ParseRoleError, Role};
pub use session::Session;
pub use upload::{validate_image_upload, validate_resume_upload, UploadError, MAX_UPLOAD_BYTES};
