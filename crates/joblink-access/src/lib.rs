//! Pure role-based authorization decisions.
//!
//! Every function here is synchronous, does no I/O, and never panics or
//! returns an error: malformed or missing inputs map to a deny decision
//! with a best-effort reason code. Callers run these checks before issuing
//! a request so an obviously forbidden action never reaches the network.
//!
//! The backend remains the authority for every rule; these decisions only
//! control which affordances the client offers.

pub mod decision;
pub mod rules;

pub use decision::{Decision, ReasonCode};
pub use rules::{
    can_apply_to_jobs, can_post_jobs, can_view_applicants, decide_comment_edit,
    decide_job_application, decide_job_management, decide_post_edit, decide_view_applicants,
    is_own_posting, Viewer,
};
