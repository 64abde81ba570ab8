//! Authorization rules.

use joblink_models::{Job, Role, Session};

use crate::decision::{Decision, ReasonCode};

/// Identity of the user the decision is made for.
///
/// Any field may be missing (anonymous visitor, partial payloads); missing
/// fields simply make the related rules not match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: Option<i64>,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_id(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }
}

impl From<&Session> for Viewer {
    fn from(session: &Session) -> Self {
        Self {
            user_id: Some(session.user_id),
            email: Some(session.email.clone()),
            name: Some(session.name.clone()),
        }
    }
}

/// Whether the role may publish and manage job postings.
pub fn can_post_jobs(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Employer) | Some(Role::Company))
}

/// Whether the role may apply to jobs at all.
pub fn can_apply_to_jobs(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Employee) | Some(Role::Employer))
}

/// Whether the role may view applicants for a posting.
pub fn can_view_applicants(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Employer) | Some(Role::Company))
}

/// Whether the viewer published this job.
///
/// The id comparison wins when both ids are present; the case-insensitive
/// email comparison is only a fallback for payloads that omit the publisher
/// id. (Historical screens used id-only or id-or-email inconsistently; this
/// is the defensive variant.)
pub fn is_own_posting(job: &Job, viewer: &Viewer) -> bool {
    match (job.publisher_id, viewer.user_id) {
        (Some(publisher), Some(user)) => publisher == user,
        _ => match (job.publisher_email.as_deref(), viewer.email.as_deref()) {
            (Some(publisher), Some(email)) => publisher.eq_ignore_ascii_case(email),
            _ => false,
        },
    }
}

/// Decide whether the viewer may apply to `job`.
///
/// First matching rule wins; the order is part of the contract:
/// authentication, role, ownership, active flag, already-applied flag.
pub fn decide_job_application(
    role: Option<Role>,
    job: Option<&Job>,
    viewer: &Viewer,
    is_logged_in: bool,
) -> Decision {
    if !is_logged_in {
        return Decision::deny(
            ReasonCode::AuthenticationRequired,
            "Please log in to apply for jobs.",
        );
    }

    if !can_apply_to_jobs(role) {
        return match role {
            Some(Role::Company) => Decision::deny(
                ReasonCode::CompanyCannotApply,
                "Companies cannot apply for jobs. You can only post jobs and view applicants.",
            ),
            _ => Decision::deny(
                ReasonCode::AccessDenied,
                "Only Employees and Employers can apply for jobs.",
            ),
        };
    }

    if let Some(job) = job {
        if is_own_posting(job, viewer) {
            return Decision::deny(
                ReasonCode::OwnJobApplication,
                "You cannot apply to your own job posting.",
            );
        }

        if !job.is_active {
            return Decision::deny(ReasonCode::JobInactive, "This job is no longer active.");
        }

        if job.has_applied {
            return Decision::deny(
                ReasonCode::AlreadyApplied,
                "You have already applied to this job.",
            );
        }
    }

    Decision::allow("You can apply to this job.")
}

/// Decide whether the viewer may create, edit, or deactivate job postings.
///
/// The further restriction of management to the job's own publisher is
/// enforced by the backend; the client uses [`is_own_posting`] only to hide
/// the affordance.
pub fn decide_job_management(role: Option<Role>, is_logged_in: bool) -> Decision {
    if !is_logged_in {
        return Decision::deny(
            ReasonCode::AuthenticationRequired,
            "Please log in to manage job postings.",
        );
    }

    if !can_post_jobs(role) {
        return Decision::deny(
            ReasonCode::AccessDenied,
            "Only Employers and Companies can manage job postings.",
        );
    }

    Decision::allow("You can manage job postings.")
}

/// Decide whether the viewer may view applicants for postings.
pub fn decide_view_applicants(role: Option<Role>, is_logged_in: bool) -> Decision {
    if !is_logged_in {
        return Decision::deny(
            ReasonCode::AuthenticationRequired,
            "Please log in to view applicants.",
        );
    }

    if !can_view_applicants(role) {
        return Decision::deny(
            ReasonCode::AccessDenied,
            "Only Employers and Companies can view applicants.",
        );
    }

    Decision::allow("You can view applicants.")
}

/// Decide whether the viewer may edit or delete a post.
///
/// Posts carry only the author's display name, so authorship is a string
/// comparison against the viewer's stored name or email.
pub fn decide_post_edit(author: Option<&str>, viewer: &Viewer, is_logged_in: bool) -> Decision {
    decide_author_only(author, viewer, is_logged_in, "posts")
}

/// Decide whether the viewer may edit or delete a comment.
pub fn decide_comment_edit(author: Option<&str>, viewer: &Viewer, is_logged_in: bool) -> Decision {
    decide_author_only(author, viewer, is_logged_in, "comments")
}

fn decide_author_only(
    author: Option<&str>,
    viewer: &Viewer,
    is_logged_in: bool,
    noun: &str,
) -> Decision {
    if !is_logged_in {
        return Decision::deny(
            ReasonCode::AuthenticationRequired,
            format!("Please log in to edit {noun}."),
        );
    }

    let is_author = match author {
        Some(author) => {
            viewer.name.as_deref() == Some(author) || viewer.email.as_deref() == Some(author)
        }
        None => false,
    };

    if !is_author {
        return Decision::deny(
            ReasonCode::AccessDenied,
            format!("You can only edit your own {noun}."),
        );
    }

    Decision::allow("You are the author.")
}
