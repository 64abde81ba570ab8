//! Feed posts and comments.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An image attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PostImage {
    pub id: i64,
    /// Server-side image URL or path
    pub image: String,
    #[serde(default)]
    pub order: u32,
}

/// A feed post.
///
/// Mutable by its author only; likes and comments are separate sub-resources
/// and only their aggregate counts travel with the post.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Post {
    pub id: i64,

    #[serde(default)]
    pub author_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_role: Option<String>,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub images: Vec<PostImage>,

    #[serde(default)]
    pub likes_count: u64,

    #[serde(default)]
    pub comments_count: u64,

    /// Whether the current user liked this post (personalized by the backend)
    #[serde(default)]
    pub liked_by_current_user: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A comment on a post; editable and deletable only by its author.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Comment {
    pub id: i64,

    /// Referenced post id
    #[serde(default, alias = "post_id", skip_serializing_if = "Option::is_none")]
    pub post: Option<i64>,

    /// Author's display name
    #[serde(default)]
    pub user: String,

    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
