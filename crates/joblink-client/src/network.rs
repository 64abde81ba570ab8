//! Follow graph.
//!
//! Follow and unfollow are guarded per target: a double-click cannot race
//! two identical requests. A suppressed duplicate resolves to `Ok(false)`.

use serde_json::{json, Value};
use tracing::debug;

use joblink_models::{NetworkStats, UserSummary};

use crate::client::{decode, ApiClient};
use crate::error::ApiResult;
use crate::inflight::Action;

/// Operations under `/network/`.
pub struct NetworkService {
    client: ApiClient,
}

impl NetworkService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Follower/following counts, computed server-side.
    pub async fn stats(&self) -> ApiResult<NetworkStats> {
        decode(self.client.get("/network/network-stats/").await?)
    }

    /// Accounts the current user might want to follow.
    pub async fn suggestions(&self) -> ApiResult<Vec<UserSummary>> {
        user_list(self.client.get("/network/suggestions/").await?)
    }

    pub async fn my_following(&self) -> ApiResult<Vec<UserSummary>> {
        user_list(self.client.get("/network/my-following/").await?)
    }

    pub async fn my_followers(&self) -> ApiResult<Vec<UserSummary>> {
        user_list(self.client.get("/network/my-followers/").await?)
    }

    /// Follow a user. Returns `false` when an identical follow is already
    /// in flight and the request was skipped.
    pub async fn follow(&self, user_id: i64) -> ApiResult<bool> {
        let Some(_guard) = self.client.inflight().try_begin(Action::Follow, user_id) else {
            debug!("Follow of user {user_id} already in flight, skipping");
            return Ok(false);
        };

        self.client
            .post(&format!("/network/follow/{user_id}/"), &json!({}))
            .await?;
        Ok(true)
    }

    /// Unfollow a user. Same duplicate-suppression contract as [`follow`].
    ///
    /// [`follow`]: NetworkService::follow
    pub async fn unfollow(&self, user_id: i64) -> ApiResult<bool> {
        let Some(_guard) = self.client.inflight().try_begin(Action::Unfollow, user_id) else {
            debug!("Unfollow of user {user_id} already in flight, skipping");
            return Ok(false);
        };

        self.client
            .delete(&format!("/network/unfollow/{user_id}/"))
            .await?;
        Ok(true)
    }
}

/// Decode the user-list shapes this namespace produces.
///
/// `my-following` wraps its rows as `{"following": [...], "count": n}`,
/// `my-followers` as `{"followers": [...]}`, and older revisions returned
/// bare arrays or `{"results": [...]}`.
fn user_list(value: Value) -> ApiResult<Vec<UserSummary>> {
    match value {
        Value::Object(mut map) => {
            for key in ["following", "followers", "users", "results", "data"] {
                if let Some(inner) = map.remove(key) {
                    return decode(inner);
                }
            }
            decode(Value::Object(map))
        }
        other => decode(other),
    }
}
