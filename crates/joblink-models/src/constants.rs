//! Shared constants.

/// Keys under which the session is persisted in the client key-value store.
///
/// All keys are cleared together on logout; see `SessionStore` in the client
/// crate.
pub mod storage_keys {
    pub const TOKEN: &str = "token";
    pub const USER_ID: &str = "userId";
    pub const USER_EMAIL: &str = "userEmail";
    pub const USER_NAME: &str = "userName";
    pub const USER_ROLE: &str = "userRole";
    pub const CSRF_TOKEN: &str = "csrfToken";

    /// Every key the store owns, in clear order.
    pub const ALL: &[&str] = &[TOKEN, USER_ID, USER_EMAIL, USER_NAME, USER_ROLE, CSRF_TOKEN];
}

/// Default values.
pub mod defaults {
    pub const API_BASE_URL: &str = "http://localhost:8000";
    pub const POSTS_PER_PAGE: usize = 10;
    pub const MAX_IMAGES_PER_POST: usize = 4;
}
