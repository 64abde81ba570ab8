//! Session persistence.
//!
//! The store stands in for the browser's key-value storage: one process-wide
//! slot holding the token and identity, written and cleared as a unit. It is
//! injected into the client at construction, never read ambiently, so tests
//! can substitute an in-memory fake.

use std::sync::{PoisonError, RwLock};

use joblink_models::Session;

/// Process-wide session storage.
///
/// All identity keys (token, user id, email, name, role, CSRF token — see
/// `joblink_models::constants::storage_keys`) live and die together: `set`
/// replaces them atomically, `clear` removes them atomically.
pub trait SessionStore: Send + Sync {
    /// Current session, if any.
    fn get(&self) -> Option<Session>;

    /// Replace the stored session.
    fn set(&self, session: Session);

    /// Drop the stored session. Idempotent.
    fn clear(&self);

    /// Whether a session is present.
    fn is_logged_in(&self) -> bool {
        self.get().is_some()
    }
}

/// In-memory `SessionStore`.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, session: Session) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    fn clear(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joblink_models::Role;

    fn session() -> Session {
        Session::new("tok", 1, "a@b.c", "A", Role::Employee)
    }

    #[test]
    fn test_set_get_clear() {
        let store = MemorySessionStore::new();
        assert!(store.get().is_none());
        assert!(!store.is_logged_in());

        store.set(session());
        assert!(store.is_logged_in());
        assert_eq!(store.get().unwrap().token, "tok");

        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemorySessionStore::new();
        store.clear();
        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_set_replaces_whole_session() {
        let store = MemorySessionStore::new();
        store.set(session());

        let mut other = session();
        other.token = "tok2".into();
        other.csrf_token = Some("csrf".into());
        store.set(other);

        let current = store.get().unwrap();
        assert_eq!(current.token, "tok2");
        assert_eq!(current.csrf_token.as_deref(), Some("csrf"));
    }
}
