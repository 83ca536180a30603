//! Session persistence between page loads.

use contracts::system::auth::Session;

use crate::shared::storage::KeyValueStore;

pub const SESSION_STORAGE_KEY: &str = "auth_session";

pub fn save_session(store: &dyn KeyValueStore, session: &Session) {
    match serde_json::to_string(session) {
        Ok(raw) => store.set(SESSION_STORAGE_KEY, &raw),
        Err(e) => log::warn!("Failed to serialize session: {}", e),
    }
}

/// Stored session, if any. An unreadable entry is dropped.
pub fn load_session(store: &dyn KeyValueStore) -> Option<Session> {
    let raw = store.get(SESSION_STORAGE_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("Discarding malformed stored session: {}", e);
            store.remove(SESSION_STORAGE_KEY);
            None
        }
    }
}

pub fn clear_session(store: &dyn KeyValueStore) {
    store.remove(SESSION_STORAGE_KEY);
}
