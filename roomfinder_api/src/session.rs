//! Bearer-token session handling.
//!
//! The token lives in an injectable [`TokenStore`] rather than a process
//! global, so tests can run several independent sessions side by side. A
//! [`Session`] keeps an in-memory copy and lazily backfills it from the
//! store, which lets a restarted process keep its login without asking the
//! user again.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Persistent storage for a single bearer token.
///
/// Exactly one token is active per store; writes are last-writer-wins.
pub trait TokenStore: Send + Sync {
    /// Reads the stored token, if any.
    fn load(&self) -> Option<String>;
    /// Stores a token, replacing any previous one.
    fn store(&self, token: &str);
    /// Removes the stored token.
    fn clear(&self);
}

/// Token store that keeps the token in memory only. Used in tests and for
/// one-shot sessions that should not outlive the process.
#[derive(Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn store(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

/// Token store backed by a single file holding the raw bearer string.
///
/// Store failures are logged and swallowed: losing persistence degrades to
/// an in-memory session, it must not fail the login itself.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(_) => None,
        }
    }

    fn store(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!("failed to create token directory: {}", e);
                return;
            }
        }
        if let Err(e) = fs::write(&self.path, token) {
            tracing::warn!("failed to persist token: {}", e);
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("failed to remove token file: {}", e),
        }
    }
}

/// The client's view of the signed-in user: one cached bearer token plus
/// the store it is mirrored to.
pub struct Session {
    cached: Mutex<Option<String>>,
    store: Box<dyn TokenStore>,
}

impl Session {
    /// Creates a session over the given store. The token is not read until
    /// first use.
    pub fn new(store: Box<dyn TokenStore>) -> Self {
        Self {
            cached: Mutex::new(None),
            store,
        }
    }

    /// Creates a session that forgets everything when dropped.
    pub fn in_memory() -> Self {
        Self::new(Box::<MemoryTokenStore>::default())
    }

    /// Returns the active token, lazily backfilling the in-memory copy
    /// from the store on first access.
    pub fn token(&self) -> Option<String> {
        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());
        if cached.is_none() {
            *cached = self.store.load();
        }
        cached.clone()
    }

    /// Sets or clears the active token, mirroring the change to the store.
    pub fn set_token(&self, token: Option<&str>) {
        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());
        match token {
            Some(token) => {
                *cached = Some(token.to_string());
                self.store.store(token);
            }
            None => {
                *cached = None;
                self.store.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_starts_empty() {
        let session = Session::in_memory();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn set_and_get_token() {
        let session = Session::in_memory();
        session.set_token(Some("tok-1"));
        assert_eq!(session.token(), Some("tok-1".to_string()));
    }

    #[test]
    fn clearing_removes_token() {
        let session = Session::in_memory();
        session.set_token(Some("tok-1"));
        session.set_token(None);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn last_writer_wins() {
        let session = Session::in_memory();
        session.set_token(Some("old"));
        session.set_token(Some("new"));
        assert_eq!(session.token(), Some("new".to_string()));
    }

    #[test]
    fn token_backfills_from_store() {
        // A fresh session over a store that already holds a token picks it
        // up without a new login, like a page reload would.
        let store = MemoryTokenStore::default();
        store.store("persisted");
        let session = Session::new(Box::new(store));
        assert_eq!(session.token(), Some("persisted".to_string()));
    }

    #[test]
    fn file_store_round_trip() {
        let path = std::env::temp_dir().join(format!("rf-token-{}", std::process::id()));
        let store = FileTokenStore::new(&path);
        store.store("file-token");
        assert_eq!(store.load(), Some("file-token".to_string()));
        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn file_store_missing_file_is_none() {
        let store = FileTokenStore::new("/nonexistent/rf-token");
        assert_eq!(store.load(), None);
    }
}
