//! Client-held session: auth token and display name
//!
//! The session is the only state shared between the auth, poll and send
//! flows. It is passed around as a [`SessionHandle`] and read through
//! accessors; every mutation writes through to the backing store.

pub mod storage;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::Result;
pub use storage::{FileStore, KeyValueStore};

/// Storage key for the auth token
pub const TOKEN_KEY: &str = "chat_token";

/// Storage key for the display name
pub const NAME_KEY: &str = "chat_user_name";

/// Shared, lockable session
pub type SessionHandle = Arc<RwLock<Session>>;

/// Auth token and display name, persisted in a [`KeyValueStore`]
pub struct Session {
    store: Box<dyn KeyValueStore>,
    token: Option<String>,
    display_name: Option<String>,
}

impl Session {
    /// Load the session from storage. Empty values count as absent.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let display_name = store.get(NAME_KEY).filter(|n| !n.is_empty());

        Self {
            store,
            token,
            display_name,
        }
    }

    /// Wrap the session for sharing across tasks
    pub fn into_handle(self) -> SessionHandle {
        Arc::new(RwLock::new(self))
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Whether a token is present
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Where the session is persisted
    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Store credentials returned by a successful login or registration
    pub fn store_credentials(&mut self, token: &str, display_name: &str) -> Result<()> {
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(NAME_KEY, display_name)?;
        self.token = Some(token.to_string()).filter(|t| !t.is_empty());
        self.display_name = Some(display_name.to_string()).filter(|n| !n.is_empty());
        Ok(())
    }

    /// Forget both token and display name
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(NAME_KEY)?;
        self.token = None;
        self.display_name = None;
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("location", &self.store.location())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("display_name", &self.display_name)
            .finish()
    }
}
