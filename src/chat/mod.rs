//! Chat flows: authentication, polling, sending, logout
//!
//! [`ChatController`] owns the API client and the shared session. Each flow
//! returns a typed result and leaves display policy to the caller.

pub mod poller;

use std::sync::Arc;

use crate::client::{AuthKind, AuthRequest, ChatApi, Message, NewMessage};
use crate::error::{ApiError, Error, Result};
use crate::session::SessionHandle;

pub use poller::{PollEvent, PollTask};

/// Sender name used when no display name is stored
pub const UNKNOWN_SENDER: &str = "Unknown";

/// Which screen the client is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    Chat,
}

impl View {
    /// Switch between the login and register panels. Chat stays put.
    pub fn toggle_auth_panel(self) -> Self {
        match self {
            View::Login => View::Register,
            View::Register => View::Login,
            View::Chat => View::Chat,
        }
    }
}

/// Result of a single poll
#[derive(Debug)]
pub enum PollOutcome {
    /// No token stored, nothing requested
    Skipped,
    Messages(Vec<Message>),
    /// The backend rejected the token; the session has been cleared
    SessionExpired,
    Failed(Error),
}

/// Wires the API client to the shared session
pub struct ChatController<C> {
    client: Arc<C>,
    session: SessionHandle,
}

impl<C: ChatApi> ChatController<C> {
    pub fn new(client: Arc<C>, session: SessionHandle) -> Self {
        Self { client, session }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// View to open on startup: chat when a token is stored, login otherwise
    pub async fn initial_view(&self) -> View {
        if self.session.read().await.is_authenticated() {
            View::Chat
        } else {
            View::Login
        }
    }

    /// Submit credentials; on success store them and move to the chat view
    pub async fn authenticate(&self, kind: AuthKind, request: &AuthRequest) -> Result<View> {
        let response = self.client.authenticate(kind, request).await?;

        self.session
            .write()
            .await
            .store_credentials(&response.token, &response.name)?;

        log::info!("Authenticated as {}", response.name);
        Ok(View::Chat)
    }

    /// Fetch the message list once with the stored token
    pub async fn poll(&self) -> PollOutcome {
        let token = match self.session.read().await.token() {
            Some(token) => token.to_string(),
            None => return PollOutcome::Skipped,
        };

        match self.client.list_messages(Some(&token)).await {
            Ok(messages) => PollOutcome::Messages(messages),
            Err(Error::Api(ApiError::SessionExpired)) => {
                if let Err(e) = self.session.write().await.clear() {
                    log::error!("Failed to clear expired session: {}", e);
                }
                PollOutcome::SessionExpired
            }
            Err(e) => PollOutcome::Failed(e),
        }
    }

    /// Post a message under the stored display name.
    ///
    /// An absent token is not checked here; the request goes out regardless.
    pub async fn send(&self, content: &str) -> Result<()> {
        let (token, sender) = {
            let session = self.session.read().await;
            (
                session.token().map(str::to_string),
                session.display_name().unwrap_or(UNKNOWN_SENDER).to_string(),
            )
        };

        let message = NewMessage {
            sender,
            content: content.to_string(),
        };
        self.client
            .post_message(token.as_deref(), &message)
            .await
    }

    /// Forget the session and return to the login view
    pub async fn logout(&self) -> Result<View> {
        self.session.write().await.clear()?;
        Ok(View::Login)
    }
}
