//! Mock chat API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{AuthApi, MessageApi};
use super::models::{AuthKind, AuthRequest, AuthResponse, Message, NewMessage};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockChatClient::new()
///     .with_messages(vec![message("A", "hi")])
///     .await;
///
/// let messages = mock.list_messages(Some("tok")).await?;
/// assert_eq!(messages.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockChatClient {
    /// Messages to return from list_messages
    messages: Arc<Mutex<Vec<Message>>>,
    /// Response to return from authenticate
    auth: Arc<Mutex<Option<AuthResponse>>>,
    /// Errors to return, one per call, in order
    errors: Arc<Mutex<VecDeque<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub authenticate: usize,
    pub list_messages: usize,
    pub post_message: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.authenticate + self.list_messages + self.post_message
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// The API method called (e.g., "authenticate", "post_message")
    pub method: String,
    /// Bearer token presented, if any
    pub token: Option<String>,
    /// Auth endpoint, for authenticate calls
    pub auth_kind: Option<AuthKind>,
    /// Posted message, for post_message calls
    pub message: Option<NewMessage>,
}

impl MockChatClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure messages to return from list_messages.
    pub async fn with_messages(self, messages: Vec<Message>) -> Self {
        *self.messages.lock().await = messages;
        self
    }

    /// Configure the response to return from authenticate.
    pub async fn with_auth(self, auth: AuthResponse) -> Self {
        *self.auth.lock().await = Some(auth);
        self
    }

    /// Queue an error for the next API call. Each error is consumed once.
    pub async fn with_error(self, error: ApiError) -> Self {
        self.errors.lock().await.push_back(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    async fn check_error(&self) -> Result<()> {
        if let Some(e) = self.errors.lock().await.pop_front() {
            return Err(e.into());
        }
        Ok(())
    }

    async fn capture(&self, request: CapturedRequest) {
        self.captured_requests.lock().await.push(request);
    }
}

#[async_trait]
impl AuthApi for MockChatClient {
    async fn authenticate(&self, kind: AuthKind, _request: &AuthRequest) -> Result<AuthResponse> {
        self.capture(CapturedRequest {
            method: "authenticate".to_string(),
            token: None,
            auth_kind: Some(kind),
            message: None,
        })
        .await;
        self.call_count.lock().await.authenticate += 1;
        self.check_error().await?;

        let auth = self.auth.lock().await;
        Ok(auth.clone().unwrap_or_else(|| AuthResponse {
            token: "mock-token".to_string(),
            name: "Mock User".to_string(),
        }))
    }
}

#[async_trait]
impl MessageApi for MockChatClient {
    async fn list_messages(&self, token: Option<&str>) -> Result<Vec<Message>> {
        self.capture(CapturedRequest {
            method: "list_messages".to_string(),
            token: token.map(str::to_string),
            auth_kind: None,
            message: None,
        })
        .await;
        self.call_count.lock().await.list_messages += 1;
        self.check_error().await?;

        Ok(self.messages.lock().await.clone())
    }

    async fn post_message(&self, token: Option<&str>, message: &NewMessage) -> Result<()> {
        self.capture(CapturedRequest {
            method: "post_message".to_string(),
            token: token.map(str::to_string),
            auth_kind: None,
            message: Some(message.clone()),
        })
        .await;
        self.call_count.lock().await.post_message += 1;
        self.check_error().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_errors_are_consumed_in_order() {
        let mock = MockChatClient::new()
            .with_error(ApiError::SessionExpired)
            .await;

        let first = mock.list_messages(Some("t")).await;
        assert!(matches!(first, Err(Error::Api(ApiError::SessionExpired))));

        let second = mock.list_messages(Some("t")).await;
        assert!(second.is_ok());
        assert_eq!(mock.call_counts().await.total(), 2);
    }

    #[tokio::test]
    async fn test_captures_token() {
        let mock = MockChatClient::new();
        mock.list_messages(None).await.unwrap();

        let requests = mock.captured_requests().await;
        assert_eq!(requests.len(), 1);
        assert!(requests[0].token.is_none());
    }
}
