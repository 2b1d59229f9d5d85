//! Chat API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{Client as HttpClient, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::api::{AuthApi, MessageApi};
use super::models::{AuthKind, AuthRequest, AuthResponse, Message, NewMessage};
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Client-side request cap, well above what polling and typing produce
const RATE_LIMIT_PER_SECOND: u32 = 10;

/// HTTP client for the chat backend
pub struct ChatClient {
    http: HttpClient,
    base_url: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl ChatClient {
    /// Create a client from loaded configuration
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(&config.api_url, config.timeout())
    }

    /// Create a client against an explicit base URL
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let per_second = NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN);
        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_second(per_second)));

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limiter,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer header. An absent token is sent as an empty bearer.
    fn bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        builder.header("Authorization", format!("Bearer {}", token.unwrap_or("")))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        self.rate_limiter.until_ready().await;
        Ok(builder.send().await.map_err(ApiError::from)?)
    }

    /// Map a response on an authenticated endpoint to a typed error
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        match status {
            s if s.is_success() => Ok(response),
            StatusCode::FORBIDDEN => Err(ApiError::SessionExpired.into()),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            s if s.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", s));
                Err(ApiError::ServerError(error_msg).into())
            }
            s => Err(ApiError::InvalidResponse(format!("Unexpected status code: {}", s)).into()),
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        let data = response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;
        Ok(data)
    }
}

#[async_trait]
impl AuthApi for ChatClient {
    async fn authenticate(&self, kind: AuthKind, request: &AuthRequest) -> Result<AuthResponse> {
        let url = self.url(kind.path());
        log::debug!("POST {}", url);

        let response = self.send(self.http.post(&url).json(request)).await?;

        if !response.status().is_success() {
            log::debug!("Auth rejected with status {}", response.status());
            return Err(ApiError::AuthFailure.into());
        }

        Self::parse(response).await
    }
}

#[async_trait]
impl MessageApi for ChatClient {
    async fn list_messages(&self, token: Option<&str>) -> Result<Vec<Message>> {
        let url = self.url("/messages");
        log::debug!("GET {}", url);

        let response = self
            .send(Self::bearer(self.http.get(&url), token))
            .await?;
        let response = Self::check_status(response).await?;
        let messages: Vec<Message> = Self::parse(response).await?;

        log::debug!("Fetched {} messages", messages.len());
        Ok(messages)
    }

    async fn post_message(&self, token: Option<&str>, message: &NewMessage) -> Result<()> {
        let url = self.url("/messages");
        log::debug!("POST {}", url);

        let response = self
            .send(Self::bearer(self.http.post(&url), token).json(message))
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> ChatClient {
        ChatClient::with_base_url(&format!("{}/api", server.url()), Duration::from_secs(5))
            .unwrap()
    }

    #[test]
    fn test_client_creation() {
        assert!(ChatClient::new(&Config::default()).is_ok());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client =
            ChatClient::with_base_url("http://localhost:8080/api/", Duration::from_secs(1))
                .unwrap();
        assert_eq!(client.url("/messages"), "http://localhost:8080/api/messages");
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/login")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({
                "email": "ada@example.com",
                "password": "pw"
            })))
            .with_status(200)
            .with_body(r#"{"token":"tok-1","name":"Ada"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let response = client
            .authenticate(AuthKind::Login, &AuthRequest::login("ada@example.com", "pw"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.token, "tok-1");
        assert_eq!(response.name, "Ada");
    }

    #[tokio::test]
    async fn test_register_sends_name() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/register")
            .match_body(Matcher::PartialJson(serde_json::json!({"name": "Ada"})))
            .with_status(200)
            .with_body(r#"{"token":"tok-2","name":"Ada"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let request = AuthRequest::register("Ada", "ada@example.com", "pw");
        client
            .authenticate(AuthKind::Register, &request)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/auth/login")
            .with_status(401)
            .with_body(r#"{"error":"bad credentials"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client
            .authenticate(AuthKind::Login, &AuthRequest::login("a@b.c", "wrong"))
            .await;

        assert!(matches!(result, Err(Error::Api(ApiError::AuthFailure))));
    }

    #[tokio::test]
    async fn test_list_messages_sends_bearer() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/messages")
            .match_header("authorization", "Bearer tok-1")
            .with_status(200)
            .with_body(
                r#"[{"sender":"A","content":"hi","timestamp":"2025-01-15T12:00:00Z"},
                    {"sender":"B","content":"yo","timestamp":1736942460000}]"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let messages = client.list_messages(Some("tok-1")).await.unwrap();

        mock.assert_async().await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].sender.as_deref(), Some("B"));
    }

    #[tokio::test]
    async fn test_list_messages_forbidden_is_session_expired() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/messages")
            .with_status(403)
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.list_messages(Some("stale")).await;

        assert!(matches!(result, Err(Error::Api(ApiError::SessionExpired))));
    }

    #[tokio::test]
    async fn test_list_messages_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/messages")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = client_for(&server);
        match client.list_messages(Some("tok")).await {
            Err(Error::Api(ApiError::ServerError(msg))) => assert_eq!(msg, "boom"),
            other => panic!("Expected ServerError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_messages_bad_json() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/messages")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.list_messages(Some("tok")).await;
        assert!(matches!(
            result,
            Err(Error::Api(ApiError::InvalidResponse(_)))
        ));
    }

    #[tokio::test]
    async fn test_post_message_without_token_still_sends() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/messages")
            .match_header("authorization", Matcher::Regex(r"^Bearer\s*$".to_string()))
            .match_body(Matcher::Json(serde_json::json!({
                "sender": "Unknown",
                "content": "hello"
            })))
            .with_status(201)
            .create_async()
            .await;

        let client = client_for(&server);
        let message = NewMessage {
            sender: "Unknown".to_string(),
            content: "hello".to_string(),
        };
        let result = client.post_message(None, &message).await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let client =
            ChatClient::with_base_url("http://127.0.0.1:1/api", Duration::from_secs(2)).unwrap();
        let result = client.list_messages(Some("tok")).await;
        assert!(matches!(result, Err(Error::Api(ApiError::Network(_)))));
    }
}
