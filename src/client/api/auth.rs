//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{AuthKind, AuthRequest, AuthResponse};
use crate::error::Result;

/// Authentication operations for the chat API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Submit credentials to the login or register endpoint
    async fn authenticate(&self, kind: AuthKind, request: &AuthRequest) -> Result<AuthResponse>;
}
