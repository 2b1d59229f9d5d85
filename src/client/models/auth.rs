//! Authentication models

use serde::{Deserialize, Serialize};

/// Which auth endpoint a request goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    Login,
    Register,
}

impl AuthKind {
    /// Path below the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            AuthKind::Login => "/auth/login",
            AuthKind::Register => "/auth/register",
        }
    }
}

/// Credentials submitted to `/auth/login` or `/auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest {
    /// Display name, only sent on registration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub email: String,

    pub password: String,
}

impl AuthRequest {
    /// Login credentials
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: None,
            email: email.into(),
            password: password.into(),
        }
    }

    /// Registration credentials
    pub fn register(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful auth response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Opaque bearer token
    pub token: String,

    /// Display name to send messages under
    pub name: String,
}
