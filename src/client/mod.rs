//! Chat backend API client

pub mod api;
pub mod chat;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{AuthApi, MessageApi};
pub use chat::ChatClient;
#[cfg(test)]
pub use mock::MockChatClient;
pub use models::{AuthKind, AuthRequest, AuthResponse, Message, NewMessage};

/// Full chat API surface
pub trait ChatApi: AuthApi + MessageApi {}

impl<T: AuthApi + MessageApi> ChatApi for T {}
