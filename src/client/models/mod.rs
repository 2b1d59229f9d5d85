//! Chat API data models

mod auth;
mod message;

pub use auth::{AuthKind, AuthRequest, AuthResponse};
pub use message::{Message, NewMessage};
