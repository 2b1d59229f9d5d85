//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login and registration
//! - [`MessageApi`] - Listing and posting messages
//!
//! The [`ChatApi`](super::ChatApi) super-trait combines both.

mod auth;
mod messages;

pub use auth::AuthApi;
pub use messages::MessageApi;
