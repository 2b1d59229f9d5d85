//! Message API trait

use async_trait::async_trait;

use crate::client::models::{Message, NewMessage};
use crate::error::Result;

/// Message listing and posting
///
/// The token is passed per call; an absent token is sent as an empty bearer.
#[async_trait]
pub trait MessageApi: Send + Sync {
    /// Fetch the full message list
    async fn list_messages(&self, token: Option<&str>) -> Result<Vec<Message>>;

    /// Post a new message
    async fn post_message(&self, token: Option<&str>, message: &NewMessage) -> Result<()>;
}
