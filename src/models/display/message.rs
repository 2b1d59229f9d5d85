//! Message display model

use tabled::Tabled;

use crate::client::Message;
use crate::output::formatters::{format_datetime_local, sanitize_terminal, truncate_chars};

/// Widest content cell before truncation
const MAX_CONTENT_CHARS: usize = 80;

/// Message row for table output
#[derive(Debug, Clone, Tabled)]
pub struct MessageDisplay {
    #[tabled(rename = "TIME")]
    pub time: String,

    #[tabled(rename = "SENDER")]
    pub sender: String,

    #[tabled(rename = "CONTENT")]
    pub content: String,
}

impl MessageDisplay {
    /// Build a row, or `None` if the message is not renderable
    pub fn from_message(message: &Message) -> Option<Self> {
        let (Some(sender), Some(content)) = (&message.sender, &message.content) else {
            return None;
        };

        let single_line = content.lines().collect::<Vec<_>>().join(" ");
        Some(Self {
            time: format_datetime_local(message.timestamp.as_ref()),
            sender: sanitize_terminal(sender),
            content: truncate_chars(&sanitize_terminal(&single_line), MAX_CONTENT_CHARS),
        })
    }

    /// Rows for every renderable message
    pub fn rows(messages: &[Message]) -> Vec<Self> {
        messages.iter().filter_map(Self::from_message).collect()
    }
}
