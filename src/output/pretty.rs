//! Terminal rendering of messages

use colored::Colorize;

use crate::client::Message;
use crate::output::formatters::{format_time_local, sanitize_terminal};

/// Render messages as terminal lines.
///
/// Each message starts with `HH:MM:SS sender: ` followed by its first content
/// line; further content lines are indented under it. Incomplete messages
/// are skipped.
pub fn message_lines(messages: &[Message]) -> Vec<String> {
    let mut lines = Vec::new();

    for message in messages {
        let (Some(sender), Some(content)) = (&message.sender, &message.content) else {
            continue;
        };

        let time = format_time_local(message.timestamp.as_ref());
        let sender = sanitize_terminal(sender);
        let prefix_width = time.chars().count() + sender.chars().count() + 3;

        let mut content_lines = content.lines();
        let first = content_lines.next().unwrap_or("");
        lines.push(format!(
            "{} {}: {}",
            time.dimmed(),
            sender.bold(),
            sanitize_terminal(first)
        ));
        for rest in content_lines {
            lines.push(format!(
                "{:width$}{}",
                "",
                sanitize_terminal(rest),
                width = prefix_width
            ));
        }
    }

    lines
}
