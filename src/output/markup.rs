//! HTML markup rendering for the message list
//!
//! Every message becomes one `<div class="message">` block with escaped
//! sender and content. Output depends only on the input, so re-rendering an
//! unchanged list yields identical markup.

use crate::client::Message;
use crate::output::formatters::format_time_local;

/// Escape text for insertion into HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Render one message block, or `None` if sender or content is missing
pub fn render_message(message: &Message) -> Option<String> {
    let (Some(sender), Some(content)) = (&message.sender, &message.content) else {
        return None;
    };

    Some(format!(
        r#"
        <div class="message">
            <div class="sender">{}</div>
            <div class="content">{}</div>
            <div class="time">{}</div>
        </div>
    "#,
        escape_html(sender),
        escape_html(content),
        format_time_local(message.timestamp.as_ref()),
    ))
}

/// Render the full message list, skipping incomplete records
pub fn render_messages(messages: &[Message]) -> String {
    messages.iter().filter_map(render_message).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn message(sender: Option<&str>, content: Option<&str>) -> Message {
        Message {
            sender: sender.map(str::to_string),
            content: content.map(str::to_string),
            timestamp: Some(Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_content_is_escaped() {
        let html = render_messages(&[message(Some("A"), Some("<b>hi</b>"))]);

        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(!html.contains("<b>hi</b>"));
    }

    #[test]
    fn test_sender_is_escaped() {
        let html = render_messages(&[message(Some("<script>"), Some("x"))]);
        assert!(html.contains(r#"<div class="sender">&lt;script&gt;</div>"#));
    }

    #[test]
    fn test_block_structure() {
        let html = render_messages(&[message(Some("A"), Some("hi"))]);

        assert!(html.contains(r#"<div class="message">"#));
        assert!(html.contains(r#"<div class="sender">A</div>"#));
        assert!(html.contains(r#"<div class="content">hi</div>"#));
        assert!(html.contains(r#"<div class="time">"#));
    }

    #[test]
    fn test_incomplete_messages_are_skipped() {
        let html = render_messages(&[
            message(None, Some("orphan")),
            message(Some("A"), None),
            message(Some("B"), Some("kept")),
        ]);

        assert_eq!(html.matches(r#"class="message""#).count(), 1);
        assert!(html.contains("kept"));
        assert!(!html.contains("orphan"));
    }

    #[test]
    fn test_missing_timestamp_renders_placeholder() {
        let mut msg = message(Some("A"), Some("hi"));
        msg.timestamp = None;
        let html = render_messages(&[msg]);
        assert!(html.contains(r#"<div class="time">N/A</div>"#));
    }

    #[test]
    fn test_render_is_idempotent() {
        let messages = vec![
            message(Some("A"), Some("one")),
            message(Some("B"), Some("two & three")),
        ];
        let again = messages.clone();

        assert_eq!(render_messages(&messages), render_messages(&again));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert_eq!(render_messages(&[]), "");
    }
}
