//! Output formatting for CLI results

use crate::cli::OutputFormat;
use crate::client::Message;
use crate::error::Result;
use crate::models::MessageDisplay;

pub mod formatters;
pub mod json;
pub mod markup;
pub mod pane;
pub mod pretty;
pub mod table;

pub use pane::MessagePane;

/// Render a message list in the requested format
pub fn format_messages(messages: &[Message], format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Pretty => {
            let lines = pretty::message_lines(messages);
            if lines.is_empty() {
                "No messages yet.".to_string()
            } else {
                lines.join("\n")
            }
        }
        OutputFormat::Table => table::format_table(&MessageDisplay::rows(messages)),
        OutputFormat::Json => {
            let renderable: Vec<&Message> =
                messages.iter().filter(|m| m.is_renderable()).collect();
            json::format_json(&renderable)?
        }
        OutputFormat::Html => markup::render_messages(messages),
    };
    Ok(output)
}

/// Format and print messages to stdout
pub fn print_messages(messages: &[Message], format: OutputFormat) -> Result<()> {
    println!("{}", format_messages(messages, format)?);
    Ok(())
}
