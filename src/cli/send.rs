//! Send command implementation

use colored::Colorize;

use crate::chat::PollOutcome;
use crate::cli::CommandContext;
use crate::error::{ApiError, Result};
use crate::output;

/// Post a message, then poll once and print the refreshed list
pub async fn run(ctx: &CommandContext, content: &str) -> Result<()> {
    if let Err(e) = ctx.controller.send(content).await {
        log::warn!("Send error: {}", e);
        return Err(ApiError::SendFailure.into());
    }
    println!("{} Sent", "✓".green());

    match ctx.controller.poll().await {
        PollOutcome::Messages(messages) => output::print_messages(&messages, ctx.format)?,
        PollOutcome::SessionExpired => return Err(ApiError::SessionExpired.into()),
        PollOutcome::Skipped => {}
        PollOutcome::Failed(e) => log::warn!("Failed to fetch messages: {}", e),
    }

    Ok(())
}
