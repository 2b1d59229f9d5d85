//! One-shot message listing

use crate::chat::PollOutcome;
use crate::cli::CommandContext;
use crate::error::{ApiError, Result};
use crate::output;

/// Fetch the message list once and print it
pub async fn run(ctx: &CommandContext) -> Result<()> {
    ctx.require_session().await?;

    match ctx.controller.poll().await {
        PollOutcome::Messages(messages) => output::print_messages(&messages, ctx.format),
        PollOutcome::SessionExpired => Err(ApiError::SessionExpired.into()),
        PollOutcome::Skipped => Err(ApiError::NotLoggedIn.into()),
        PollOutcome::Failed(e) => Err(e),
    }
}
