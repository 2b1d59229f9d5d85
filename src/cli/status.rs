//! Status command implementation

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions};
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display session and configuration status
pub async fn run(ctx: &CommandContext, opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Chatline Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config_note = if config_path.exists() {
        ""
    } else {
        " (not found, using defaults)"
    };
    println!(
        "Config file: {}{}",
        config_path.display().to_string().cyan(),
        config_note.dimmed()
    );
    println!("API URL: {}", ctx.config.api_url.cyan());
    println!("Poll interval: {}s", ctx.config.poll_interval_secs);

    let session = ctx.controller.session().read().await;
    println!("Session file: {}", session.location().cyan());
    println!();

    if session.is_authenticated() {
        println!("{} Logged in", "✓".green());
    } else {
        println!("{} Not logged in", "✗".red());
        println!("  → Run 'chatline login' or 'chatline register'");
    }

    match session.display_name() {
        Some(name) => println!("{} Display name: {}", "✓".green(), name),
        None => println!("{} No display name stored", "○".dimmed()),
    }

    println!();
    Ok(())
}
