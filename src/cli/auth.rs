//! Login, registration and logout commands

use std::io::BufRead;
use std::time::Duration;

use colored::Colorize;
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};
use indicatif::ProgressBar;

use crate::chat::View;
use crate::cli::CommandContext;
use crate::client::{AuthKind, AuthRequest};
use crate::error::{ApiError, Error, Result};

/// Run the login command
pub async fn login(ctx: &CommandContext, email: Option<String>, password_stdin: bool) -> Result<()> {
    let email = prompt_or(email, "Email")?;
    let password = read_password(password_stdin)?;

    submit(ctx, AuthKind::Login, AuthRequest::login(email, password)).await
}

/// Run the register command
pub async fn register(
    ctx: &CommandContext,
    name: Option<String>,
    email: Option<String>,
    password_stdin: bool,
) -> Result<()> {
    let name = prompt_or(name, "Display name")?;
    let email = prompt_or(email, "Email")?;
    let password = read_password(password_stdin)?;

    submit(ctx, AuthKind::Register, AuthRequest::register(name, email, password)).await
}

/// Interactive entry point that lets the user switch between the login and
/// registration panels before submitting.
pub async fn choose(ctx: &CommandContext) -> Result<()> {
    let mut view = View::Login;

    loop {
        let (action, switch) = match view {
            View::Register => ("Register", "Switch to login"),
            _ => ("Log in", "Switch to registration"),
        };

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Welcome to chatline")
            .items(&[action, switch])
            .default(0)
            .interact()?;

        if selection == 1 {
            view = view.toggle_auth_panel();
            continue;
        }

        return match view {
            View::Register => register(ctx, None, None, false).await,
            _ => login(ctx, None, false).await,
        };
    }
}

/// Run the logout command
pub async fn logout(ctx: &CommandContext) -> Result<()> {
    let location = ctx.controller.session().read().await.location();
    ctx.controller.logout().await?;

    println!("{} Logged out", "✓".green());
    log::debug!("Cleared session at {}", location);
    Ok(())
}

async fn submit(ctx: &CommandContext, kind: AuthKind, request: AuthRequest) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Authenticating...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = ctx.controller.authenticate(kind, &request).await;
    spinner.finish_and_clear();

    match result {
        Ok(_) => {
            let session = ctx.controller.session().read().await;
            let name = session.display_name().unwrap_or("User");
            println!("{} Logged in as {}", "✓".green(), name.bold());
            println!("Run {} to open the chat.", "chatline watch".cyan());
            Ok(())
        }
        Err(e) => {
            log::warn!("Authentication error: {}", e);
            Err(ApiError::AuthFailure.into())
        }
    }
}

fn prompt_or(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()?),
    }
}

fn read_password(from_stdin: bool) -> Result<String> {
    if !from_stdin {
        return Ok(Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?);
    }

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(Error::Other("No password on stdin".to_string()));
    }
    Ok(password)
}
