//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file defaults are resolved later in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override
    pub format: Option<OutputFormat>,

    /// Backend base URL override
    pub api_url: Option<String>,

    /// Custom config file path (defaults to ~/.chatline/config.yaml)
    pub config: Option<String>,

    /// Custom session file path (defaults to ~/.chatline/session.yaml)
    pub session: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            api_url: cli.api_url.clone(),
            config: cli.config.clone(),
            session: cli.session.clone(),
        }
    }

    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn session_ref(&self) -> Option<&str> {
        self.session.as_deref()
    }
}
