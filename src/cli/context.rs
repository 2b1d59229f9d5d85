//! Command execution context
//!
//! Loads configuration and the stored session once and builds the API client
//! and chat controller every command works through.

use std::sync::Arc;

use clap::ValueEnum;

use crate::chat::{ChatController, View};
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::ChatClient;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::session::{FileStore, Session};

/// Context for command execution containing config, controller, and output options.
pub struct CommandContext {
    /// Loaded configuration with CLI overrides applied
    pub config: Config,
    /// Controller over the HTTP client and persisted session
    pub controller: Arc<ChatController<ChatClient>>,
    /// Resolved output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// No network traffic happens here; an absent session is not an error.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?.with_api_url(opts.api_url_ref());
        log::debug!("Using API at {}", config.api_url);

        let store = FileStore::open_at(opts.session_ref())?;
        let session = Session::load(Box::new(store)).into_handle();

        let client = Arc::new(ChatClient::new(&config)?);
        let controller = Arc::new(ChatController::new(client, session));
        let format = resolve_format(opts.format, &config);

        Ok(Self {
            config,
            controller,
            format,
        })
    }

    /// Fail with `NotLoggedIn` unless a token is stored
    pub async fn require_session(&self) -> Result<()> {
        if self.controller.initial_view().await == View::Chat {
            Ok(())
        } else {
            Err(ApiError::NotLoggedIn.into())
        }
    }
}

fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| {
        config
            .format
            .as_deref()
            .and_then(|name| OutputFormat::from_str(name, true).ok())
    })
    .unwrap_or_default()
}
