//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod auth;
pub mod context;
pub mod messages;
pub mod send;
pub mod status;
pub mod watch;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// Chatline - terminal client for the chat backend
#[derive(Parser, Debug)]
#[command(name = "chatline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json, html)
    #[arg(
        long,
        global = true,
        env = "CHATLINE_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Backend base URL, e.g. http://localhost:8080/api
    #[arg(long, global = true, env = "CHATLINE_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "CHATLINE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override session file location
    #[arg(long, global = true, env = "CHATLINE_SESSION", hide_env = true)]
    pub session: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CHATLINE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in with email and password
    Login {
        /// Account email (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Read the password from the first line of stdin
        #[arg(long)]
        password_stdin: bool,
    },

    /// Create an account and log in
    Register {
        /// Display name (prompted if omitted)
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// Account email (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Read the password from the first line of stdin
        #[arg(long)]
        password_stdin: bool,
    },

    /// Choose between logging in and registering interactively
    Auth,

    /// Forget the stored session
    Logout,

    /// Show session and configuration status
    Status,

    /// Fetch and print the message list once
    #[command(visible_alias = "ls")]
    Messages,

    /// Post a message, then print the refreshed list
    Send {
        /// Message text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },

    /// Open the live chat view: poll, render, and send typed lines
    #[command(after_help = "COMMANDS WHILE WATCHING:\n  \
            /up [N]      Scroll up N lines (default 5)\n  \
            /down [N]    Scroll down N lines (default 5)\n  \
            /bottom      Jump to the newest messages\n  \
            /logout      Log out and exit\n  \
            /quit        Exit")]
    Watch {
        /// Number of message lines to show
        #[arg(long, default_value_t = 20)]
        lines: usize,
    },

    /// Display version information
    Version,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
