//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - one line per message for the terminal
    #[default]
    Pretty,
    /// Table format - time, sender and content columns
    Table,
    /// JSON format - structured for scripts
    Json,
    /// HTML markup - one escaped block per message
    Html,
}
