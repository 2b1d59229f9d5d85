//! Chatline - terminal client for the chat backend

use clap::{CommandFactory, Parser};

mod chat;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;

use cli::{Cli, CommandContext, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("chatline", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    // Commands that need neither config nor session
    match &cli.command {
        Commands::Version => {
            println!("chatline version {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Commands::Completion { shell } => {
            clap_complete::generate(*shell, &mut Cli::command(), "chatline", &mut std::io::stdout());
            return Ok(());
        }
        _ => {}
    }

    let ctx = CommandContext::new(&opts)?;

    match cli.command {
        Commands::Login {
            email,
            password_stdin,
        } => cli::auth::login(&ctx, email, password_stdin).await,
        Commands::Register {
            name,
            email,
            password_stdin,
        } => cli::auth::register(&ctx, name, email, password_stdin).await,
        Commands::Auth => cli::auth::choose(&ctx).await,
        Commands::Logout => cli::auth::logout(&ctx).await,
        Commands::Status => cli::status::run(&ctx, &opts).await,
        Commands::Messages => cli::messages::run(&ctx).await,
        Commands::Send { content } => cli::send::run(&ctx, &content.join(" ")).await,
        Commands::Watch { lines } => cli::watch::run(&ctx, lines).await,
        Commands::Version | Commands::Completion { .. } => Ok(()),
    }
}
