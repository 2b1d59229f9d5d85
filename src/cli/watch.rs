//! Live chat view
//!
//! Polls in the background, redraws the message pane when the list changes,
//! and sends each line typed on stdin.

use std::io::{IsTerminal, Write};

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::chat::{PollEvent, PollTask};
use crate::cli::CommandContext;
use crate::error::{ApiError, Result};
use crate::output::{MessagePane, pretty};

/// Lines scrolled by `/up` and `/down` without an argument
const DEFAULT_SCROLL: usize = 5;

/// A line typed in the chat view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    Empty,
    Message(String),
    Up(usize),
    Down(usize),
    Bottom,
    Logout,
    Quit,
    Help,
    Unknown(String),
}

impl InputLine {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return InputLine::Empty;
        }

        let Some(command) = trimmed.strip_prefix('/') else {
            return InputLine::Message(line.trim_end_matches(['\r', '\n']).to_string());
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or("");
        let amount = parts
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap_or(DEFAULT_SCROLL);

        match name {
            "up" => InputLine::Up(amount),
            "down" => InputLine::Down(amount),
            "bottom" => InputLine::Bottom,
            "logout" => InputLine::Logout,
            "quit" | "exit" => InputLine::Quit,
            "help" => InputLine::Help,
            other => InputLine::Unknown(other.to_string()),
        }
    }
}

const HELP: &str = "/up [N]  /down [N]  /bottom  /logout  /quit";

/// Run the watch command
pub async fn run(ctx: &CommandContext, viewport_lines: usize) -> Result<()> {
    ctx.require_session().await?;

    let display_name = ctx
        .controller
        .session()
        .read()
        .await
        .display_name()
        .unwrap_or("User")
        .to_string();

    let (task, mut events) = PollTask::spawn(ctx.controller.clone(), ctx.config.poll_interval());
    let mut screen = Screen::new(display_name, viewport_lines);
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    screen.draw()?;

    let result = loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(PollEvent::Messages(messages)) => {
                    if screen.pane.replace(pretty::message_lines(&messages)) {
                        screen.draw()?;
                    }
                }
                Some(PollEvent::SessionExpired) => {
                    println!("\n{}", "Session expired. Please log in again.".yellow());
                    break Err(ApiError::SessionExpired.into());
                }
                // Already logged by the poll loop
                Some(PollEvent::Failed(_)) => {}
                None => break Ok(()),
            },
            line = input.next_line() => {
                let Some(line) = line? else {
                    break Ok(());
                };

                match InputLine::parse(&line) {
                    InputLine::Empty => screen.draw()?,
                    InputLine::Message(content) => {
                        match ctx.controller.send(&content).await {
                            Ok(()) => {
                                screen.notice = None;
                                task.poll_now();
                            }
                            Err(e) => {
                                log::warn!("Send error: {}", e);
                                screen.notice = Some(ApiError::SendFailure.to_string());
                            }
                        }
                        screen.draw()?;
                    }
                    InputLine::Up(n) => {
                        screen.pane.scroll_up(n);
                        screen.draw()?;
                    }
                    InputLine::Down(n) => {
                        screen.pane.scroll_down(n);
                        screen.draw()?;
                    }
                    InputLine::Bottom => {
                        screen.pane.scroll_to_bottom();
                        screen.draw()?;
                    }
                    InputLine::Help => {
                        screen.notice = Some(HELP.to_string());
                        screen.draw()?;
                    }
                    InputLine::Unknown(name) => {
                        screen.notice = Some(format!("Unknown command '/{}'. {}", name, HELP));
                        screen.draw()?;
                    }
                    InputLine::Logout => {
                        ctx.controller.logout().await?;
                        println!("{} Logged out", "✓".green());
                        break Ok(());
                    }
                    InputLine::Quit => break Ok(()),
                }
            }
        }
    };

    task.cancel();
    task.join().await;
    result
}

/// Terminal state for the chat view
struct Screen {
    display_name: String,
    pane: MessagePane,
    notice: Option<String>,
    interactive: bool,
}

impl Screen {
    fn new(display_name: String, viewport_lines: usize) -> Self {
        Self {
            display_name,
            pane: MessagePane::new(viewport_lines),
            notice: None,
            interactive: std::io::stdout().is_terminal(),
        }
    }

    fn draw(&self) -> Result<()> {
        let mut out = std::io::stdout().lock();

        if self.interactive {
            // Clear screen, cursor home
            write!(out, "\x1b[2J\x1b[H")?;
        }

        writeln!(out, "{} {}", "Chatting as".dimmed(), self.display_name.bold())?;
        writeln!(out, "{}", "─".repeat(40).dimmed())?;

        if self.pane.content_height() == 0 {
            writeln!(out, "{}", "No messages yet.".dimmed())?;
        }
        for line in self.pane.visible() {
            writeln!(out, "{}", line)?;
        }
        if !self.pane.is_at_bottom() {
            writeln!(out, "{}", "-- more below (/bottom) --".dimmed())?;
        }

        if let Some(notice) = &self.notice {
            writeln!(out, "{}", notice.red())?;
        }

        write!(out, "> ")?;
        out.flush()?;
        Ok(())
    }
}
