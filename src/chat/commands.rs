//! Slash command parsing for the chat application.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to control the chat session without sending messages
//! to the chat service.

use crate::chat::welcome::POPULAR_QUESTIONS;

/// A parsed chat command.
///
/// These commands control the chat session and are not sent as messages.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Reset the conversation and start a fresh server session.
    Clear,

    /// Query the knowledge base directly.
    Search(String),

    /// Probe the service's health endpoint.
    Health,

    /// Show the current session token.
    Session,

    /// Redraw the whole conversation.
    History,

    /// Send one of the popular questions, by 1-based number.
    Ask(usize),

    /// Show the welcome screen again.
    Welcome,

    /// Display help information.
    Help,

    /// Exit the chat application.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a valid command,
/// or `None` if it should be treated as a regular message.
///
/// # Examples
///
/// ```
/// # use terrachat::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/search terra blade").is_some());
/// assert!(parse_command("How do I enter hardmode?").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "clear" | "new" => ChatCommand::Clear,
        "search" => match argument {
            Some(query) => ChatCommand::Search(query.to_string()),
            None => ChatCommand::Invalid("/search requires a query".to_string()),
        },
        "health" => ChatCommand::Health,
        "session" => ChatCommand::Session,
        "history" => ChatCommand::History,
        "ask" => parse_ask(argument),
        "welcome" => ChatCommand::Welcome,
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        _ => ChatCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

fn parse_ask(argument: Option<&str>) -> ChatCommand {
    let count = POPULAR_QUESTIONS.len();
    let Some(arg) = argument else {
        return ChatCommand::Invalid(format!("/ask requires a question number (1-{count})"));
    };
    match arg.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => ChatCommand::Ask(n),
        _ => ChatCommand::Invalid(format!("/ask expects a number between 1 and {count}")),
    }
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  /clear                 Clear the conversation and start a new session
  /search <query>        Search the Terraria knowledge base
  /health                Check whether the chat service is up
  /session               Show the current session token
  /history               Show the whole conversation
  /ask <n>               Send popular question number n
  /welcome               Show the welcome screen
  /help                  Show this help message
  /quit                  Exit the chat"#
}
