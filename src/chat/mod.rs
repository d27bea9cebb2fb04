//! Chat application module for the Terraria Helper.
//!
//! This module provides the conversation controller and a REPL front end
//! built on top of the terrachat client library:
//!
//! - `session`: the conversation log, loading flag and send lifecycle
//! - `config`: CLI argument parsing and configuration
//! - `commands`: slash command parsing
//! - `render`: terminal output
//! - [`welcome`]: greeting, feature overview and popular questions

mod commands;
mod config;
mod render;
mod session;
pub mod welcome;

pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig};
pub use render::{BOT_LABEL, PlainTextRenderer, Renderer, USER_LABEL};
pub use session::{
    ChatSession, PendingSend, SendOutcome, SendRejected, error_text, welcome_entry,
};
