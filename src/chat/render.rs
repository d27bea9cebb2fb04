//! Output rendering for the chat application.
//!
//! This module provides a trait-based rendering abstraction that allows
//! for different output styles. The default implementation uses ANSI
//! escape codes for the typing placeholder and entry headers.

use std::io::{self, Stdout, Write};

use crate::types::{Message, Sender};
use crate::utils::time::format_clock;

/// Display name for bot-authored entries.
pub const BOT_LABEL: &str = "Terraria Expert";

/// Display name for user-authored entries.
pub const USER_LABEL: &str = "You";

/// ANSI escape code for dim text (used for the typing placeholder).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code for italic text (used for the typing placeholder).
const ANSI_ITALIC: &str = "\x1b[3m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for cyan text (used for the bot label).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for green text (used for the user label).
const ANSI_GREEN: &str = "\x1b[32m";

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// Return to column zero and erase the line.
const ANSI_CLEAR_LINE: &str = "\r\x1b[2K";

/// Trait for rendering the conversation thread.
///
/// The session controller drives a renderer while a send is in flight.  The
/// user's own entry is not echoed back; front ends that redraw the whole
/// thread call [`Renderer::print_message`] for every entry themselves.
pub trait Renderer: Send {
    /// Print one finished conversation entry.
    fn print_message(&mut self, message: &Message);

    /// Show the typing placeholder while a reply is awaited.
    fn start_typing(&mut self, placeholder: &Message);

    /// Remove the typing placeholder.
    fn finish_typing(&mut self);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);
}

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
    typing: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new PlainTextRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
            typing: false,
        }
    }

    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }

    fn header(&self, message: &Message) -> String {
        let (label, color) = match message.sender {
            Sender::User => (USER_LABEL, ANSI_GREEN),
            Sender::Bot => (BOT_LABEL, ANSI_CYAN),
        };
        let clock = format_clock(&message.timestamp);
        if self.use_color {
            format!("{color}{label}{ANSI_RESET} {ANSI_DIM}{clock}{ANSI_RESET}")
        } else {
            format!("{label} [{clock}]")
        }
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_message(&mut self, message: &Message) {
        if message.is_typing {
            self.start_typing(message);
            println!();
            self.typing = false;
            return;
        }
        println!("{}", self.header(message));
        for line in message.content.lines() {
            println!("  {line}");
        }
        println!();
        self.flush();
    }

    fn start_typing(&mut self, placeholder: &Message) {
        if self.use_color {
            print!(
                "{ANSI_DIM}{ANSI_ITALIC}{BOT_LABEL}: {}{ANSI_RESET}",
                placeholder.content
            );
        } else {
            print!("{BOT_LABEL}: {}", placeholder.content);
        }
        self.typing = true;
        self.flush();
    }

    fn finish_typing(&mut self) {
        if !self.typing {
            return;
        }
        if self.use_color {
            print!("{ANSI_CLEAR_LINE}");
        } else {
            println!();
        }
        self.typing = false;
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        self.finish_typing();
        if self.use_color {
            eprintln!("{ANSI_RED}Error: {error}{ANSI_RESET}");
        } else {
            eprintln!("Error: {error}");
        }
    }

    fn print_info(&mut self, info: &str) {
        self.finish_typing();
        println!("{info}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageId;
    use time::macros::datetime;

    #[test]
    fn renderer_default_has_color() {
        let renderer = PlainTextRenderer::new();
        assert!(renderer.use_color);
    }

    #[test]
    fn renderer_without_color() {
        let renderer = PlainTextRenderer::with_color(false);
        assert!(!renderer.use_color);
    }

    #[test]
    fn plain_headers() {
        let renderer = PlainTextRenderer::with_color(false);
        let mut msg = Message::bot(MessageId::WELCOME, "hi");
        msg.timestamp = datetime!(2024-01-01 9:07 UTC);
        assert_eq!(renderer.header(&msg), "Terraria Expert [09:07]");

        let mut msg = Message::user(MessageId::WELCOME, "hi");
        msg.timestamp = datetime!(2024-01-01 21:30 UTC);
        assert_eq!(renderer.header(&msg), "You [21:30]");
    }

    #[test]
    fn finish_typing_without_start_is_noop() {
        let mut renderer = PlainTextRenderer::with_color(false);
        renderer.finish_typing();
        assert!(!renderer.typing);
    }
}
