use serde::Serialize;
use time::OffsetDateTime;

use crate::types::{MessageId, Sender};

/// Text shown in the typing placeholder.
pub const TYPING_TEXT: &str = "Thinking...";

/// One entry in the conversation log.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Message {
    /// Identifier, unique within the conversation.
    pub id: MessageId,

    /// The text of the entry.
    pub content: String,

    /// Who authored the entry.
    pub sender: Sender,

    /// Local time the entry was created.
    #[serde(with = "crate::utils::time")]
    pub timestamp: OffsetDateTime,

    /// True only for the transient "awaiting reply" placeholder.
    pub is_typing: bool,
}

impl Message {
    /// Create an entry authored by the user, stamped now.
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self::new(id, content, Sender::User)
    }

    /// Create an entry authored by the bot, stamped now.
    pub fn bot(id: MessageId, content: impl Into<String>) -> Self {
        Self::new(id, content, Sender::Bot)
    }

    /// Create the typing placeholder.
    pub fn typing() -> Self {
        Self {
            is_typing: true,
            ..Self::new(MessageId::TYPING, TYPING_TEXT, Sender::Bot)
        }
    }

    fn new(id: MessageId, content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id,
            content: content.into(),
            sender,
            timestamp: OffsetDateTime::now_utc(),
            is_typing: false,
        }
    }
}
