use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a conversation entry.
///
/// Ids handed out by [`MessageIdGenerator`] are strictly increasing within a
/// conversation.  Two values are reserved: [`MessageId::WELCOME`] for the
/// greeting and [`MessageId::TYPING`] for the typing placeholder.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    /// The fixed id of the welcome entry.
    pub const WELCOME: MessageId = MessageId(0);

    /// The sentinel id shared by every typing placeholder.
    pub const TYPING: MessageId = MessageId(u64::MAX);

    /// Returns true for the typing-placeholder sentinel.
    pub fn is_typing(self) -> bool {
        self == Self::TYPING
    }

    /// The raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_typing() {
            write!(f, "typing")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Hands out fresh [`MessageId`]s from a monotonic counter.
#[derive(Debug, Clone)]
pub struct MessageIdGenerator {
    next: u64,
}

impl MessageIdGenerator {
    /// Creates a generator whose first id follows [`MessageId::WELCOME`].
    pub fn new() -> Self {
        Self {
            next: MessageId::WELCOME.0 + 1,
        }
    }

    /// Returns the next unused id.
    pub fn next_id(&mut self) -> MessageId {
        let id = MessageId(self.next);
        debug_assert!(!id.is_typing());
        self.next += 1;
        id
    }
}

impl Default for MessageIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ids = MessageIdGenerator::new();
        let first = ids.next_id();
        let second = ids.next_id();
        let third = ids.next_id();
        assert!(MessageId::WELCOME < first);
        assert!(first < second && second < third);
        assert!(!first.is_typing());
    }

    #[test]
    fn sentinel_is_distinct() {
        let mut ids = MessageIdGenerator::new();
        for _ in 0..1000 {
            assert_ne!(ids.next_id(), MessageId::TYPING);
        }
        assert!(MessageId::TYPING.is_typing());
        assert_eq!(MessageId::TYPING.to_string(), "typing");
        assert_eq!(MessageId::WELCOME.to_string(), "0");
    }
}
