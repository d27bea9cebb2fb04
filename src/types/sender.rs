use std::fmt;

use serde::{Deserialize, Serialize};

/// Who authored a conversation entry.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person chatting.
    User,
    /// The remote assistant, or the controller speaking on its behalf.
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn sender_wire_names() {
        assert_eq!(to_value(Sender::User).unwrap(), json!("user"));
        assert_eq!(to_value(Sender::Bot).unwrap(), json!("bot"));
        assert_eq!(Sender::Bot.to_string(), "bot");
    }
}
