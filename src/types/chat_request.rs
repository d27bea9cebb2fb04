use serde::{Deserialize, Serialize};

/// Body of a `POST /chat` request.
///
/// `session_id` is always serialized; `null` asks the service to mint a new
/// session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// The text the user typed, unmodified.
    pub content: String,

    /// The session token from a previous reply, if any.
    pub session_id: Option<String>,
}

impl ChatRequest {
    /// Create a new `ChatRequest` with no session.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            session_id: None,
        }
    }

    /// Attach a session token.
    pub fn with_session_id(mut self, session_id: Option<String>) -> Self {
        self.session_id = session_id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn fresh_session_sends_null() {
        let request = ChatRequest::new("How do I enter hardmode?");
        assert_eq!(
            to_value(&request).unwrap(),
            json!({
                "content": "How do I enter hardmode?",
                "session_id": null
            })
        );
    }

    #[test]
    fn sticky_session_is_sent() {
        let request = ChatRequest::new("and then?").with_session_id(Some("abc123".to_string()));
        assert_eq!(
            to_value(&request).unwrap(),
            json!({
                "content": "and then?",
                "session_id": "abc123"
            })
        );
    }
}
