use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::utils::time::parse_iso8601;

/// Body of a successful `POST /chat` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    /// The assistant's reply.
    pub response: String,

    /// The session token the service associated with this exchange.
    #[serde(default)]
    pub session_id: Option<String>,

    /// Server-side time of the reply, as sent.
    #[serde(default)]
    pub timestamp: String,
}

impl ChatResponse {
    /// Create a new `ChatResponse`.
    pub fn new(
        response: impl Into<String>,
        session_id: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            response: response.into(),
            session_id: Some(session_id.into()),
            timestamp: timestamp.into(),
        }
    }

    /// The session token carried by this reply, if it carries a usable one.
    ///
    /// A missing, `null` or empty token all read as `None`.
    pub fn session_token(&self) -> Option<&str> {
        self.session_id.as_deref().filter(|id| !id.is_empty())
    }

    /// The server's timestamp, when it parses as ISO-8601.
    ///
    /// This is informational only; conversation entries are stamped with the
    /// local clock.
    pub fn server_time(&self) -> Option<OffsetDateTime> {
        parse_iso8601(&self.timestamp)
    }
}
