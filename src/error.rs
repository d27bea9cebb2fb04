//! Error types for terrachat.
//!
//! Every failure the chat client can raise is a variant of [`Error`].  The
//! session controller never lets these escape to the front end; it turns
//! them into bot-authored conversation entries via [`Error::user_message`].

use std::error;
use std::fmt;
use std::sync::Arc;

/// Longest slice of a server body quoted back to the person chatting.
const MAX_QUOTED_BODY_CHARS: usize = 200;

/// The main error type for terrachat.
#[derive(Clone, Debug)]
pub enum Error {
    /// The server answered with a non-success status.
    Transport {
        /// HTTP status code.
        status_code: u16,
        /// Raw response body text.
        body: String,
    },

    /// The request never produced a response.
    Network {
        /// Human-readable error message.
        message: String,
        /// Underlying cause.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// A success response whose body could not be decoded.
    Serialization {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// HTTP client error.
    HttpClient {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// A URL parsing or manipulation error.
    Url {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<url::ParseError>,
    },
}

impl Error {
    /// Creates a new transport error.
    pub fn transport(status_code: u16, body: impl Into<String>) -> Self {
        Error::Transport {
            status_code,
            body: body.into(),
        }
    }

    /// Creates a new network error.
    pub fn network(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Network {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new serialization error.
    pub fn serialization(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Serialization {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new HTTP client error.
    pub fn http_client(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::HttpClient {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new URL error.
    pub fn url(message: impl Into<String>, source: Option<url::ParseError>) -> Self {
        Error::Url {
            message: message.into(),
            source,
        }
    }

    /// Returns true if the server responded with a non-success status.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    /// Returns true if the request could not reach the server.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network { .. })
    }

    /// Returns the status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Transport { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Returns the raw response body associated with this error, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Transport { body, .. } => Some(body),
            _ => None,
        }
    }

    /// A short reason suitable for showing to the person chatting.
    pub fn user_message(&self) -> String {
        match self {
            Error::Transport { status_code, body } => {
                let body = body.trim();
                if body.is_empty() {
                    format!("HTTP error! status: {status_code}")
                } else if body.chars().count() > MAX_QUOTED_BODY_CHARS {
                    let head: String = body.chars().take(MAX_QUOTED_BODY_CHARS).collect();
                    format!("HTTP error! status: {status_code} ({head}...)")
                } else {
                    format!("HTTP error! status: {status_code} ({body})")
                }
            }
            Error::Network { .. } => "could not reach the chat service".to_string(),
            Error::Serialization { .. } => "the chat service sent an unreadable reply".to_string(),
            Error::HttpClient { message, .. } | Error::Url { message, .. } => message.clone(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport { status_code, body } => {
                if body.is_empty() {
                    write!(f, "HTTP error {status_code}")
                } else {
                    write!(f, "HTTP error {status_code}: {body}")
                }
            }
            Error::Network { message, .. } => {
                write!(f, "Network error: {message}")
            }
            Error::Serialization { message, .. } => {
                write!(f, "Serialization error: {message}")
            }
            Error::HttpClient { message, .. } => {
                write!(f, "HTTP client error: {message}")
            }
            Error::Url { message, .. } => {
                write!(f, "URL error: {message}")
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Network { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Serialization { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::HttpClient { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Url { source, .. } => {
                source.as_ref().map(|e| e as &(dyn error::Error + 'static))
            }
            Error::Transport { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::serialization(format!("JSON error: {err}"), Some(Box::new(err)))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::url(format!("URL parse error: {err}"), Some(err))
    }
}

/// A specialized Result type for terrachat operations.
pub type Result<T> = std::result::Result<T, Error>;
