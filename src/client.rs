use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, RequestBuilder, header};
use serde::de::DeserializeOwned;
use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::client_logger::ClientLogger;
use crate::error::{Error, Result};
use crate::observability::{CLIENT_REQUEST_DURATION, CLIENT_REQUEST_ERRORS, CLIENT_REQUESTS};
use crate::types::{ChatRequest, ChatResponse, HealthStatus, SearchRequest, SearchResult};

/// Environment variable consulted for the service base URL.
pub const API_URL_ENV: &str = "TERRACHAT_API_URL";

/// Base URL used when neither an explicit URL nor the environment supplies one.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// The operations the session controller needs from a chat backend.
///
/// [`ChatClient`] is the HTTP implementation.  Implementors own the session
/// token: it may only change inside a successful `send_message`, or be
/// dropped by `clear_session`.
#[async_trait::async_trait]
pub trait ChatService: Send {
    /// Send one user message and return the service's reply.
    async fn send_message(&mut self, content: &str) -> Result<ChatResponse>;

    /// Forget the session token so the next send starts a fresh session.
    fn clear_session(&mut self);

    /// The session token currently held, if any.
    fn session_id(&self) -> Option<&str>;
}

/// Client for the Terraria Helper chat service.
#[derive(Clone)]
pub struct ChatClient {
    client: ReqwestClient,
    base_url: String,
    timeout: Duration,
    session_id: Option<String>,
    logger: Option<Arc<dyn ClientLogger>>,
}

impl ChatClient {
    /// Create a new chat client.
    ///
    /// The base URL can be provided directly or read from the
    /// `TERRACHAT_API_URL` environment variable; otherwise
    /// `http://localhost:8000` is used.
    pub fn new(base_url: Option<String>) -> Result<Self> {
        Self::with_options(base_url, None)
    }

    /// Create a new client with custom settings.
    pub fn with_options(base_url: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = resolve_base_url(base_url, env::var(API_URL_ENV).ok());
        let base_url = normalize_base_url(&base_url)?;

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .default_headers(default_headers())
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        Ok(Self {
            client,
            base_url,
            timeout,
            session_id: None,
            logger: None,
        })
    }

    /// Attach a logger that observes every request and reply.
    pub fn with_logger(mut self, logger: Arc<dyn ClientLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// The normalized base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The session token currently held, if any.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Drop the session token.  Calling this repeatedly is harmless.
    pub fn clear_session(&mut self) {
        self.session_id = None;
    }

    /// Send a chat message, carrying the held session token.
    ///
    /// On success the returned session token becomes sticky for every later
    /// call.  A missing, `null` or empty token in the reply leaves the held
    /// one untouched.
    pub async fn send_message(&mut self, content: &str) -> Result<ChatResponse> {
        let request = ChatRequest::new(content).with_session_id(self.session_id.clone());
        if let Some(logger) = &self.logger {
            logger.log_chat_request(&request);
        }

        let builder = self.client.post(self.endpoint("chat")).json(&request);
        let response: ChatResponse = self.execute("chat", builder).await?;

        if let Some(id) = response.session_token() {
            self.session_id = Some(id.to_string());
        }
        if let Some(logger) = &self.logger {
            logger.log_chat_response(&response);
        }
        Ok(response)
    }

    /// Search the service's knowledge base.  No session token is involved.
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        self.search_with(SearchRequest::new(query)).await
    }

    /// Search with a fully specified request.
    pub async fn search_with(&self, request: SearchRequest) -> Result<SearchResult> {
        let builder = self.client.post(self.endpoint("search")).json(&request);
        let result: SearchResult = self.execute("search", builder).await?;
        if let Some(logger) = &self.logger {
            logger.log_search_result(&result);
        }
        Ok(result)
    }

    /// Liveness probe.
    pub async fn health_check(&self) -> Result<HealthStatus> {
        let builder = self.client.get(self.endpoint("health"));
        self.execute("health", builder).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Send the request and decode a success body, recording metrics.
    async fn execute<T: DeserializeOwned>(&self, path: &str, builder: RequestBuilder) -> Result<T> {
        CLIENT_REQUESTS.click();
        let start = Instant::now();
        let result = self.execute_inner(builder).await;
        CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());

        if let Err(err) = &result {
            CLIENT_REQUEST_ERRORS.click();
            if let Some(logger) = &self.logger {
                logger.log_error(path, err);
            }
        }
        result
    }

    async fn execute_inner<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::network(
                    format!(
                        "Request timed out after {} seconds: {}",
                        self.timeout.as_secs_f64(),
                        e
                    ),
                    Some(Box::new(e)),
                )
            } else if e.is_builder() {
                Error::http_client(format!("Invalid request: {}", e), Some(Box::new(e)))
            } else {
                Error::network(format!("Request failed: {}", e), Some(Box::new(e)))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status.as_u16(), response.text().await));
        }

        response.json::<T>().await.map_err(|e| {
            Error::serialization(
                format!("Failed to parse response: {}", e),
                Some(Box::new(e)),
            )
        })
    }
}

impl fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("session_id", &self.session_id)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

#[async_trait::async_trait]
impl ChatService for ChatClient {
    async fn send_message(&mut self, content: &str) -> Result<ChatResponse> {
        ChatClient::send_message(self, content).await
    }

    fn clear_session(&mut self) {
        ChatClient::clear_session(self);
    }

    fn session_id(&self) -> Option<&str> {
        ChatClient::session_id(self)
    }
}

/// Build the error for a non-success status.  The status survives even when
/// the body cannot be read.
fn status_error<E>(status_code: u16, body: std::result::Result<String, E>) -> Error {
    Error::transport(status_code, body.unwrap_or_default())
}

/// Create default headers for service requests.
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Pick the base URL: explicit beats environment beats the default.
pub fn resolve_base_url(explicit: Option<String>, from_env: Option<String>) -> String {
    explicit
        .filter(|s| !s.trim().is_empty())
        .or_else(|| from_env.filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Strip trailing slashes and check the URL is usable as an http(s) base.
pub fn normalize_base_url(base_url: &str) -> Result<String> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let parsed = url::Url::parse(trimmed)?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(Error::url(
            format!("unsupported scheme {other:?} in base URL {trimmed:?}"),
            None,
        )),
    }
}
