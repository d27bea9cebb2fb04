//! Logging trait for chat client operations.
//!
//! This module provides the [`ClientLogger`] trait that allows users to capture
//! and log all traffic passing through the [`ChatClient`](crate::ChatClient).

use crate::{ChatRequest, ChatResponse, Error, SearchResult};

/// A trait for logging chat client operations.
///
/// Implement this trait to record every exchange with the chat service.
///
/// # Example
///
/// ```rust,ignore
/// use terrachat::{ChatRequest, ChatResponse, ClientLogger, Error, SearchResult};
/// use std::io::Write;
/// use std::sync::Mutex;
///
/// struct FileLogger {
///     file: Mutex<std::fs::File>,
/// }
///
/// impl ClientLogger for FileLogger {
///     fn log_chat_request(&self, request: &ChatRequest) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "chat: {}", serde_json::to_string(request).unwrap()).unwrap();
///     }
///
///     fn log_chat_response(&self, response: &ChatResponse) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "reply: {}", serde_json::to_string(response).unwrap()).unwrap();
///     }
///
///     fn log_search_result(&self, result: &SearchResult) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "search: {}", serde_json::to_string(result).unwrap()).unwrap();
///     }
///
///     fn log_error(&self, endpoint: &str, error: &Error) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "{endpoint} failed: {error}").unwrap();
///     }
/// }
/// ```
pub trait ClientLogger: Send + Sync {
    /// Log an outgoing chat request, including the session token it carries.
    fn log_chat_request(&self, request: &ChatRequest);

    /// Log a successful chat reply.
    fn log_chat_response(&self, response: &ChatResponse);

    /// Log a successful search result.
    fn log_search_result(&self, result: &SearchResult);

    /// Log a failed call.
    ///
    /// `endpoint` is the path that was requested, e.g. `"chat"`.
    fn log_error(&self, endpoint: &str, error: &Error);
}
