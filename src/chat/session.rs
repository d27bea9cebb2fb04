//! Core chat session management.
//!
//! This module provides the `ChatSession` struct which owns the conversation
//! log and the loading flag, and mediates between front-end events and the
//! chat service.
//!
//! A send moves the session from idle to sending and back:
//!
//! 1. the user entry and the typing placeholder are appended and the session
//!    is marked as loading;
//! 2. the service is called with the raw text;
//! 3. the placeholder is removed and exactly one bot entry, the reply or a
//!    description of the failure, is appended.
//!
//! Only one send may be in flight.  [`ChatSession::send_message`] takes
//! `&mut self` for its whole duration, and [`ChatSession::begin_send`] refuses
//! to start while the session is loading, so two sends can never share the
//! placeholder slot.

use std::fmt;

use crate::chat::render::Renderer;
use crate::chat::welcome::WELCOME_MESSAGE;
use crate::client::{ChatClient, ChatService};
use crate::error::{Error, Result};
use crate::observability::{SESSION_CLEARS, SESSION_SEND_FAILURES, SESSION_SENDS, SESSION_SKIPPED};
use crate::types::{ChatResponse, Message, MessageId, MessageIdGenerator};

/// How a call to [`ChatSession::send_message`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The input was blank; nothing changed.
    Skipped,
    /// Another send was still in flight; nothing changed.
    Busy,
    /// The service replied and the reply was appended.
    Replied,
    /// The call failed and an error entry was appended.
    Failed,
}

/// Why [`ChatSession::begin_send`] declined to start a send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejected {
    /// The input was empty or whitespace only.
    Empty,
    /// A send is already awaiting its reply.
    InFlight,
}

impl From<SendRejected> for SendOutcome {
    fn from(rejected: SendRejected) -> Self {
        match rejected {
            SendRejected::Empty => SendOutcome::Skipped,
            SendRejected::InFlight => SendOutcome::Busy,
        }
    }
}

impl fmt::Display for SendRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendRejected::Empty => write!(f, "message is empty"),
            SendRejected::InFlight => write!(f, "still waiting for the previous reply"),
        }
    }
}

/// A send that has been started with [`ChatSession::begin_send`] and must be
/// finished with [`ChatSession::complete_send`].
#[derive(Debug)]
#[must_use = "a started send leaves the session loading until it is completed"]
pub struct PendingSend {
    content: String,
    user_id: MessageId,
    epoch: u64,
}

impl PendingSend {
    /// The raw text to hand to the service.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Id of the user entry this send appended.
    pub fn user_id(&self) -> MessageId {
        self.user_id
    }
}

/// A chat session that manages conversation state and service interactions.
pub struct ChatSession<S: ChatService = ChatClient> {
    service: S,
    messages: Vec<Message>,
    loading: bool,
    ids: MessageIdGenerator,
    epoch: u64,
}

impl<S: ChatService> ChatSession<S> {
    /// Creates a new chat session that starts with the welcome entry.
    pub fn new(service: S) -> Self {
        Self {
            service,
            messages: vec![welcome_entry()],
            loading: false,
            ids: MessageIdGenerator::new(),
            epoch: 0,
        }
    }

    /// Sends a user message and records the outcome in the log.
    ///
    /// Blank input is ignored.  Failures never escape: they become a bot
    /// entry describing what went wrong.
    pub async fn send_message(&mut self, content: &str, renderer: &mut dyn Renderer) -> SendOutcome {
        let pending = match self.begin_send(content) {
            Ok(pending) => pending,
            Err(rejected) => return rejected.into(),
        };
        if let Some(placeholder) = self.messages.last() {
            renderer.start_typing(placeholder);
        }

        let result = self.service.send_message(pending.content()).await;
        renderer.finish_typing();

        let outcome = if result.is_ok() {
            SendOutcome::Replied
        } else {
            SendOutcome::Failed
        };
        if let Some(entry) = self.complete_send(pending, result) {
            renderer.print_message(entry);
        }
        outcome
    }

    /// Appends the user entry and the typing placeholder and marks the
    /// session as loading.
    ///
    /// The caller is responsible for calling the service with
    /// [`PendingSend::content`] and handing the result to
    /// [`ChatSession::complete_send`].
    pub fn begin_send(&mut self, content: &str) -> std::result::Result<PendingSend, SendRejected> {
        if content.trim().is_empty() {
            SESSION_SKIPPED.click();
            return Err(SendRejected::Empty);
        }
        if self.loading {
            return Err(SendRejected::InFlight);
        }
        SESSION_SENDS.click();

        let user_id = self.ids.next_id();
        self.messages.push(Message::user(user_id, content));
        self.messages.push(Message::typing());
        self.loading = true;

        Ok(PendingSend {
            content: content.to_string(),
            user_id,
            epoch: self.epoch,
        })
    }

    /// Replaces the typing placeholder with the outcome of a send.
    ///
    /// Returns the appended entry, or `None` when the conversation was
    /// cleared after the send began; such results are discarded.
    pub fn complete_send(
        &mut self,
        pending: PendingSend,
        result: Result<ChatResponse>,
    ) -> Option<&Message> {
        if pending.epoch != self.epoch {
            return None;
        }
        self.messages.retain(|message| !message.id.is_typing());
        self.loading = false;

        let id = self.ids.next_id();
        let entry = match result {
            Ok(response) => Message::bot(id, response.response),
            Err(err) => {
                SESSION_SEND_FAILURES.click();
                Message::bot(id, error_text(&err))
            }
        };
        self.messages.push(entry);
        self.messages.last()
    }

    /// Resets the log to the welcome entry and drops the session token.
    pub fn clear_messages(&mut self) {
        SESSION_CLEARS.click();
        self.messages = vec![welcome_entry()];
        self.loading = false;
        self.epoch += 1;
        self.service.clear_session();
    }

    /// The conversation log, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the number of entries in the conversation.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Returns true while a send awaits its reply.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The session token the service currently holds.
    pub fn session_id(&self) -> Option<&str> {
        self.service.session_id()
    }

    /// The underlying chat service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// The underlying chat service, mutably.
    pub fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }
}

/// The entry every conversation begins with.
pub fn welcome_entry() -> Message {
    Message::bot(MessageId::WELCOME, WELCOME_MESSAGE)
}

/// The bot entry shown in place of a reply when a send fails.
pub fn error_text(err: &Error) -> String {
    format!(
        "Sorry, I encountered an error: {}.\n\nPlease try again later.",
        err.user_message()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sender;
    use std::collections::VecDeque;

    /// Replays canned results and tracks the session token like the HTTP client.
    #[derive(Default)]
    struct ScriptedService {
        replies: VecDeque<Result<ChatResponse>>,
        calls: Vec<(String, Option<String>)>,
        session_id: Option<String>,
    }

    impl ScriptedService {
        fn with(replies: Vec<Result<ChatResponse>>) -> Self {
            Self {
                replies: replies.into(),
                ..Self::default()
            }
        }
    }

    #[async_trait::async_trait]
    impl ChatService for ScriptedService {
        async fn send_message(&mut self, content: &str) -> Result<ChatResponse> {
            self.calls
                .push((content.to_string(), self.session_id.clone()));
            let reply = self
                .replies
                .pop_front()
                .unwrap_or_else(|| Err(Error::network("script exhausted", None)));
            if let Some(id) = reply.as_ref().ok().and_then(ChatResponse::session_token) {
                self.session_id = Some(id.to_string());
            }
            reply
        }

        fn clear_session(&mut self) {
            self.session_id = None;
        }

        fn session_id(&self) -> Option<&str> {
            self.session_id.as_deref()
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        events: Vec<String>,
    }

    impl Renderer for RecordingRenderer {
        fn print_message(&mut self, message: &Message) {
            self.events.push(format!("message:{}", message.content));
        }

        fn start_typing(&mut self, placeholder: &Message) {
            assert!(placeholder.is_typing);
            self.events.push("typing".to_string());
        }

        fn finish_typing(&mut self) {
            self.events.push("done".to_string());
        }

        fn print_error(&mut self, error: &str) {
            self.events.push(format!("error:{error}"));
        }

        fn print_info(&mut self, info: &str) {
            self.events.push(format!("info:{info}"));
        }
    }

    fn reply(text: &str, session_id: &str) -> Result<ChatResponse> {
        Ok(ChatResponse::new(text, session_id, "2024-01-01T00:00:00Z"))
    }

    #[test]
    fn new_session_has_welcome() {
        let session = ChatSession::new(ScriptedService::default());
        assert_eq!(session.message_count(), 1);
        assert_eq!(session.messages()[0].id, MessageId::WELCOME);
        assert_eq!(session.messages()[0].content, WELCOME_MESSAGE);
        assert_eq!(session.messages()[0].sender, Sender::Bot);
        assert!(!session.is_loading());
        assert!(session.session_id().is_none());
    }

    #[tokio::test]
    async fn successful_send_appends_user_then_reply() {
        let service = ScriptedService::with(vec![reply("Strategy...", "abc123")]);
        let mut session = ChatSession::new(service);
        let mut renderer = RecordingRenderer::default();

        let outcome = session
            .send_message("How do I defeat the Eye of Cthulhu?", &mut renderer)
            .await;

        assert_eq!(outcome, SendOutcome::Replied);
        assert_eq!(session.message_count(), 3);
        let user = &session.messages()[1];
        assert_eq!(user.sender, Sender::User);
        assert_eq!(user.content, "How do I defeat the Eye of Cthulhu?");
        let bot = &session.messages()[2];
        assert_eq!(bot.sender, Sender::Bot);
        assert_eq!(bot.content, "Strategy...");
        assert!(session.messages().iter().all(|m| !m.is_typing));
        assert!(!session.is_loading());
        assert_eq!(session.session_id(), Some("abc123"));
        assert_eq!(
            renderer.events,
            vec!["typing", "done", "message:Strategy..."]
        );
    }

    #[tokio::test]
    async fn failed_send_becomes_error_entry() {
        let service = ScriptedService::with(vec![Err(Error::transport(500, "boom"))]);
        let mut session = ChatSession::new(service);
        let mut renderer = RecordingRenderer::default();

        let outcome = session.send_message("hello", &mut renderer).await;

        assert_eq!(outcome, SendOutcome::Failed);
        assert_eq!(session.message_count(), 3);
        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert!(last.content.contains("error"));
        assert!(last.content.contains("500"));
        assert!(last.content.contains("boom"));
        assert!(!last.is_typing);
        assert!(!session.is_loading());
        assert!(session.session_id().is_none());
    }

    #[tokio::test]
    async fn network_failure_becomes_error_entry() {
        let service = ScriptedService::with(vec![Err(Error::network("refused", None))]);
        let mut session = ChatSession::new(service);
        let mut renderer = RecordingRenderer::default();

        let outcome = session.send_message("hello", &mut renderer).await;

        assert_eq!(outcome, SendOutcome::Failed);
        let last = session.messages().last().unwrap();
        assert!(last.content.starts_with("Sorry, I encountered an error"));
        assert!(last.content.contains("could not reach the chat service"));
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let mut session = ChatSession::new(ScriptedService::default());
        let mut renderer = RecordingRenderer::default();

        for input in ["", "   ", "\n\t "] {
            let outcome = session.send_message(input, &mut renderer).await;
            assert_eq!(outcome, SendOutcome::Skipped);
        }

        assert_eq!(session.message_count(), 1);
        assert!(session.service().calls.is_empty());
        assert!(renderer.events.is_empty());
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn raw_text_is_sent_untrimmed() {
        let service = ScriptedService::with(vec![reply("ok", "s1")]);
        let mut session = ChatSession::new(service);
        let mut renderer = RecordingRenderer::default();

        session.send_message("  spaced  ", &mut renderer).await;

        assert_eq!(session.service().calls[0].0, "  spaced  ");
        assert_eq!(session.messages()[1].content, "  spaced  ");
    }

    #[tokio::test]
    async fn session_token_is_sticky() {
        let service = ScriptedService::with(vec![
            reply("one", "abc123"),
            reply("two", ""),
            reply("three", "abc123"),
            reply("four", "def456"),
        ]);
        let mut session = ChatSession::new(service);
        let mut renderer = RecordingRenderer::default();

        assert!(session.session_id().is_none());
        session.send_message("1", &mut renderer).await;
        assert_eq!(session.session_id(), Some("abc123"));
        session.send_message("2", &mut renderer).await;
        assert_eq!(session.session_id(), Some("abc123"));
        session.send_message("3", &mut renderer).await;
        assert_eq!(session.session_id(), Some("abc123"));
        session.send_message("4", &mut renderer).await;
        assert_eq!(session.session_id(), Some("def456"));

        let sent: Vec<Option<&str>> = session
            .service()
            .calls
            .iter()
            .map(|(_, token)| token.as_deref())
            .collect();
        assert_eq!(
            sent,
            vec![None, Some("abc123"), Some("abc123"), Some("abc123")]
        );
    }

    #[tokio::test]
    async fn clear_resets_log_and_session() {
        let service = ScriptedService::with(vec![reply("Strategy...", "abc123")]);
        let mut session = ChatSession::new(service);
        let mut renderer = RecordingRenderer::default();
        session.send_message("hi", &mut renderer).await;
        assert_eq!(session.message_count(), 3);

        session.clear_messages();
        assert_eq!(session.message_count(), 1);
        assert_eq!(session.messages()[0].content, WELCOME_MESSAGE);
        assert!(session.session_id().is_none());

        session.clear_messages();
        assert_eq!(session.message_count(), 1);
        assert!(session.session_id().is_none());
    }

    #[test]
    fn second_begin_is_rejected_while_in_flight() {
        let mut session = ChatSession::new(ScriptedService::default());
        let first = session.begin_send("first").unwrap();
        assert!(session.is_loading());
        assert_eq!(session.message_count(), 3);
        assert!(session.messages()[2].is_typing);

        assert_eq!(
            session.begin_send("second").unwrap_err(),
            SendRejected::InFlight
        );
        assert_eq!(session.message_count(), 3);
        assert_eq!(
            session.messages().iter().filter(|m| m.is_typing).count(),
            1
        );

        let entry = session
            .complete_send(first, reply("answer", "s"))
            .unwrap();
        assert_eq!(entry.content, "answer");
        assert!(!session.is_loading());
        assert!(session.begin_send("second").is_ok());
    }

    #[test]
    fn completion_after_clear_is_discarded() {
        let mut session = ChatSession::new(ScriptedService::default());
        let pending = session.begin_send("question").unwrap();
        session.clear_messages();
        assert!(!session.is_loading());

        assert!(session.complete_send(pending, reply("late", "s")).is_none());
        assert_eq!(session.message_count(), 1);
        assert_eq!(session.messages()[0].id, MessageId::WELCOME);
    }

    #[tokio::test]
    async fn ids_are_unique_and_ordered() {
        let service = ScriptedService::with(vec![
            reply("a", "s"),
            Err(Error::transport(502, "")),
            reply("c", "s"),
        ]);
        let mut session = ChatSession::new(service);
        let mut renderer = RecordingRenderer::default();
        for text in ["1", "2", "3"] {
            session.send_message(text, &mut renderer).await;
        }

        let ids: Vec<MessageId> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), 7);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(ids.iter().all(|id| !id.is_typing()));
        let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![
                Sender::Bot,
                Sender::User,
                Sender::Bot,
                Sender::User,
                Sender::Bot,
                Sender::User,
                Sender::Bot
            ]
        );
    }

    #[test]
    fn rejection_maps_to_outcome() {
        assert_eq!(SendOutcome::from(SendRejected::Empty), SendOutcome::Skipped);
        assert_eq!(SendOutcome::from(SendRejected::InFlight), SendOutcome::Busy);
    }

    #[test]
    fn error_text_wording() {
        let text = error_text(&Error::transport(500, "boom"));
        assert_eq!(
            text,
            "Sorry, I encountered an error: HTTP error! status: 500 (boom).\n\nPlease try again later."
        );
    }
}
