//! Chat Widget State
//!
//! [`ChatState`] holds the conversation, the input box and the pending flag.
//! Transitions are plain methods (or [`ChatState::apply`] for event-style
//! callers) so they can be tested without a renderer. [`ChatSession`] drives
//! a full exchange against a [`ChatTransport`].

use std::cell::{Ref, RefCell};

use crate::config::ChatConfig;
use crate::message::{ChatMessage, ChatRequest};
use crate::transport::{self, ChatTransport};

/// Inputs to the chat reducer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatEvent {
    /// Input box changed
    Input(String),
    /// Send button or Enter
    Submit,
    /// Assistant message arrived (reply or fallback)
    Reply(ChatMessage),
    /// Exchange finished, successfully or not
    Settled,
}

/// Conversation state owned by one widget
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    input: String,
    pending: bool,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the configured greeting, if any
    pub fn from_config(config: &ChatConfig) -> Self {
        let mut state = Self::new();
        if let Some(greeting) = &config.greeting {
            state.messages.push(ChatMessage::assistant(greeting.clone()));
        }
        state
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether the send button should be enabled
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.input.trim().is_empty()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Accept the current input as a user message.
    ///
    /// Returns the request to send, or `None` when the input is blank or a
    /// request is already in flight. History is captured before the new
    /// message is appended.
    pub fn submit(&mut self) -> Option<ChatRequest> {
        if !self.can_submit() {
            return None;
        }

        let message = std::mem::take(&mut self.input);
        let request = ChatRequest {
            message: message.clone(),
            history: self.messages.clone(),
        };

        self.messages.push(ChatMessage::user(message));
        self.pending = true;
        tracing::debug!(history = request.history.len(), "chat message submitted");

        Some(request)
    }

    pub fn push_reply(&mut self, reply: ChatMessage) {
        self.messages.push(reply);
    }

    /// Clear the pending flag
    pub fn settle(&mut self) {
        self.pending = false;
    }

    /// Reducer form of the methods above
    pub fn apply(&mut self, event: ChatEvent) -> Option<ChatRequest> {
        match event {
            ChatEvent::Input(text) => self.set_input(text),
            ChatEvent::Submit => return self.submit(),
            ChatEvent::Reply(reply) => self.push_reply(reply),
            ChatEvent::Settled => self.settle(),
        }
        None
    }
}

/// Runs its closure when dropped.
///
/// Hold one across an exchange so the pending flag is cleared however the
/// exchange ends, including when the future is dropped mid-flight.
#[must_use = "the closure runs when the guard is dropped"]
pub struct SettleGuard<F: FnOnce()> {
    on_settle: Option<F>,
}

impl<F: FnOnce()> SettleGuard<F> {
    pub const fn new(on_settle: F) -> Self {
        Self {
            on_settle: Some(on_settle),
        }
    }
}

impl<F: FnOnce()> Drop for SettleGuard<F> {
    fn drop(&mut self) {
        if let Some(on_settle) = self.on_settle.take() {
            on_settle();
        }
    }
}

/// A chat state bound to a transport
pub struct ChatSession<T> {
    state: RefCell<ChatState>,
    transport: T,
    config: ChatConfig,
}

impl<T: ChatTransport> ChatSession<T> {
    pub fn new(transport: T, config: ChatConfig) -> Self {
        Self {
            state: RefCell::new(ChatState::from_config(&config)),
            transport,
            config,
        }
    }

    pub fn state(&self) -> Ref<'_, ChatState> {
        self.state.borrow()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.state.borrow_mut().set_input(text);
    }

    /// Submit the current input and wait for the reply.
    ///
    /// Returns `false` if the submission was ignored.
    pub async fn submit(&self) -> bool {
        let Some(request) = self.state.borrow_mut().submit() else {
            return false;
        };

        let _settle = SettleGuard::new(|| self.state.borrow_mut().settle());
        let reply = transport::exchange(&self.transport, &request, &self.config).await;
        self.state.borrow_mut().push_reply(reply);
        true
    }

    /// Type `text` into the input box and submit it
    pub async fn send(&self, text: &str) -> bool {
        self.set_input(text);
        self.submit().await
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::config::{FALLBACK_REPLY, GREETING};
    use crate::transport::MockTransport;

    fn quiet() -> ChatConfig {
        ChatConfig::default().without_greeting()
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut state = ChatState::new();
        for blank in ["", "   ", "\n\t"] {
            state.set_input(blank);
            assert!(state.submit().is_none());
        }
        assert!(state.messages().is_empty());
        assert!(!state.is_pending());
    }

    #[test]
    fn test_submit_appends_and_clears_input() {
        let mut state = ChatState::from_config(&ChatConfig::default());
        state.set_input("hello");

        let request = state.submit().unwrap();

        assert_eq!(request.message, "hello");
        assert_eq!(request.history, vec![ChatMessage::assistant(GREETING)]);
        assert_eq!(state.messages().last(), Some(&ChatMessage::user("hello")));
        assert_eq!(state.input(), "");
        assert!(state.is_pending());
    }

    #[test]
    fn test_submit_while_pending_ignored() {
        let mut state = ChatState::new();
        state.set_input("first");
        assert!(state.submit().is_some());

        state.set_input("second");
        assert!(!state.can_submit());
        assert!(state.submit().is_none());
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.input(), "second");
    }

    #[test]
    fn test_reducer_round() {
        let mut state = ChatState::new();
        assert!(state.apply(ChatEvent::Input("hello".into())).is_none());
        let request = state.apply(ChatEvent::Submit).unwrap();
        assert_eq!(request.message, "hello");
        assert!(request.history.is_empty());

        state.apply(ChatEvent::Reply(ChatMessage::assistant("hi there")));
        state.apply(ChatEvent::Settled);

        assert!(!state.is_pending());
        assert_eq!(
            state.messages(),
            &[ChatMessage::user("hello"), ChatMessage::assistant("hi there")]
        );
    }

    #[test]
    fn test_settle_guard_runs_once_on_drop() {
        let runs = Cell::new(0);
        {
            let _guard = SettleGuard::new(|| runs.set(runs.get() + 1));
            assert_eq!(runs.get(), 0);
        }
        assert_eq!(runs.get(), 1);
    }

    #[tokio::test]
    async fn test_session_success() {
        let session = ChatSession::new(MockTransport::replying("hi there"), quiet());

        assert!(session.send("hello").await);

        let state = session.state();
        assert_eq!(
            state.messages(),
            &[ChatMessage::user("hello"), ChatMessage::assistant("hi there")]
        );
        assert!(!state.is_pending());
    }

    #[tokio::test]
    async fn test_session_unreachable() {
        let session = ChatSession::new(MockTransport::unreachable(), quiet());

        assert!(session.send("anyone there?").await);

        let state = session.state();
        assert_eq!(
            state.messages(),
            &[
                ChatMessage::user("anyone there?"),
                ChatMessage::assistant(FALLBACK_REPLY)
            ]
        );
        assert!(!state.is_pending());
    }

    #[tokio::test]
    async fn test_session_history_grows() {
        let session = ChatSession::new(MockTransport::replying("ok"), ChatConfig::default());

        session.send("one").await;
        session.send("two").await;

        let requests = session.transport().requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].history, vec![ChatMessage::assistant(GREETING)]);
        assert_eq!(
            requests[1].history,
            vec![
                ChatMessage::assistant(GREETING),
                ChatMessage::user("one"),
                ChatMessage::assistant("ok"),
            ]
        );
        assert_eq!(session.state().messages().len(), 5);
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_noop() {
        let session = ChatSession::new(MockTransport::replying("hi there").yielding(), quiet());

        let (first, second) = futures::join!(session.send("hello"), session.send("again"));

        assert!(first);
        assert!(!second);
        assert_eq!(session.transport().calls(), 1);

        let state = session.state();
        assert_eq!(
            state.messages(),
            &[ChatMessage::user("hello"), ChatMessage::assistant("hi there")]
        );
        assert!(!state.is_pending());
        assert_eq!(state.input(), "again");
    }

    #[tokio::test]
    async fn test_dropped_exchange_still_settles() {
        let session = ChatSession::new(MockTransport::replying("late").yielding(), quiet());
        session.set_input("hello");

        {
            let mut fut = std::pin::pin!(session.submit());
            // Poll once so the request is in flight, then drop it.
            assert!(futures::poll!(fut).is_pending());
        }

        let state = session.state();
        assert!(!state.is_pending());
        assert_eq!(state.messages(), &[ChatMessage::user("hello")]);
    }
}
