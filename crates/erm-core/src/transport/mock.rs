//! Mock Transport
//!
//! For tests and offline demos. Replies from a script and records every request.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;

use super::ChatTransport;
use crate::error::{ChatError, Result};
use crate::message::{ChatReply, ChatRequest};

/// What the mock does with a request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockOutcome {
    /// Reply with this text
    Reply(String),
    /// Fail as if nothing were listening
    Unreachable,
}

/// Scripted transport
#[derive(Debug)]
pub struct MockTransport {
    outcome: MockOutcome,
    /// Suspend once before answering, so callers can observe the pending state
    yield_first: bool,
    requests: RefCell<Vec<ChatRequest>>,
    calls: Cell<usize>,
}

impl MockTransport {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            yield_first: false,
            requests: RefCell::new(Vec::new()),
            calls: Cell::new(0),
        }
    }

    pub fn replying(reply: impl Into<String>) -> Self {
        Self::new(MockOutcome::Reply(reply.into()))
    }

    pub fn unreachable() -> Self {
        Self::new(MockOutcome::Unreachable)
    }

    /// Yield to the executor once before answering
    #[must_use]
    pub fn yielding(mut self) -> Self {
        self.yield_first = true;
        self
    }

    /// Number of requests received
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Copies of the requests received, oldest first
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ChatTransport for MockTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply> {
        self.calls.set(self.calls.get() + 1);
        self.requests.borrow_mut().push(request.clone());

        if self.yield_first {
            YieldOnce::default().await;
        }

        match &self.outcome {
            MockOutcome::Reply(reply) => Ok(ChatReply {
                reply: reply.clone(),
            }),
            MockOutcome::Unreachable => Err(ChatError::Transport("connection refused".into())),
        }
    }
}

/// Returns `Pending` on the first poll and `Ready` on the second.
///
/// Hand-rolled because tokio is only a dev-dependency and `yield_now` does not run on wasm32.
#[derive(Default)]
struct YieldOnce {
    yielded: bool,
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
