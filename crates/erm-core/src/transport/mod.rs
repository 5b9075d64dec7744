//! Chat Transport
//!
//! How a [`ChatRequest`] reaches the backend. The widget only talks to the
//! [`ChatTransport`] trait, so tests can swap the HTTP client for a script.

mod http;
mod mock;

pub use http::HttpTransport;
pub use mock::{MockOutcome, MockTransport};

use async_trait::async_trait;

use crate::config::ChatConfig;
use crate::error::Result;
use crate::message::{ChatMessage, ChatReply, ChatRequest};

/// Transport trait (Strategy pattern)
///
/// `?Send` because browser futures are tied to the main thread.
#[async_trait(?Send)]
pub trait ChatTransport {
    /// Send one request and decode the reply
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply>;
}

/// Run one exchange and turn the outcome into the assistant message to append.
///
/// Never fails: any error is logged and replaced by the configured fallback.
pub async fn exchange<T>(transport: &T, request: &ChatRequest, config: &ChatConfig) -> ChatMessage
where
    T: ChatTransport + ?Sized,
{
    match transport.send(request).await {
        Ok(reply) => ChatMessage::assistant(reply.reply),
        Err(err) => {
            tracing::error!(error = %err, endpoint = %config.endpoint, "chat exchange failed");
            ChatMessage::assistant(config.fallback_reply.clone())
        }
    }
}
