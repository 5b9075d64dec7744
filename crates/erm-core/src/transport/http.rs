//! HTTP Transport
//!
//! `reqwest` client posting JSON to the chat endpoint. Works natively and on
//! `wasm32`, where reqwest delegates to the browser's `fetch`.

use async_trait::async_trait;

use super::ChatTransport;
use crate::error::Result;
use crate::message::{ChatReply, ChatRequest};

/// Posts requests to a fixed endpoint
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl ChatTransport for HttpTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply> {
        tracing::debug!(endpoint = %self.endpoint, history = request.history.len(), "posting chat message");

        let reply = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatReply>()
            .await?;

        Ok(reply)
    }
}
