//! API Client

use erm_core::{ChatConfig, ChatMessage, ChatRequest, HttpTransport, exchange};

/// Send a chat message to the backend.
///
/// Resolves to the assistant message to append: the reply, or the fallback
/// when the backend could not be reached.
pub async fn send_chat(request: &ChatRequest, config: &ChatConfig) -> ChatMessage {
    let transport = HttpTransport::new(config.endpoint.clone());
    exchange(&transport, request, config).await
}
