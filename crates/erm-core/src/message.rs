//! Conversation Messages
//!
//! Message and wire types shared by the chat widget and its transport.

use serde::{Deserialize, Serialize};

/// Role of a message sender
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Visitor typing into the widget
    User,
    /// Backend reply, greeting, or fallback
    Assistant,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single message in a conversation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Body posted to the chat endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The message just submitted
    pub message: String,

    /// Every message that preceded it, oldest first
    pub history: Vec<ChatMessage>,
}

/// Body returned by the chat endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_creation() {
        let msg = ChatMessage::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
        assert!(msg.is_user());
        assert!(!ChatMessage::assistant("Hi").is_user());
    }

    #[test]
    fn test_request_wire_shape() {
        let request = ChatRequest {
            message: "hello".into(),
            history: vec![ChatMessage::assistant("greeting")],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "message": "hello",
                "history": [{ "role": "assistant", "content": "greeting" }]
            })
        );
    }

    #[test]
    fn test_unknown_role_rejected() {
        let parsed = serde_json::from_value::<ChatMessage>(json!({ "role": "system", "content": "x" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_reply_requires_reply_field() {
        assert!(serde_json::from_value::<ChatReply>(json!({ "message": "hi" })).is_err());
        let reply: ChatReply = serde_json::from_value(json!({ "reply": "hi there", "extra": 1 })).unwrap();
        assert_eq!(reply.reply, "hi there");
    }
}
