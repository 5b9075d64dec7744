//! Configuration
//!
//! The page runs in a browser with no process environment, so overrides are
//! read at compile time from `ERM_CHAT_ENDPOINT` and `ERM_LOG`.

/// Where the chat widget posts messages
pub const DEFAULT_CHAT_ENDPOINT: &str = "http://localhost:3001/api/chat";

/// Assistant message appended when the exchange fails for any reason
pub const FALLBACK_REPLY: &str = "My backend seems to be offline. Did you start the server?";

/// First message in every conversation
pub const GREETING: &str =
    "Hi! I'm DevBot. I'm cynical but helpful. Ask me anything about the product.";

/// Chat widget configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    /// Chat endpoint URL
    pub endpoint: String,

    /// Shown in place of a reply when the exchange fails
    pub fallback_reply: String,

    /// Opening assistant message, if any
    pub greeting: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHAT_ENDPOINT.into(),
            fallback_reply: FALLBACK_REPLY.into(),
            greeting: Some(GREETING.into()),
        }
    }
}

impl ChatConfig {
    /// Defaults, with the endpoint overridden by `ERM_CHAT_ENDPOINT` at build time
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = option_env!("ERM_CHAT_ENDPOINT") {
            config.endpoint = endpoint.into();
        }
        config
    }

    /// Point the widget at a different endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Start conversations empty
    #[must_use]
    pub fn without_greeting(mut self) -> Self {
        self.greeting = None;
        self
    }
}

/// Logging configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `info,erm_core=debug`
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { filter: "info".into() }
    }
}

impl LogConfig {
    pub fn from_build_env() -> Self {
        option_env!("ERM_LOG").map_or_else(Self::default, |filter| Self {
            filter: filter.into(),
        })
    }
}
