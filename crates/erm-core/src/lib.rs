//! # erm-core
//!
//! Renderer-independent logic behind the erm.ai landing pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      erm-web (Leptos)                         │
//! │  ┌───────────┐  ┌──────────────┐  ┌────────────────────────┐  │
//! │  │  Navbar   │  │ AgentDetails │  │      ChatWidget        │  │
//! │  └─────┬─────┘  └──────┬───────┘  └───────────┬────────────┘  │
//! └────────┼───────────────┼──────────────────────┼───────────────┘
//!          │               │                      │
//!   scroll::Viewport  accordion::Accordion  chat::ChatState ── transport::ChatTransport
//! ```
//!
//! Everything here runs natively, so the widget logic is tested without a
//! browser. The only I/O is the chat exchange, behind `ChatTransport`.

pub mod accordion;
pub mod chat;
pub mod config;
pub mod content;
pub mod error;
pub mod message;
pub mod scroll;
pub mod transport;

pub use accordion::Accordion;
pub use chat::{ChatEvent, ChatSession, ChatState, SettleGuard};
pub use config::{ChatConfig, LogConfig};
pub use error::{ChatError, Result};
pub use message::{ChatMessage, ChatReply, ChatRequest, Role};
pub use scroll::{AnchorPolicy, SectionRect, Viewport, scroll_to_anchor, target_scroll_y};
pub use transport::{ChatTransport, HttpTransport, MockTransport, exchange};
