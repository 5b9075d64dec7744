//! UI Components

mod agents;
mod chat_widget;
mod navbar;
mod sections;

pub use agents::AgentDetails;
pub use chat_widget::ChatWidget;
pub use navbar::Navbar;
pub use sections::{Dashboard, ErmCallToAction, FeatureGrid, Footer, Hero, TrustedBy, WorkflowCallToAction};

use erm_core::ChatMessage;
use leptos::prelude::*;

/// Message bubble component
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let class = format!("message message-{}", message.role);

    view! {
        <div class=class>
            <p class="content">{message.content}</p>
        </div>
    }
}
