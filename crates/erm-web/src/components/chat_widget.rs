//! Floating chat widget

use erm_core::{ChatConfig, ChatState, SettleGuard};
use leptos::{ev::SubmitEvent, html, prelude::*};

use super::MessageBubble;
use crate::api;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let config = ChatConfig::from_build_env();
    let state = RwSignal::new(ChatState::from_config(&config));
    let config = StoredValue::new(config);
    let (open, set_open) = signal(false);
    let end = NodeRef::<html::Div>::new();

    // Keep the newest message in view
    let shown = Memo::new(move |_| state.with(|s| (s.messages().len(), s.is_pending())));
    Effect::new(move |_| {
        shown.track();
        if let Some(el) = end.get() {
            el.scroll_into_view();
        }
    });

    let submit = move || {
        let Some(request) = state.try_update(ChatState::submit).flatten() else {
            return;
        };

        leptos::task::spawn_local(async move {
            let _settle = SettleGuard::new(move || state.update(ChatState::settle));
            let reply = api::send_chat(&request, &config.get_value()).await;
            state.update(|s| s.push_reply(reply));
        });
    };

    view! {
        <div class="chat-widget">
            <Show when=move || open.get()>
                <div class="chat-panel">
                    <div class="chat-header">
                        <span class="status-dot"></span>
                        <span class="chat-title">"DevBot Support"</span>
                        <button class="chat-close" on:click=move |_| set_open.set(false)>"✕"</button>
                    </div>

                    <div class="messages">
                        <For
                            each=move || state.with(|s| s.messages().iter().cloned().enumerate().collect::<Vec<_>>())
                            key=|(i, _)| *i
                            children=move |(_, msg)| view! { <MessageBubble message=msg /> }
                        />
                        <Show when=move || state.with(ChatState::is_pending)>
                            <div class="message loading">
                                <span class="dot"></span>
                                <span class="dot"></span>
                                <span class="dot"></span>
                            </div>
                        </Show>
                        <div node_ref=end></div>
                    </div>

                    <form
                        class="input-area"
                        on:submit=move |ev: SubmitEvent| {
                            ev.prevent_default();
                            submit();
                        }
                    >
                        <input
                            type="text"
                            placeholder="Type a message..."
                            prop:value=move || state.with(|s| s.input().to_owned())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                state.update(|s| s.set_input(text));
                            }
                        />
                        <button type="submit" disabled=move || !state.with(ChatState::can_submit)>
                            "Send"
                        </button>
                    </form>
                </div>
            </Show>

            <button class="chat-launcher" on:click=move |_| set_open.update(|o| *o = !*o)>
                {move || if open.get() { "✕" } else { "💬" }}
            </button>
        </div>
    }
}
