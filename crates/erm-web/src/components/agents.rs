//! Agent accordion

use erm_core::{Accordion, content::{AGENTS, anchors}};
use leptos::prelude::*;

#[component]
pub fn AgentDetails() -> impl IntoView {
    let (accordion, set_accordion) = signal(Accordion::new());

    let panels = AGENTS
        .iter()
        .enumerate()
        .map(|(i, agent)| {
            let is_open = move || accordion.get().is_open(i);
            let panel_id = format!("agent-panel-{i}");

            view! {
                <div class="agent-card">
                    <button
                        class="agent-header"
                        aria-expanded=move || if is_open() { "true" } else { "false" }
                        aria-controls=panel_id.clone()
                        on:click=move |_| set_accordion.update(|a| *a = a.toggle(i))
                    >
                        <div>
                            <div class="agent-name">{agent.name}</div>
                            <div class="agent-role">{agent.role}</div>
                            <div class="agent-summary">{agent.summary}</div>
                        </div>
                        <span class=move || if is_open() { "chevron open" } else { "chevron" } aria-hidden="true">
                            "▾"
                        </span>
                    </button>

                    <div id=panel_id class=move || if is_open() { "agent-panel open" } else { "agent-panel" }>
                        <p>{agent.details}</p>
                        <ul>
                            <li>"Capabilities: " {agent.capabilities}</li>
                            <li>"Inputs: " {agent.inputs}</li>
                            <li>"Outputs: " {agent.outputs}</li>
                        </ul>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=anchors::OUR_AGENTS class="agents">
            <p class="eyebrow">"Multi-agent model - click an agent for details"</p>
            <div class="agent-grid">{panels}</div>
        </section>
    }
}
