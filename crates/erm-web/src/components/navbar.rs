//! Navigation bar

use erm_core::{
    AnchorPolicy,
    content::{LinkTarget, NavLink, anchors},
    scroll_to_anchor,
};
use leptos::{ev::MouseEvent, prelude::*};

use crate::viewport::BrowserViewport;

/// Sticky header. Anchor links smooth-scroll to their section.
#[component]
pub fn Navbar(
    links: &'static [NavLink],
    /// Show the "Log in" / "Get Started" actions on the right
    #[prop(optional)]
    actions: bool,
) -> impl IntoView {
    let policy = StoredValue::new(AnchorPolicy::new(anchors::TOP_ALIGNED.iter().copied()));

    let scroll_to = move |id: &'static str, ev: MouseEvent| {
        ev.prevent_default();
        if let Some(viewport) = BrowserViewport::current() {
            policy.with_value(|policy| {
                scroll_to_anchor(&viewport, policy, id);
            });
        }
    };

    let items = links
        .iter()
        .map(|link| match link.target {
            LinkTarget::Anchor(id) => view! {
                <a href=format!("#{id}") on:click=move |ev| scroll_to(id, ev)>
                    {link.label}
                </a>
            }
            .into_any(),
            LinkTarget::Placeholder => view! { <a href="#">{link.label}</a> }.into_any(),
        })
        .collect_view();

    view! {
        <nav class="navbar">
            <div class="brand">
                <div class="logo">"e"</div>
                <span class="brand-name">"erm.ai"</span>
            </div>

            <div class="nav-links">{items}</div>

            {actions.then(|| view! {
                <div class="nav-actions">
                    <a href="#" class="login">"Log in"</a>
                    <button class="btn btn-dark">"Get Started"</button>
                </div>
            })}
        </nav>
    }
}
