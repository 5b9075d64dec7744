//! Multi-agent landing page
//!
//! Navbar links scroll to the sections below by id.

use erm_core::content::{Variant, anchors};
use leptos::prelude::*;

use crate::components::{AgentDetails, ChatWidget, Dashboard, ErmCallToAction, FeatureGrid, Footer, Hero, Navbar};

#[component]
pub fn ErmPage() -> impl IntoView {
    let content = Variant::Erm.content();

    view! {
        <div class="landing">
            <Navbar links=content.nav />
            <Hero hero=content.hero id=anchors::START_SLACK />
            <AgentDetails />
            <FeatureGrid content=content id=anchors::FEATURES />
            <Dashboard />
            <ErmCallToAction content=content />
            <Footer footer=content.footer />
            <ChatWidget />
        </div>
    }
}
