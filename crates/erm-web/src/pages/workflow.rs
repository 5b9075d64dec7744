//! Workflow-automation landing page

use erm_core::content::Variant;
use leptos::prelude::*;

use crate::components::{ChatWidget, FeatureGrid, Footer, Hero, Navbar, TrustedBy, WorkflowCallToAction};

#[component]
pub fn WorkflowPage() -> impl IntoView {
    let content = Variant::Workflow.content();

    view! {
        <div class="landing">
            <Navbar links=content.nav actions=true />
            <Hero hero=content.hero />
            <TrustedBy />
            <FeatureGrid content=content />
            <WorkflowCallToAction content=content />
            <Footer footer=content.footer />
            <ChatWidget />
        </div>
    }
}
