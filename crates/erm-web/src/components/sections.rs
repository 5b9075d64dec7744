//! Static page sections

use erm_core::content::{self, LandingContent, TRUSTED_BY, anchors};
use leptos::prelude::*;

#[component]
pub fn Hero(
    hero: content::Hero,
    #[prop(optional)] id: Option<&'static str>,
) -> impl IntoView {
    let assurances = hero
        .assurances
        .iter()
        .map(|line| view! { <span class="assurance">"✓ " {*line}</span> })
        .collect_view();

    view! {
        <section id=id class="hero">
            <h1>
                {hero.headline}
                <br />
                <span class="highlight">{hero.highlight}</span>
            </h1>
            <p class="tagline">{hero.subtitle}</p>
            <div class="cta">
                <button class="btn btn-primary">{hero.primary_cta} " →"</button>
                <button class="btn">{hero.secondary_cta}</button>
            </div>
            <div class="assurances">{assurances}</div>
        </section>
    }
}

#[component]
pub fn TrustedBy() -> impl IntoView {
    view! {
        <section class="trusted-by">
            <p class="eyebrow">"Trusted by innovative teams at"</p>
            <div class="logos">
                {TRUSTED_BY.iter().map(|name| view! { <span class="logo-name">{*name}</span> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn FeatureGrid(
    content: &'static LandingContent,
    #[prop(optional)] id: Option<&'static str>,
) -> impl IntoView {
    let cards = content
        .features
        .iter()
        .map(|feature| {
            let class = format!("feature span-{} {}", feature.span.columns(), feature.tint.class());
            view! {
                <div class=class>
                    <div class="feature-icon">{feature.icon.glyph()}</div>
                    <h3>{feature.title}</h3>
                    <p>{feature.description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=id class="features">
            <div class="section-heading">
                <h2>{content.features_heading}</h2>
                <p>{content.features_subheading}</p>
            </div>
            <div class="feature-grid">{cards}</div>
        </section>
    }
}

/// Outbound link to the metrics dashboard
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <section id=anchors::VISUALISATION class="dashboard">
            <h2>"Grafana Dashboard"</h2>
            <p>"View system metrics and dashboards in Grafana."</p>
            <a href=content::DASHBOARD_URL target="_blank" rel="noopener noreferrer" class="btn btn-dark">
                "Open Grafana"
            </a>
        </section>
    }
}

#[component]
pub fn WorkflowCallToAction(content: &'static LandingContent) -> impl IntoView {
    view! {
        <section class="cta-band">
            <h2>{content.cta_heading}</h2>
            <p>{content.cta_body}</p>
            <button class="btn btn-light">"Start Building Now"</button>
        </section>
    }
}

#[component]
pub fn ErmCallToAction(content: &'static LandingContent) -> impl IntoView {
    view! {
        <section id=anchors::EXAMPLE class="cta-band">
            <h2>{content.cta_heading}</h2>
            <p>{content.cta_body}</p>
            <a href=content::EXAMPLE_OUTPUT_URL class="btn btn-light">"View example output"</a>
            <div class="value-row">"Fast • Accurate • Multi-Agent Smart"</div>
        </section>
    }
}

#[component]
pub fn Footer(footer: content::Footer) -> impl IntoView {
    let columns = footer
        .columns
        .iter()
        .map(|column| {
            view! {
                <div class="footer-column">
                    <h4>{column.heading}</h4>
                    <ul>
                        {column.links.iter().map(|label| view! { <li><a href="#">{*label}</a></li> }).collect_view()}
                    </ul>
                </div>
            }
        })
        .collect_view();

    let socials = footer
        .socials
        .iter()
        .map(|&(label, href)| {
            let external = href.starts_with("http");
            view! {
                <a
                    href=href
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                >
                    {label}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            {(!footer.columns.is_empty()).then(|| view! {
                <div class="footer-grid">
                    {columns}
                    <div class="footer-column">
                        <h4>"Subscribe"</h4>
                        <p>"Get the latest updates."</p>
                        <div class="subscribe">
                            <input type="email" placeholder="Enter your email" />
                            <button class="btn btn-dark">"Join"</button>
                        </div>
                    </div>
                </div>
            })}
            <div class="footer-bottom">
                <p>{footer.copyright}</p>
                <div class="socials">{socials}</div>
            </div>
        </footer>
    }
}
