//! Landing Page Copy
//!
//! Static descriptors for both landing pages. Nothing here changes at runtime.

/// Anchor ids used by the erm page
pub mod anchors {
    pub const START_SLACK: &str = "start-slack";
    pub const OUR_AGENTS: &str = "our-agents";
    pub const FEATURES: &str = "features";
    pub const VISUALISATION: &str = "visulisation";
    pub const EXAMPLE: &str = "example";

    /// Anchors scrolled flush with the top of the viewport
    pub const TOP_ALIGNED: &[&str] = &[FEATURES];
}

pub const DASHBOARD_URL: &str =
    "https://christopherwilliams0112.grafana.net/public-dashboards/87c77f0e55a94a0f973774ccb8c2d684";
pub const EXAMPLE_OUTPUT_URL: &str = "https://youtu.be/owogrzfarmU";
pub const GITHUB_URL: &str = "https://github.com/Vrun1506/Hack-Sheff-10";

/// Which of the two landing pages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Workflow-automation pitch
    Workflow,
    /// Multi-agent writing assistant pitch
    Erm,
}

/// Feature card icon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Zap,
    Layout,
    Share,
    Shield,
    Smartphone,
    Globe,
    Users,
    BookCheck,
    Bot,
    Messages,
    Dumbbell,
}

impl Icon {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Zap => "⚡",
            Self::Layout => "🧩",
            Self::Share => "🔗",
            Self::Shield => "🛡️",
            Self::Smartphone => "📱",
            Self::Globe => "🌐",
            Self::Users => "👥",
            Self::BookCheck => "📘",
            Self::Bot => "🤖",
            Self::Messages => "💬",
            Self::Dumbbell => "🏋️",
        }
    }
}

/// Width of a feature card in the three-column grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span {
    Narrow,
    Wide,
}

impl Span {
    pub const fn columns(self) -> usize {
        match self {
            Self::Narrow => 1,
            Self::Wide => 2,
        }
    }
}

/// Feature card background
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Orange,
    Blue,
    Green,
    Purple,
    Pink,
    Yellow,
    Red,
}

impl Tint {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Orange => "tint-orange",
            Self::Blue => "tint-blue",
            Self::Green => "tint-green",
            Self::Purple => "tint-purple",
            Self::Pink => "tint-pink",
            Self::Yellow => "tint-yellow",
            Self::Red => "tint-red",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub span: Span,
    pub tint: Tint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentDescriptor {
    pub name: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
    pub capabilities: &'static str,
    pub inputs: &'static str,
    pub outputs: &'static str,
}

/// Where a navbar link goes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Smooth-scroll to an in-page section
    Anchor(&'static str),
    /// Not wired up yet (`#`)
    Placeholder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: LinkTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hero {
    pub headline: &'static str,
    pub highlight: &'static str,
    pub subtitle: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub assurances: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footer {
    pub columns: &'static [FooterColumn],
    pub copyright: &'static str,
    /// (label, href)
    pub socials: &'static [(&'static str, &'static str)],
}

/// Everything one landing page renders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LandingContent {
    pub nav: &'static [NavLink],
    pub hero: Hero,
    pub features_heading: &'static str,
    pub features_subheading: &'static str,
    pub features: &'static [FeatureDescriptor],
    pub cta_heading: &'static str,
    pub cta_body: &'static str,
    pub footer: Footer,
}

impl Variant {
    pub const fn content(self) -> &'static LandingContent {
        match self {
            Self::Workflow => &WORKFLOW,
            Self::Erm => &ERM,
        }
    }
}

pub const TRUSTED_BY: &[&str] = &["ACME Corp", "GlobalBank", "Nebula", "FoxRun", "Circle"];

const PLACEHOLDER_CAPABILITIES: &str = "Placeholder capabilities";
const PLACEHOLDER_INPUTS: &str = "Placeholder inputs";
const PLACEHOLDER_OUTPUTS: &str = "Placeholder outputs";

pub const AGENTS: &[AgentDescriptor] = &[
    AgentDescriptor {
        name: "Kyle",
        role: "Legal Advisor",
        summary: "Routes tasks and coordinates agents.",
        details: "Schedules jobs, prioritizes tasks, and monitors agent health. Exposes status metrics and retry logic.",
        capabilities: PLACEHOLDER_CAPABILITIES,
        inputs: PLACEHOLDER_INPUTS,
        outputs: PLACEHOLDER_OUTPUTS,
    },
    AgentDescriptor {
        name: "Bill",
        role: "Business Guide",
        summary: "Processes inputs and extracts insights.",
        details: "Runs data parsing, NLP pipelines, feature extraction, and provides analysis summaries for other agents.",
        capabilities: PLACEHOLDER_CAPABILITIES,
        inputs: PLACEHOLDER_INPUTS,
        outputs: PLACEHOLDER_OUTPUTS,
    },
    AgentDescriptor {
        name: "Jeremy",
        role: "Other thing..",
        summary: "Performs external actions (APIs, DB).",
        details: "Executes API calls, updates databases, and returns execution results with success/failure metadata.",
        capabilities: PLACEHOLDER_CAPABILITIES,
        inputs: PLACEHOLDER_INPUTS,
        outputs: PLACEHOLDER_OUTPUTS,
    },
    AgentDescriptor {
        name: "Sarah",
        role: "Other thing",
        summary: "Monitors for safety, compliance and policy violations.",
        details: "Enforces content filters, checks for PII, and vetoes or flags potentially unsafe outputs.",
        capabilities: PLACEHOLDER_CAPABILITIES,
        inputs: PLACEHOLDER_INPUTS,
        outputs: PLACEHOLDER_OUTPUTS,
    },
];

const PLACEHOLDER_FOOTER: &[FooterColumn] = &[
    FooterColumn {
        heading: "Product",
        links: &["Features", "Integrations", "Pricing", "Changelog"],
    },
    FooterColumn {
        heading: "Resources",
        links: &["Documentation", "API Reference", "Community", "Blog"],
    },
    FooterColumn {
        heading: "Company",
        links: &["About", "Careers", "Legal", "Contact"],
    },
];

const HERO: Hero = Hero {
    headline: "Automate your work,",
    highlight: "organize your life.",
    subtitle: "The all-in-one workspace that connects your apps and automates your workflows. No coding required.",
    primary_cta: "Start for free",
    secondary_cta: "View Demo",
    assurances: &["Free forever plan", "No credit card required"],
};

const WORKFLOW: LandingContent = LandingContent {
    nav: &[
        NavLink { label: "Product", target: LinkTarget::Placeholder },
        NavLink { label: "Solutions", target: LinkTarget::Placeholder },
        NavLink { label: "Resources", target: LinkTarget::Placeholder },
        NavLink { label: "Pricing", target: LinkTarget::Placeholder },
    ],
    hero: HERO,
    features_heading: "Everything you need to run your business",
    features_subheading: "Powerful features wrapped in a simple interface.",
    features: &[
        FeatureDescriptor {
            title: "Instant Automations",
            description: "Connect over 5,000 apps with a single click.",
            icon: Icon::Zap,
            span: Span::Wide,
            tint: Tint::Orange,
        },
        FeatureDescriptor {
            title: "Flexible Layouts",
            description: "Drag and drop to create your perfect workspace.",
            icon: Icon::Layout,
            span: Span::Narrow,
            tint: Tint::Blue,
        },
        FeatureDescriptor {
            title: "Team Collaboration",
            description: "Work together in real-time, anywhere.",
            icon: Icon::Share,
            span: Span::Narrow,
            tint: Tint::Green,
        },
        FeatureDescriptor {
            title: "Enterprise Security",
            description: "Bank-grade encryption for your data.",
            icon: Icon::Shield,
            span: Span::Wide,
            tint: Tint::Purple,
        },
        FeatureDescriptor {
            title: "Mobile Ready",
            description: "Access your work from any device.",
            icon: Icon::Smartphone,
            span: Span::Narrow,
            tint: Tint::Pink,
        },
        FeatureDescriptor {
            title: "Global CDN",
            description: "Lightning fast performance worldwide.",
            icon: Icon::Globe,
            span: Span::Wide,
            tint: Tint::Yellow,
        },
    ],
    cta_heading: "Ready to get started?",
    cta_body: "Join thousands of teams who have already automated their workflows.",
    footer: Footer {
        columns: PLACEHOLDER_FOOTER,
        copyright: "© 2024 erm.ai Inc. All rights reserved.",
        socials: &[("Twitter", "#"), ("GitHub", "#"), ("Discord", "#")],
    },
};

const ERM: LandingContent = LandingContent {
    nav: &[
        NavLink { label: "Start a Slack", target: LinkTarget::Anchor(anchors::START_SLACK) },
        NavLink { label: "Our Agents", target: LinkTarget::Anchor(anchors::OUR_AGENTS) },
        NavLink { label: "Features", target: LinkTarget::Anchor(anchors::FEATURES) },
        NavLink { label: "Visulisation", target: LinkTarget::Anchor(anchors::VISUALISATION) },
        NavLink { label: "How does it look?", target: LinkTarget::Anchor(anchors::EXAMPLE) },
    ],
    hero: HERO,
    features_heading: "Everything you need to communicate with confidence.",
    features_subheading: "Powerful features wrapped in a single place.",
    features: &[
        FeatureDescriptor {
            title: "Multi Agent Collaboration",
            description: "Each message is refined by multiple specialized AI agents working together.",
            icon: Icon::Users,
            span: Span::Wide,
            tint: Tint::Green,
        },
        FeatureDescriptor {
            title: "Professional Tone Transformation",
            description: "Automatically rewrite text into clear, concise, professional language.",
            icon: Icon::BookCheck,
            span: Span::Narrow,
            tint: Tint::Blue,
        },
        FeatureDescriptor {
            title: "Real-Time Conversation Enhancement",
            description: "The AI assists live while you chat or draft.",
            icon: Icon::Bot,
            span: Span::Narrow,
            tint: Tint::Red,
        },
        FeatureDescriptor {
            title: "Secure & Privacy-Focused",
            description: "Your data stays private and is never stored or shared.",
            icon: Icon::Shield,
            span: Span::Wide,
            tint: Tint::Purple,
        },
        FeatureDescriptor {
            title: "Group Tools",
            description: "Designed as a group chat - both for multiple users and agents.",
            icon: Icon::Messages,
            span: Span::Wide,
            tint: Tint::Orange,
        },
        FeatureDescriptor {
            title: "Adaptable to Your Needs",
            description: "A wide range of collaboration styles and professional tones.",
            icon: Icon::Dumbbell,
            span: Span::Narrow,
            tint: Tint::Yellow,
        },
    ],
    cta_heading: "Ready to get started?",
    cta_body: "Achieve professional clarity, powered by many minds.",
    footer: Footer {
        columns: &[],
        copyright: "© 2025 erm.ai Inc. All rights reserved. (not actually tho)",
        socials: &[("GitHub", GITHUB_URL)],
    },
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_feature_rows_fill_grid() {
        for variant in [Variant::Workflow, Variant::Erm] {
            let columns: usize = variant.content().features.iter().map(|f| f.span.columns()).sum();
            assert_eq!(columns % 3, 0, "{variant:?} leaves a ragged last row");
        }
    }

    #[test]
    fn test_agent_names_unique() {
        let names: HashSet<_> = AGENTS.iter().map(|a| a.name).collect();
        assert_eq!(names.len(), AGENTS.len());
    }

    #[test]
    fn test_agent_copy_matches_page() {
        let roles: Vec<_> = AGENTS.iter().map(|a| (a.name, a.role)).collect();
        assert_eq!(
            roles,
            [
                ("Kyle", "Legal Advisor"),
                ("Bill", "Business Guide"),
                ("Jeremy", "Other thing.."),
                ("Sarah", "Other thing"),
            ]
        );
        assert!(AGENTS.iter().all(|a| a.capabilities == "Placeholder capabilities"
            && a.inputs == "Placeholder inputs"
            && a.outputs == "Placeholder outputs"));
    }

    #[test]
    fn test_erm_footer_copyright() {
        assert_eq!(
            Variant::Erm.content().footer.copyright,
            "© 2025 erm.ai Inc. All rights reserved. (not actually tho)"
        );
    }

    #[test]
    fn test_erm_nav_targets_anchors() {
        let nav = Variant::Erm.content().nav;
        assert!(nav.iter().all(|link| matches!(link.target, LinkTarget::Anchor(_))));
        assert!(nav.iter().any(|link| link.target == LinkTarget::Anchor(anchors::FEATURES)));
    }

    #[test]
    fn test_workflow_nav_is_placeholder() {
        let nav = Variant::Workflow.content().nav;
        assert!(nav.iter().all(|link| link.target == LinkTarget::Placeholder));
    }
}
