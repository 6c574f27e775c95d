//! Hero: headline, benefits, calls to action, dashboard image, feature cards.

use super::{FeatureItem, Section, SectionKind};
use crate::editable::{EditablePath, Markup};
use crate::icon::{Icon, IconSet};

section_config! {
    /// Hero content.
    pub struct HeroConfig / HeroOverride {
        pub headline: String,
        pub subheadline: String,
        pub cta_text: String,
        pub cta_href: String,
        pub secondary_cta_text: String,
        pub secondary_cta_href: String,
        pub hero_image_url: String,
        pub hero_image_alt: String,
        pub social_proof_text: String,
        pub key_benefits: Vec<String>,
        pub stats_label: String,
        pub features: Vec<FeatureItem>,
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            headline: "Transform Your Enterprise Workforce Management".into(),
            subheadline: "Streamline operations, optimize productivity, and reduce costs with our AI-powered EP WMs platform designed for modern enterprises.".into(),
            cta_text: "Start Free Trial".into(),
            cta_href: "/signup".into(),
            secondary_cta_text: "Watch Demo".into(),
            secondary_cta_href: "/demo".into(),
            hero_image_url: "https://images.unsplash.com/photo-1551434678-e076c223a692?ixlib=rb-4.0.3&auto=format&fit=crop&w=2850&q=80".into(),
            hero_image_alt: "Modern enterprise dashboard preview showing workforce analytics".into(),
            social_proof_text: "Trusted by 500+ enterprise clients worldwide".into(),
            key_benefits: vec![
                "40% reduction in operational overhead".into(),
                "Real-time workforce analytics".into(),
                "Enterprise-grade security & compliance".into(),
            ],
            stats_label: "Enterprise Ready".into(),
            features: vec![
                FeatureItem::new("TrendingUp", "AI-Powered Analytics", "Real-time insights"),
                FeatureItem::new("Shield", "Enterprise Security", "SOC 2 compliant"),
                FeatureItem::new("Users", "Scalable Platform", "Grows with you"),
            ],
        }
    }
}

/// Placement classes of the floating cards over the image, in feature order.
const FLOATING_SLOTS: [&str; 2] = ["floating-card floating-bottom-left", "floating-card floating-top-right"];

/// Delay before the image column is revealed, in milliseconds.
const IMAGE_REVEAL_DELAY: &str = "300";

impl HeroConfig {
    fn content_column(&self, m: &mut Markup) {
        m.open("div", &[("class", "hero-content"), ("data-reveal", "")]);

        m.open_class("div", "hero-badge-row");
        m.editable("span", "badge", EditablePath::key("statsLabel"), &self.stats_label);
        m.close("div");

        m.open_class("div", "hero-headlines");
        m.open_class("h1", "hero-headline");
        m.editable("span", "", EditablePath::key("headline"), &self.headline);
        m.close("h1");
        m.open_class("p", "hero-subheadline");
        m.editable("span", "", EditablePath::key("subheadline"), &self.subheadline);
        m.close("p");
        m.close("div");

        m.open_class("div", "hero-benefits");
        for (idx, benefit) in self.key_benefits.iter().enumerate() {
            m.open_class("div", "hero-benefit");
            m.raw(&Icon::CheckCircle.svg("icon-sm text-primary"));
            m.editable("span", "", EditablePath::key("keyBenefits").at(idx), benefit);
            m.close("div");
        }
        m.close("div");

        m.open_class("div", "hero-actions");
        m.open_link(
            "a",
            &[("class", "btn btn-primary btn-lg btn-arrow"), ("data-nav", "")],
            EditablePath::key("ctaHref"),
            &self.cta_href,
        );
        m.editable("span", "", EditablePath::key("ctaText"), &self.cta_text);
        m.raw(&Icon::ArrowRight.svg("icon-xs"));
        m.close("a");
        m.open_link(
            "a",
            &[("class", "btn btn-outline btn-lg"), ("data-nav", "")],
            EditablePath::key("secondaryCtaHref"),
            &self.secondary_cta_href,
        );
        m.editable(
            "span",
            "",
            EditablePath::key("secondaryCtaText"),
            &self.secondary_cta_text,
        );
        m.close("a");
        m.close("div");

        m.open_class("div", "hero-social-proof");
        m.open_class("p", "text-muted");
        m.editable(
            "span",
            "",
            EditablePath::key("socialProofText"),
            &self.social_proof_text,
        );
        m.close("p");
        m.close("div");

        m.close("div");
    }

    fn image_column(&self, m: &mut Markup) {
        m.open(
            "div",
            &[
                ("class", "hero-media"),
                ("data-reveal", ""),
                ("data-reveal-delay", IMAGE_REVEAL_DELAY),
            ],
        );
        m.open_class("div", "card card-elevated");
        m.image(
            &[
                ("alt", self.hero_image_alt.as_str()),
                ("width", "800"),
                ("height", "600"),
                ("class", "hero-image"),
            ],
            EditablePath::key("heroImageUrl"),
            &self.hero_image_url,
        );
        m.close("div");

        // Only as many floating cards as there are features to fill them
        for (idx, (slot, feature)) in FLOATING_SLOTS.iter().zip(&self.features).enumerate() {
            m.open_class("div", slot);
            feature_card(m, idx, feature, "feature-card-row");
            m.close("div");
        }
        m.close("div");
    }
}

/// One feature card body, tagged at `features[idx]`.
fn feature_card(m: &mut Markup, idx: usize, feature: &FeatureItem, layout: &str) {
    let path = EditablePath::key("features").at(idx);
    m.open_class("div", &format!("card {layout}"));
    m.raw(&IconSet::HERO.resolve(&feature.icon).svg("icon-md text-primary"));
    m.open("div", &[]);
    m.open_class("p", "feature-title");
    m.editable("span", "", path.clone().field("title"), &feature.title);
    m.close("p");
    m.open_class("p", "feature-description");
    m.editable("span", "", path.field("description"), &feature.description);
    m.close("p");
    m.close("div");
    m.close("div");
}

impl Section for HeroConfig {
    const KIND: SectionKind = SectionKind::Hero;

    fn render(&self, m: &mut Markup) {
        m.open("section", &[("id", SectionKind::Hero.id()), ("class", "hero")]);
        m.open_class("div", "container");

        m.open_class("div", "hero-grid");
        self.content_column(m);
        self.image_column(m);
        m.close("div");

        m.open_class("div", "hero-feature-row");
        for (idx, feature) in self.features.iter().enumerate() {
            feature_card(m, idx, feature, "feature-card-stack");
        }
        m.close("div");

        m.close("div");
        m.close("section");
    }
}
