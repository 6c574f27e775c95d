//! Footer: company blurb, link columns, copyright, social links.

use super::{LinkItem, Section, SectionKind};
use crate::editable::{EditablePath, Markup};
use crate::icon::IconSet;
use serde::{Deserialize, Serialize};

section_config! {
    /// Footer content.
    pub struct FooterConfig / FooterOverride {
        pub company_name: String,
        pub tagline: String,
        pub company_links: Vec<LinkItem>,
        pub legal_links: Vec<LinkItem>,
        pub social_links: Vec<SocialLink>,
        pub copyright: String,
        pub description: String,
    }
}

/// Social profile button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub href: String,
    pub icon: String,
}

impl SocialLink {
    pub fn new(platform: &str, href: &str, icon: &str) -> Self {
        Self {
            platform: platform.into(),
            href: href.into(),
            icon: icon.into(),
        }
    }
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            company_name: "WorkforceMax".into(),
            tagline: "Enterprise-grade workforce management solutions that scale with your business growth".into(),
            company_links: vec![
                LinkItem::new("About Us", "/about"),
                LinkItem::new("Careers", "/careers"),
            ],
            legal_links: vec![
                LinkItem::new("Privacy Policy", "/privacy"),
                LinkItem::new("Terms of Service", "/terms"),
            ],
            social_links: vec![
                SocialLink::new("Twitter", "https://twitter.com/workforcemax", "twitter"),
                SocialLink::new(
                    "LinkedIn",
                    "https://linkedin.com/company/workforcemax",
                    "linkedin",
                ),
            ],
            copyright: "© 2024 WorkforceMax. All rights reserved.".into(),
            description: "Streamline your workforce operations with our comprehensive SaaS platform designed for modern enterprises.".into(),
        }
    }
}

impl FooterConfig {
    fn link_column(m: &mut Markup, heading: &str, key: &str, links: &[LinkItem]) {
        m.open("div", &[]);
        m.element("h4", "footer-heading", heading);
        m.open_class("nav", "footer-links");
        for (idx, link) in links.iter().enumerate() {
            let path = EditablePath::key(key).at(idx);
            m.open("div", &[]);
            m.open_link(
                "a",
                &[("class", "footer-link"), ("data-nav", "")],
                path.clone().field("href"),
                &link.href,
            );
            m.editable("span", "", path.field("label"), &link.label);
            m.close("a");
            m.close("div");
        }
        m.close("nav");
        m.close("div");
    }
}

impl Section for FooterConfig {
    const KIND: SectionKind = SectionKind::Footer;

    fn render(&self, m: &mut Markup) {
        m.open("footer", &[("id", SectionKind::Footer.id()), ("class", "site-footer")]);
        m.open_class("div", "container");

        m.open_class("div", "footer-grid");
        m.open_class("div", "footer-about");
        m.open_class("h3", "footer-company");
        m.editable("span", "", EditablePath::key("companyName"), &self.company_name);
        m.close("h3");
        m.open_class("p", "footer-description");
        m.editable("span", "", EditablePath::key("description"), &self.description);
        m.close("p");
        m.open_class("p", "footer-tagline");
        m.editable("span", "", EditablePath::key("tagline"), &self.tagline);
        m.close("p");
        m.close("div");

        Self::link_column(m, "Company", "companyLinks", &self.company_links);
        Self::link_column(m, "Legal", "legalLinks", &self.legal_links);
        m.close("div");

        m.open("hr", &[("class", "separator")]);

        m.open_class("div", "footer-bottom");
        m.open_class("p", "footer-copyright");
        m.editable("span", "", EditablePath::key("copyright"), &self.copyright);
        m.close("p");

        m.open_class("div", "footer-social");
        for (idx, social) in self.social_links.iter().enumerate() {
            let label = format!("Follow us on {}", social.platform);
            m.open_link(
                "a",
                &[
                    ("class", "btn btn-ghost btn-icon"),
                    ("aria-label", label.as_str()),
                    ("data-nav", ""),
                ],
                EditablePath::key("socialLinks").at(idx).field("href"),
                &social.href,
            );
            m.raw(&IconSet::SOCIAL.resolve(&social.icon).svg("icon-md"));
            m.close("a");
        }
        m.close("div");
        m.close("div");

        m.close("div");
        m.close("footer");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::Icon;
    use crate::section::testing::{assert_marks_resolve, path_set};

    #[test]
    fn test_paths() {
        let config = FooterConfig::default();
        let paths = path_set(&config);

        assert!(paths.contains(&"companyLinks[1].label".to_string()));
        assert!(paths.contains(&"legalLinks[0].href".to_string()));
        assert!(paths.contains(&"socialLinks[1].href".to_string()));
        // Platform and icon name are not rendered as editable text
        assert!(!paths.iter().any(|p| p.ends_with(".platform") || p.ends_with(".icon")));
        assert_eq!(paths.len(), 4 + 4 + 4 + 2);
        assert_marks_resolve(&config);
    }

    #[test]
    fn test_paths_follow_array_lengths() {
        let config = FooterConfig::with_override(FooterOverride {
            legal_links: Some(vec![]),
            social_links: Some(vec![SocialLink::new("GitHub", "https://github.com/wm", "github")]),
            ..Default::default()
        });
        let paths = path_set(&config);

        assert!(!paths.iter().any(|p| p.starts_with("legalLinks")));
        assert!(paths.contains(&"socialLinks[0].href".to_string()));
        assert!(!paths.contains(&"socialLinks[1].href".to_string()));
        assert_marks_resolve(&config);
    }

    #[test]
    fn test_social_links_open_new_context() {
        let mut m = Markup::new();
        FooterConfig::default().render(&mut m);
        let html = m.as_str();

        assert!(html.contains(
            r#"href="https://twitter.com/workforcemax" target="_blank" rel="noopener noreferrer""#
        ));
        assert!(html.contains(r#"aria-label="Follow us on LinkedIn""#));
        // Internal links stay in the current context
        assert!(html.contains(r#"<a href="/about" class="footer-link""#));
    }

    #[test]
    fn test_unknown_social_icon_falls_back() {
        let config = FooterConfig::with_override(FooterOverride {
            social_links: Some(vec![SocialLink::new("Mastodon", "https://m.test/@wm", "mastodon")]),
            ..Default::default()
        });
        let mut m = Markup::new();
        config.render(&mut m);
        assert!(m.as_str().contains(&Icon::Twitter.svg("icon-md")));
    }

    #[test]
    fn test_x_social_icon_is_not_close_glyph() {
        let config = FooterConfig::with_override(FooterOverride {
            social_links: Some(vec![
                SocialLink::new("X", "https://x.com/wm", "x"),
                SocialLink::new("GitHub", "https://github.com/wm", "github"),
            ]),
            ..Default::default()
        });
        let mut m = Markup::new();
        config.render(&mut m);
        let html = m.as_str();

        assert!(!html.contains(&Icon::X.svg("icon-md")));
        assert!(html.contains(&Icon::Twitter.svg("icon-md")));
        assert!(html.contains(&Icon::Github.svg("icon-md")));
    }
}
