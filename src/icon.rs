//! Icon glyphs.
//!
//! Configurations name icons by string (`"TrendingUp"`, `"linkedin"`). Each
//! section looks the name up in its own closed [`IconSet`], matching the name
//! exactly. A name outside the set renders that set's fallback, so content
//! can never pull in glyphs the page chrome uses (menu, close).

use std::fmt::Write;

/// Every glyph the page can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowRight,
    CheckCircle,
    Clock,
    Github,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Phone,
    Send,
    Shield,
    TrendingUp,
    Twitter,
    Users,
    X,
}

impl Icon {
    /// Inner SVG elements on a 24×24 stroke grid.
    fn body(self) -> &'static str {
        match self {
            Self::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Self::CheckCircle => r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><path d="m9 11 3 3L22 4"/>"#,
            Self::Clock => r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#,
            Self::Github => r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-8-2"/>"#,
            Self::Linkedin => r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
            Self::Mail => r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            Self::MapPin => r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#,
            Self::Menu => r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#,
            Self::Phone => r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#,
            Self::Send => r#"<path d="m22 2-7 20-4-9-9-4Z"/><path d="M22 2 11 13"/>"#,
            Self::Shield => r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>"#,
            Self::TrendingUp => r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/><polyline points="16 7 22 7 22 13"/>"#,
            Self::Twitter => r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#,
            Self::Users => r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
            Self::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        }
    }

    /// Render as an inline, decorative SVG element.
    pub fn svg(self, class: &str) -> String {
        let mut out = String::with_capacity(256);
        let _ = write!(
            out,
            r#"<svg class="icon {class}" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
            self.body()
        );
        out
    }
}

/// Names a section accepts, and the glyph drawn for anything else.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    names: &'static [(&'static str, Icon)],
    fallback: Icon,
}

impl IconSet {
    /// Hero feature cards.
    pub const HERO: Self = Self {
        names: &[
            ("TrendingUp", Icon::TrendingUp),
            ("Shield", Icon::Shield),
            ("Users", Icon::Users),
        ],
        fallback: Icon::TrendingUp,
    };

    /// Contact methods and contact features.
    pub const CONTACT: Self = Self {
        names: &[
            ("Mail", Icon::Mail),
            ("Phone", Icon::Phone),
            ("MapPin", Icon::MapPin),
            ("Clock", Icon::Clock),
            ("Users", Icon::Users),
        ],
        fallback: Icon::Mail,
    };

    /// Footer social links.
    pub const SOCIAL: Self = Self {
        names: &[
            ("twitter", Icon::Twitter),
            ("linkedin", Icon::Linkedin),
            ("github", Icon::Github),
        ],
        fallback: Icon::Twitter,
    };

    /// Exact lookup, `None` outside the set.
    pub fn get(&self, name: &str) -> Option<Icon> {
        self.names
            .iter()
            .find_map(|(key, icon)| (*key == name).then_some(*icon))
    }

    pub fn resolve(&self, name: &str) -> Icon {
        self.get(name).unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_match_exactly() {
        assert_eq!(IconSet::HERO.get("Shield"), Some(Icon::Shield));
        assert_eq!(IconSet::HERO.get("shield"), None);
        assert_eq!(IconSet::CONTACT.get("MapPin"), Some(Icon::MapPin));
        assert_eq!(IconSet::CONTACT.get("map-pin"), None);
        assert_eq!(IconSet::SOCIAL.get("linkedin"), Some(Icon::Linkedin));
        assert_eq!(IconSet::SOCIAL.get("LinkedIn"), None);
    }

    #[test]
    fn test_sets_never_yield_chrome_glyphs() {
        for set in [IconSet::HERO, IconSet::CONTACT, IconSet::SOCIAL] {
            for name in ["Menu", "menu", "X", "x", "Send", "ArrowRight", "CheckCircle"] {
                let icon = set.resolve(name);
                assert_eq!(icon, set.fallback, "{name}");
                assert!(!matches!(icon, Icon::Menu | Icon::X));
            }
        }
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(IconSet::HERO.resolve("Mail"), Icon::TrendingUp);
        assert_eq!(IconSet::CONTACT.resolve("Shield"), Icon::Mail);
        assert_eq!(IconSet::CONTACT.resolve("Users"), Icon::Users);
        assert_eq!(IconSet::SOCIAL.resolve("mastodon"), Icon::Twitter);
    }

    #[test]
    fn test_svg_markup() {
        let svg = Icon::Send.svg("icon-sm");
        assert!(svg.starts_with(r#"<svg class="icon icon-sm""#));
        assert!(svg.contains(r#"aria-hidden="true""#));
        assert!(svg.ends_with("</svg>"));
    }
}
