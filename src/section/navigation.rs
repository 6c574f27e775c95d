//! Navigation bar: brand, in-page links, call to action, mobile drawer.

use super::{LinkItem, Section, SectionKind};
use crate::editable::{EditablePath, Markup};
use crate::icon::Icon;
use crate::nav::MobileMenu;

section_config! {
    /// Navigation bar content.
    pub struct NavigationConfig / NavigationOverride {
        pub brand_name: String,
        pub brand_tagline: String,
        pub cta_text: String,
        pub cta_href: String,
        pub navigation_items: Vec<LinkItem>,
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            brand_name: "WorkforceMax".into(),
            brand_tagline: "Enterprise WM Solutions".into(),
            cta_text: "Get Started".into(),
            cta_href: "#contact".into(),
            navigation_items: vec![
                LinkItem::new("Home", "#hero"),
                LinkItem::new("Contact", "#contact"),
            ],
        }
    }
}

/// Element id of the mobile drawer.
const DRAWER_ID: &str = "nav-drawer";

impl NavigationConfig {
    /// Render with an explicit drawer state.
    pub fn render_with_menu(&self, menu: MobileMenu, m: &mut Markup) {
        m.open("section", &[("id", SectionKind::Navigation.id()), ("class", "site-nav")]);
        m.open_class("nav", "container nav-bar");

        self.brand(m);

        m.open_class("div", "nav-desktop");
        m.open_class("ul", "nav-links");
        self.items(m, "nav-link");
        m.close("ul");
        self.cta(m, "btn btn-primary");
        m.close("div");

        let expanded = if menu.is_open() { "true" } else { "false" };
        m.open_class("div", "nav-mobile");
        m.open(
            "button",
            &[
                ("type", "button"),
                ("class", "btn btn-ghost btn-icon"),
                ("aria-label", "Open menu"),
                ("aria-controls", DRAWER_ID),
                ("aria-expanded", expanded),
                ("data-menu-toggle", ""),
            ],
        );
        m.raw(&Icon::Menu.svg("icon-md"));
        m.close("button");
        m.close("div");

        m.close("nav");
        self.drawer(menu, m);
        m.close("section");
    }

    fn brand(&self, m: &mut Markup) {
        m.open_class("div", "nav-brand");
        m.open_class("div", "brand-mark");
        m.element("div", "brand-mark-inner", "");
        m.close("div");
        m.open_class("div", "brand-text");
        m.editable("span", "brand-name", EditablePath::key("brandName"), &self.brand_name);
        m.editable(
            "span",
            "brand-tagline",
            EditablePath::key("brandTagline"),
            &self.brand_tagline,
        );
        m.close("div");
        m.close("div");
    }

    fn items(&self, m: &mut Markup, class: &str) {
        for (idx, item) in self.navigation_items.iter().enumerate() {
            let path = EditablePath::key("navigationItems").at(idx);
            m.open("li", &[]);
            m.open_link(
                "a",
                &[("class", class), ("data-nav", "")],
                path.clone().field("href"),
                &item.href,
            );
            m.editable("span", "", path.field("label"), &item.label);
            m.close("a");
            m.close("li");
        }
    }

    fn cta(&self, m: &mut Markup, class: &str) {
        m.open_link(
            "a",
            &[("class", class), ("data-nav", "")],
            EditablePath::key("ctaHref"),
            &self.cta_href,
        );
        m.editable("span", "", EditablePath::key("ctaText"), &self.cta_text);
        m.close("a");
    }

    fn drawer(&self, menu: MobileMenu, m: &mut Markup) {
        let mut overlay = vec![("class", "drawer-overlay"), ("data-menu-overlay", "")];
        let mut drawer = vec![
            ("id", DRAWER_ID),
            ("class", "drawer"),
            ("aria-label", "Menu"),
            ("data-menu", ""),
        ];
        if !menu.is_open() {
            overlay.push(("hidden", ""));
            drawer.push(("hidden", ""));
        }

        m.open("div", &overlay);
        m.close("div");

        m.open("aside", &drawer);
        m.open_class("div", "drawer-header");
        self.brand(m);
        m.open(
            "button",
            &[
                ("type", "button"),
                ("class", "btn btn-ghost btn-icon"),
                ("aria-label", "Close menu"),
                ("data-menu-close", ""),
            ],
        );
        m.raw(&Icon::X.svg("icon-md"));
        m.close("button");
        m.close("div");

        m.open_class("ul", "drawer-links");
        self.items(m, "drawer-link");
        m.close("ul");

        m.open_class("div", "drawer-footer");
        self.cta(m, "btn btn-primary btn-block");
        m.close("div");
        m.close("aside");
    }
}

impl Section for NavigationConfig {
    const KIND: SectionKind = SectionKind::Navigation;

    fn render(&self, m: &mut Markup) {
        self.render_with_menu(MobileMenu::default(), m);
    }
}
