//! Page shell.
//!
//! Assembles the four sections into one HTML document:
//!
//! ```text
//! <html lang>
//!   <head>  title, description, stylesheet, client runtime
//!   <body>
//!     navigation
//!     <main> hero, contact </main>
//!     footer
//! ```
//!
//! Each section renders into its own [`Markup`], so the editable marks of a
//! page stay grouped by the section whose configuration they address.

use crate::config::SiteConfig;
use crate::editable::{Mark, Markup};
use crate::nav::MobileMenu;
use crate::section::contact::ContactForm;
use crate::section::{
    ContactConfig, FooterConfig, HeroConfig, NavigationConfig, Section, SectionKind,
};
use crate::utils::html::{escape, escape_attr};
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Output path of the stylesheet, relative to the output directory.
pub const STYLESHEET_PATH: &str = "assets/site.css";
/// Output path of the client runtime, relative to the output directory.
pub const SCRIPT_PATH: &str = "assets/site.js";

/// The merged configuration of every section.
#[derive(Debug, Clone, PartialEq)]
pub struct Sections {
    pub navigation: NavigationConfig,
    pub hero: HeroConfig,
    pub contact: ContactConfig,
    pub footer: FooterConfig,
}

impl Sections {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            navigation: config.navigation(),
            hero: config.hero(),
            contact: config.contact(),
            footer: config.footer(),
        }
    }

    /// Editable marks of one section.
    pub fn marks(&self, kind: SectionKind) -> Vec<Mark> {
        match kind {
            SectionKind::Navigation => self.navigation.marks(),
            SectionKind::Hero => self.hero.marks(),
            SectionKind::Contact => self.contact.marks(),
            SectionKind::Footer => self.footer.marks(),
        }
    }
}

/// Marks emitted by one section.
#[derive(Debug, Clone, Serialize)]
pub struct SectionMarks {
    pub section: SectionKind,
    pub marks: Vec<Mark>,
}

/// A rendered page.
#[derive(Debug, Clone)]
pub struct Page {
    pub html: String,
    pub marks: Vec<SectionMarks>,
}

impl Page {
    pub fn marks_of(&self, kind: SectionKind) -> &[Mark] {
        self.marks
            .iter()
            .find(|s| s.section == kind)
            .map_or(&[], |s| s.marks.as_slice())
    }

    /// Number of distinct editable fields. A field rendered twice (desktop
    /// and mobile copies) counts once.
    pub fn field_count(&self) -> usize {
        self.marks
            .iter()
            .flat_map(|s| s.marks.iter().map(move |mark| (s.section, &mark.path)))
            .collect::<FxHashSet<_>>()
            .len()
    }
}

/// Render the page as first served: menu closed, empty form.
pub fn render_page(config: &SiteConfig) -> Page {
    let sections = Sections::from_config(config);
    let mut body = String::new();
    let mut marks = Vec::with_capacity(SectionKind::ALL.len());

    let mut emit = |kind: SectionKind, render: &dyn Fn(&mut Markup), body: &mut String| {
        let mut m = Markup::new();
        render(&mut m);
        let (html, section_marks) = m.into_parts();
        body.push_str(&html);
        marks.push(SectionMarks {
            section: kind,
            marks: section_marks,
        });
    };

    emit(
        SectionKind::Navigation,
        &|m| sections.navigation.render_with_menu(MobileMenu::default(), m),
        &mut body,
    );
    body.push_str("<main>");
    emit(SectionKind::Hero, &|m| sections.hero.render(m), &mut body);
    emit(
        SectionKind::Contact,
        &|m| {
            sections
                .contact
                .render_with(&ContactForm::default(), &config.form, m)
        },
        &mut body,
    );
    body.push_str("</main>");
    emit(SectionKind::Footer, &|m| sections.footer.render(m), &mut body);

    Page {
        html: document(config, &body),
        marks,
    }
}

fn document(config: &SiteConfig, body: &str) -> String {
    let site = &config.site;
    let mut html = String::with_capacity(body.len() + 512);

    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"{}\">\n", escape_attr(&site.language)));
    html.push_str("<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&site.title)));
    html.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape_attr(&site.description)
    ));
    if let Some(url) = &site.url {
        html.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\">\n",
            escape_attr(url)
        ));
    }
    html.push_str(&format!("<link rel=\"stylesheet\" href=\"{STYLESHEET_PATH}\">\n"));
    html.push_str(&format!("<script src=\"{SCRIPT_PATH}\" defer></script>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(body);
    html.push_str("\n</body>\n</html>\n");
    html
}
