//! Page sections.
//!
//! Each section owns a configuration struct with a complete default and a
//! matching override struct in which every top-level key is optional. The
//! rendered configuration is always `default.merge(override)`:
//!
//! - a key present in the override wins,
//! - a missing key keeps the default,
//! - sequences and records are replaced wholesale, never merged element-wise.
//!
//! | Section      | Config              | Anchor id     |
//! |--------------|---------------------|---------------|
//! | `navigation` | `NavigationConfig`  | `#navigation` |
//! | `hero`       | `HeroConfig`        | `#hero`       |
//! | `contact`    | `ContactConfig`     | `#contact`    |
//! | `footer`     | `FooterConfig`      | `#footer`     |

/// Declare a section configuration and its override.
///
/// Generates the config struct, an `Override` struct with the same fields
/// wrapped in `Option`, and the shallow `Merge` impl between them. Both
/// serialize with camelCase keys so serialized keys equal editable paths.
macro_rules! section_config {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $patch:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident: $ty:ty,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )+
        }

        #[doc = concat!("Partial [`", stringify!($name), "`]: every key is optional.")]
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct $patch {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
        }

        impl $crate::section::Merge for $name {
            type Override = $patch;

            fn merge(self, patch: $patch) -> Self {
                Self {
                    $( $field: patch.$field.unwrap_or(self.$field), )+
                }
            }
        }
    };
}

pub mod contact;
pub mod footer;
pub mod hero;
pub mod navigation;

pub use contact::ContactConfig;
pub use footer::FooterConfig;
pub use hero::HeroConfig;
pub use navigation::NavigationConfig;

use crate::editable::{Mark, Markup};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Last-value-wins join of a configuration with a partial override.
pub trait Merge: Sized {
    type Override: Default;

    fn merge(self, patch: Self::Override) -> Self;
}

/// Shallow merge: `merge(d, o)[k] == o[k]` when `o` has `k`, else `d[k]`.
pub fn merge<C: Merge>(default: C, patch: C::Override) -> C {
    default.merge(patch)
}

/// A renderable page section.
pub trait Section: Merge + Default + Serialize + DeserializeOwned {
    const KIND: SectionKind;

    /// Render the section's markup, tagging every editable leaf.
    fn render(&self, m: &mut Markup);

    /// Build the section from its default and an override.
    fn with_override(patch: Self::Override) -> Self {
        merge(Self::default(), patch)
    }

    /// Every editable mark this configuration renders, in document order.
    fn marks(&self) -> Vec<Mark> {
        let mut m = Markup::new();
        self.render(&mut m);
        m.into_parts().1
    }
}

/// The four sections of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Navigation,
    Hero,
    Contact,
    Footer,
}

impl SectionKind {
    /// Page order.
    pub const ALL: [Self; 4] = [Self::Navigation, Self::Hero, Self::Contact, Self::Footer];

    /// Element id of the section root and name of its config table.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Hero => "hero",
            Self::Contact => "contact",
            Self::Footer => "footer",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// `{label, href}` pair shared by navigation and footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub label: String,
    pub href: String,
}

impl LinkItem {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// `{icon, title, description}` card shared by hero and contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl FeatureItem {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Property checks shared by the section tests.

    use super::Section;
    use crate::editable::{EditablePath, Mark, resolve};
    use rustc_hash::FxHashMap;

    /// Every mark resolves to the value it rendered, and a path repeated
    /// across the page (desktop and mobile copies) always carries the same
    /// value, so no two distinct fields share a path.
    pub fn assert_marks_resolve<S: Section>(section: &S) {
        let tree = serde_json::to_value(section).unwrap();
        let mut seen: FxHashMap<EditablePath, String> = FxHashMap::default();

        for Mark { path, value, .. } in section.marks() {
            let resolved = resolve(&tree, &path)
                .unwrap_or_else(|| panic!("`{path}` does not resolve"))
                .as_str()
                .unwrap_or_else(|| panic!("`{path}` is not a string leaf"));
            assert_eq!(resolved, value, "`{path}` rendered a stale value");

            if let Some(previous) = seen.insert(path.clone(), value.clone()) {
                assert_eq!(previous, value, "`{path}` emitted for two fields");
            }
        }
    }

    /// Sorted, deduplicated path strings of a render.
    pub fn path_set<S: Section>(section: &S) -> Vec<String> {
        let mut paths: Vec<String> = section.marks().iter().map(|m| m.path.to_string()).collect();
        paths.sort();
        paths.dedup();
        paths
    }
}
