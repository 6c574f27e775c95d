//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Generated per section with `config_fields!`:
///
/// ```ignore
/// config_fields!(ServeConfig => ServeFields, "serve" { interface, port });
///
/// // Usage:
/// diag.error(ServeConfig::FIELDS.port, "must not be 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Declare `Type::FIELDS`, one `FieldPath` per listed field.
macro_rules! config_fields {
    ($ty:ident => $fields:ident, $section:literal { $($field:ident),+ $(,)? }) => {
        #[doc = concat!("Field paths of `[", $section, "]`.")]
        #[derive(Debug, Clone, Copy)]
        pub struct $fields {
            $(pub $field: $crate::config::FieldPath,)+
        }

        impl $ty {
            pub const FIELDS: $fields = $fields {
                $($field: $crate::config::FieldPath::new(concat!($section, ".", stringify!($field))),)+
            };
        }
    };
}

pub(crate) use config_fields;
