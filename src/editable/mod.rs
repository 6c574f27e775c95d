//! Editable-path tagging.
//!
//! Every rendered text, link or image leaf carries an attribute naming the
//! configuration field it came from, so a visual editor can locate the
//! element, rewrite the field, and re-render.
//!
//! | Attribute            | Leaf  | Value                          |
//! |----------------------|-------|--------------------------------|
//! | `data-editable`      | text  | path, e.g. `keyBenefits[0]`    |
//! | `data-editable-href` | link  | path, e.g. `ctaHref`           |
//! | `data-href`          | link  | literal destination in effect  |
//! | `data-editable-src`  | image | path, e.g. `heroImageUrl`      |

mod markup;
mod path;
mod resolve;

pub use markup::{Mark, MarkKind, Markup};
pub use path::{EditablePath, PathError, Segment};
pub use resolve::{apply_edit, resolve};
