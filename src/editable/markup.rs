//! HTML writer that records every editable mark it emits.
//!
//! Section renderers never write `data-editable*` attributes by hand. They go
//! through [`Markup::editable`], [`Markup::open_link`] and [`Markup::image`],
//! so the list returned by [`Markup::marks`] is exactly what the page
//! carries.

use super::EditablePath;
use crate::utils::html::{escape, escape_attr, is_void_element};
use serde::Serialize;

/// Attribute carrying the path of a text leaf.
pub const ATTR_TEXT: &str = "data-editable";
/// Attribute carrying the path of a link target.
pub const ATTR_HREF: &str = "data-editable-href";
/// Attribute carrying the literal link target currently in effect.
pub const ATTR_HREF_VALUE: &str = "data-href";
/// Attribute carrying the path of an image source.
pub const ATTR_SRC: &str = "data-editable-src";

/// What kind of leaf a mark was attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    Text,
    Href,
    Src,
}

/// One editable attribute emitted into the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mark {
    pub path: EditablePath,
    pub kind: MarkKind,
    /// Value rendered at this location
    pub value: String,
}

/// Append-only HTML buffer.
#[derive(Debug, Default)]
pub struct Markup {
    html: String,
    marks: Vec<Mark>,
}

impl Markup {
    pub fn new() -> Self {
        Self {
            html: String::with_capacity(16 * 1024),
            marks: Vec::new(),
        }
    }

    /// Write `<tag attr="value" ...>`.
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.html.push('<');
        self.html.push_str(tag);
        self.attrs(attrs);
        self.html.push('>');
    }

    /// Write `<tag class="...">`.
    pub fn open_class(&mut self, tag: &str, class: &str) {
        self.open(tag, &[("class", class)]);
    }

    /// Write `</tag>`. Void elements have no closing tag.
    pub fn close(&mut self, tag: &str) {
        if is_void_element(tag) {
            return;
        }
        self.html.push_str("</");
        self.html.push_str(tag);
        self.html.push('>');
    }

    /// Write `<tag class="...">text</tag>` with escaped text.
    pub fn element(&mut self, tag: &str, class: &str, text: &str) {
        self.open_class(tag, class);
        self.text(text);
        self.close(tag);
    }

    /// Write escaped text content.
    pub fn text(&mut self, text: &str) {
        self.html.push_str(&escape(text));
    }

    /// Write trusted markup verbatim (icons, doctype).
    pub fn raw(&mut self, html: &str) {
        self.html.push_str(html);
    }

    /// Write a text leaf tagged with its path.
    ///
    /// ```html
    /// <span class="..." data-editable="brandName">WorkforceMax</span>
    /// ```
    pub fn editable(&mut self, tag: &str, class: &str, path: EditablePath, value: &str) {
        let path_str = path.to_string();
        let mut attrs = Vec::with_capacity(2);
        if !class.is_empty() {
            attrs.push(("class", class));
        }
        attrs.push((ATTR_TEXT, path_str.as_str()));

        self.open(tag, &attrs);
        self.text(value);
        self.close(tag);
        self.mark(path, MarkKind::Text, value);
    }

    /// Open a link-bearing element tagged with the path of its target.
    ///
    /// Emits `href` plus the editor attribute pair. External targets open in
    /// a new browsing context without leaking opener or referrer. The caller
    /// writes the content and closes `tag`.
    pub fn open_link(&mut self, tag: &str, attrs: &[(&str, &str)], path: EditablePath, href: &str) {
        let path_str = path.to_string();
        let mut all: Vec<(&str, &str)> = Vec::with_capacity(attrs.len() + 5);
        if tag == "a" {
            all.push(("href", href));
            if crate::nav::Destination::classify(href).is_external() {
                all.push(("target", "_blank"));
                all.push(("rel", "noopener noreferrer"));
            }
        }
        all.extend_from_slice(attrs);
        all.push((ATTR_HREF, path_str.as_str()));
        all.push((ATTR_HREF_VALUE, href));

        self.open(tag, &all);
        self.mark(path, MarkKind::Href, href);
    }

    /// Write an `<img>` whose source is editable.
    pub fn image(&mut self, attrs: &[(&str, &str)], path: EditablePath, src: &str) {
        let path_str = path.to_string();
        let mut all: Vec<(&str, &str)> = Vec::with_capacity(attrs.len() + 2);
        all.push(("src", src));
        all.extend_from_slice(attrs);
        all.push((ATTR_SRC, path_str.as_str()));

        self.open("img", &all);
        self.mark(path, MarkKind::Src, src);
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    pub fn into_parts(self) -> (String, Vec<Mark>) {
        (self.html, self.marks)
    }

    fn attrs(&mut self, attrs: &[(&str, &str)]) {
        for (name, value) in attrs {
            self.html.push(' ');
            self.html.push_str(name);
            self.html.push_str("=\"");
            self.html.push_str(&escape_attr(value));
            self.html.push('"');
        }
    }

    fn mark(&mut self, path: EditablePath, kind: MarkKind, value: &str) {
        self.marks.push(Mark {
            path,
            kind,
            value: value.to_string(),
        });
    }
}
