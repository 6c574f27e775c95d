//! Editable path addresses.
//!
//! A path names one field of a section configuration using the same keys the
//! configuration serializes with:
//!
//! ```text
//! brandName
//! keyBenefits[2]
//! contactMethods[1].value
//! ```

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One step of an editable path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    /// Object key (`brandName`, `.href`)
    Key(String),
    /// Sequence index (`[1]`)
    Index(usize),
}

/// Address of a single configuration field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EditablePath {
    segments: Vec<Segment>,
}

impl EditablePath {
    /// Path to a top-level key.
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Key(key.into())],
        }
    }

    /// Append a sequence index: `key` → `key[i]`.
    pub fn at(mut self, index: usize) -> Self {
        self.segments.push(Segment::Index(index));
        self
    }

    /// Append a record field: `key[i]` → `key[i].field`.
    pub fn field(mut self, key: impl Into<String>) -> Self {
        self.segments.push(Segment::Key(key.into()));
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The top-level configuration key this path lives under.
    ///
    /// Overrides replace whole top-level keys, so this is the key an edit
    /// has to persist.
    pub fn root_key(&self) -> &str {
        match self.segments.first() {
            Some(Segment::Key(key)) => key,
            _ => "",
        }
    }
}

impl fmt::Display for EditablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{key}")?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for EditablePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Malformed editable path string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path is empty")]
    Empty,

    #[error("unexpected `{ch}` at offset {offset}")]
    Unexpected { ch: char, offset: usize },

    #[error("expected a key at offset {0}")]
    MissingKey(usize),

    #[error("invalid index `{0}`")]
    BadIndex(String),

    #[error("unterminated `[` at offset {0}")]
    Unterminated(usize),
}

impl FromStr for EditablePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }

        let bytes = s.as_bytes();
        let mut segments = Vec::new();
        let mut pos = 0;

        // Leading key is mandatory
        let (key, next) = take_key(s, pos)?;
        segments.push(Segment::Key(key));
        pos = next;

        while pos < bytes.len() {
            match bytes[pos] {
                b'.' => {
                    let (key, next) = take_key(s, pos + 1)?;
                    segments.push(Segment::Key(key));
                    pos = next;
                }
                b'[' => {
                    let close = s[pos..]
                        .find(']')
                        .map(|i| pos + i)
                        .ok_or(PathError::Unterminated(pos))?;
                    let digits = &s[pos + 1..close];
                    let index = digits
                        .parse::<usize>()
                        .ok()
                        .filter(|_| digits.bytes().all(|b| b.is_ascii_digit()))
                        .ok_or_else(|| PathError::BadIndex(digits.to_string()))?;
                    segments.push(Segment::Index(index));
                    pos = close + 1;
                }
                _ => {
                    let ch = s[pos..].chars().next().unwrap_or_default();
                    return Err(PathError::Unexpected { ch, offset: pos });
                }
            }
        }

        Ok(Self { segments })
    }
}

/// Read an identifier (`[A-Za-z_][A-Za-z0-9_]*`) starting at `start`.
fn take_key(s: &str, start: usize) -> Result<(String, usize), PathError> {
    let rest = &s[start..];
    let len = rest
        .char_indices()
        .find(|&(i, c)| !(c == '_' || c.is_ascii_alphabetic() || (i > 0 && c.is_ascii_digit())))
        .map_or(rest.len(), |(i, _)| i);

    if len == 0 {
        return Err(PathError::MissingKey(start));
    }
    Ok((rest[..len].to_string(), start + len))
}
