//! Path resolution against a serialized section configuration.
//!
//! This is the editor round trip: `path → new value → re-render`. A section
//! is serialized to JSON, the path is walked, the leaf replaced, and the
//! result deserialized back so a value of the wrong shape is rejected.

use super::{EditablePath, PathError, Segment};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

/// Editor request that cannot be applied.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("invalid path: {0}")]
    Path(#[from] PathError),

    #[error("`{0}` does not name a field of this section")]
    Unresolved(EditablePath),

    #[error("`{path}` only accepts a {expected} value")]
    Shape {
        path: EditablePath,
        expected: &'static str,
    },

    #[error("edited configuration is invalid")]
    Serde(#[from] serde_json::Error),
}

/// Find the value addressed by `path`.
pub fn resolve<'a>(root: &'a Value, path: &EditablePath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(root, |node, segment| match segment {
            Segment::Key(key) => node.as_object()?.get(key),
            Segment::Index(index) => node.as_array()?.get(*index),
        })
}

fn resolve_mut<'a>(root: &'a mut Value, path: &EditablePath) -> Option<&'a mut Value> {
    path.segments()
        .iter()
        .try_fold(root, |node, segment| match segment {
            Segment::Key(key) => node.as_object_mut()?.get_mut(key),
            Segment::Index(index) => node.as_array_mut()?.get_mut(*index),
        })
}

/// Result of applying one edit to a section.
#[derive(Debug, Clone)]
pub struct Edit<C> {
    /// Section configuration with the edit applied
    pub config: C,
    /// Top-level key the override has to carry
    pub key: String,
    /// Full replacement value for `key`
    pub value: Value,
}

/// Replace the field at `path` with `value`.
///
/// Overrides are merged shallowly, so the returned `key`/`value` pair is the
/// whole top-level entry. Editing `keyBenefits[1]` yields the complete
/// `keyBenefits` sequence.
pub fn apply_edit<C>(config: &C, path: &EditablePath, value: Value) -> Result<Edit<C>, EditError>
where
    C: Serialize + DeserializeOwned,
{
    let mut tree = serde_json::to_value(config)?;

    let slot = resolve_mut(&mut tree, path).ok_or_else(|| EditError::Unresolved(path.clone()))?;
    if let Some(expected) = shape_mismatch(slot, &value) {
        return Err(EditError::Shape {
            path: path.clone(),
            expected,
        });
    }
    *slot = value;

    let key = path.root_key().to_string();
    let value = tree
        .get(&key)
        .cloned()
        .ok_or_else(|| EditError::Unresolved(path.clone()))?;
    let config = serde_json::from_value(tree)?;

    Ok(Edit { config, key, value })
}

/// Name of the expected JSON type when `new` cannot replace `old`.
fn shape_mismatch(old: &Value, new: &Value) -> Option<&'static str> {
    let expected = match old {
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "table",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::Null => return None,
    };
    let same = std::mem::discriminant(old) == std::mem::discriminant(new);
    (!same).then_some(expected)
}
