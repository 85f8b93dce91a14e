//! Intermediate nested-mapping form of an element tree.
//!
//! Each element becomes `{tag: {"@attr": value, ..., child_tag: content}}`.
//! Attributes and children share one mapping level, so several children with
//! the same tag collapse into a single [`MarkupValue::List`] entry.

use crate::error::MJCFBuilderError;
use indexmap::IndexMap;
use tracing::trace;

/// Prefix marking a mapping key as an attribute.
pub const ATTRIBUTE_PREFIX: &str = "@";
/// Key holding a child's position among its siblings. Never emitted.
pub const ORDER_KEY: &str = "@__order__";

/// Tag prefixes the mapping form keeps for attribute and character-data keys.
const RESERVED_TAG_PREFIXES: [&str; 2] = [ATTRIBUTE_PREFIX, "#"];

/// Whether `tag` would be read back as something other than a child element.
pub fn is_reserved_tag(tag: &str) -> bool {
    RESERVED_TAG_PREFIXES
        .iter()
        .any(|prefix| tag.starts_with(prefix))
}

/// Whether an attribute named `name` would clash with an internal mapping key.
pub fn is_reserved_attribute(name: &str) -> bool {
    ORDER_KEY.strip_prefix(ATTRIBUTE_PREFIX) == Some(name)
}

pub type MarkupMap = IndexMap<String, MarkupValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum MarkupValue {
    Text(String),
    Map(MarkupMap),
    List(Vec<MarkupValue>),
}

impl MarkupValue {
    pub fn as_map(&self) -> Option<&MarkupMap> {
        match self {
            MarkupValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[MarkupValue]> {
        match self {
            MarkupValue::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MarkupValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Fold a one-key child mapping into its parent.
///
/// A new tag is inserted as is. A tag already present turns into a list, or
/// is appended to if it is one, keeping the children in attachment order.
pub fn merge_child(parent: &mut MarkupMap, child: MarkupMap) -> Result<(), MJCFBuilderError> {
    let count = child.len();
    let mut entries = child.into_iter();
    let (Some((key, value)), None) = (entries.next(), entries.next()) else {
        return Err(MJCFBuilderError::MalformedMapping(format!(
            "child mapping must have exactly one top-level key, found {}",
            count
        )));
    };

    match parent.get_mut(&key) {
        Some(MarkupValue::List(values)) => {
            trace!("appending {} to list of {}", key, values.len());
            values.push(value);
        }
        Some(existing) => {
            trace!("grouping repeated {} into a list", key);
            let previous = std::mem::replace(existing, MarkupValue::List(Vec::new()));
            *existing = MarkupValue::List(vec![previous, value]);
        }
        None => {
            parent.insert(key, value);
        }
    }

    Ok(())
}
