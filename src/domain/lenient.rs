//! Forgiving field decoders for upstream results.
//!
//! A field holding `null` or a value of the wrong type decodes as absent
//! instead of failing the whole result.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::model::Tag;
use crate::utils::format::display_value;

/// Any value that does not decode as `T` becomes `None`.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Scalars print as text; `null` becomes an empty string.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(display_value(&value))
}

/// Non-arrays become an empty list; unreadable entries become empty rows
/// so the remaining tags keep their positions.
pub fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<Tag>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    };
    Ok(tags)
}
