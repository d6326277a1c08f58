//! nbformat "multiline string" fields.
//!
//! Text fields may be stored either as a single string or as a list of
//! lines. Lists are joined with no separator; each line already carries its
//! own trailing newline.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Multiline {
    Text(String),
    Lines(Vec<String>),
}

impl Multiline {
    fn into_string(self) -> String {
        match self {
            Multiline::Text(text) => text,
            Multiline::Lines(lines) => lines.concat(),
        }
    }
}

/// Deserialize a multiline field, treating `null` as an empty string.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_opt(deserializer)?.unwrap_or_default())
}

/// Deserialize an optional multiline field.
pub(crate) fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Multiline>::deserialize(deserializer)?.map(Multiline::into_string))
}

/// Join a JSON value holding a multiline string, if it is one.
pub(crate) fn join_value(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| item.as_str())
            .collect::<Option<Vec<_>>>()
            .map(|lines| lines.concat()),
        _ => None,
    }
}
