//! Tolerant decoding for fields extraction never reads.
//!
//! A field that does not have the expected shape is dropped instead of
//! failing the whole document.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode an optional raw value, dropping it on a type mismatch.
pub(crate) fn decode<T: DeserializeOwned>(field: &str, value: Option<Value>) -> Option<T> {
    let value = value.filter(|value| !value.is_null())?;
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            log::debug!("Ignoring malformed `{}` field: {}", field, e);
            None
        }
    }
}
