//! Payload field readers shared by the validating entity constructors.
//!
//! Validation is two-pass: every required key is checked for presence
//! before any key is checked for type. A key counts as missing when it is
//! absent, `null`, or an empty string.

use serde_json::{Map, Value};

use super::DomainError;

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Reads `keys` from `payload` as strings, in order.
///
/// # Errors
///
/// - `MissingProperty` (`<entity>.NOT_CONTAIN_NEEDED_PROPERTY`) if any key is
///   missing, or the payload is not a JSON object
/// - `WrongDataType` (`<entity>.NOT_MEET_DATA_TYPE_SPECIFICATION`) if any
///   key holds a non-string value
pub fn require_strings<'a, const N: usize>(
    entity: &str,
    payload: &'a Value,
    keys: [&str; N],
) -> Result<[&'a str; N], DomainError> {
    let object = payload
        .as_object()
        .ok_or_else(|| DomainError::missing_property(entity))?;

    if keys.iter().any(|key| is_missing(object.get(*key))) {
        return Err(DomainError::missing_property(entity));
    }

    let mut fields = [""; N];
    for (slot, key) in fields.iter_mut().zip(keys.iter()) {
        *slot = object
            .get(*key)
            .and_then(Value::as_str)
            .ok_or_else(|| DomainError::wrong_data_type(entity))?;
    }
    Ok(fields)
}

/// Returns `body` with `fields` inserted, overriding any client-supplied
/// values under the same keys.
///
/// A body that is not a JSON object is replaced by an empty object so that
/// the entity constructor reports the missing properties.
pub fn with_fields<const N: usize>(body: Value, fields: [(&str, &str); N]) -> Value {
    let mut object = match body {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    for (key, value) in fields {
        object.insert(key.to_string(), Value::String(value.to_string()));
    }
    Value::Object(object)
}
