use serde_json::Value;

use crate::error::VersionError;

/// Pull the version out of a metadata document.
///
/// The body must be a JSON object. The field may hold a string, stored
/// exactly as served, or a bare number such as `3`. Empty or blank strings
/// and any other shape count as missing.
pub fn extract_version(body: &[u8], field: &str) -> Result<String, VersionError> {
    let doc: Value = serde_json::from_slice(body)?;
    let missing = || VersionError::MissingField {
        field: field.to_string(),
    };

    match doc.as_object().and_then(|obj| obj.get(field)) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(missing()),
    }
}
