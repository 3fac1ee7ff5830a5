//! JSON rendering of results.

use serde::Serialize;
use std::error::Error;

/// Render any serialisable result as compact JSON.
///
/// # Examples
/// ```
/// use ip_cidr_utils::output::to_json;
/// assert_eq!(to_json(&vec!["10.0.0.1"]).unwrap(), r#"["10.0.0.1"]"#);
/// ```
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, Box<dyn Error>> {
    serde_json::to_string(value).map_err(|e| format!("Error serializing JSON: {e}").into())
}

/// Render as indented JSON.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Error serializing JSON: {e}").into())
}
