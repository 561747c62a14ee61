use crate::utils::error::{GuardError, Result};
use std::path::Path;

/// Reads a form submission from disk. `.toml` files are parsed as TOML,
/// anything else as JSON.
pub fn load_fields<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let fields: serde_json::Value = if is_toml {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };

    if !fields.is_object() {
        return Err(GuardError::InvalidInput {
            message: format!("{} must contain a table of field values", path.display()),
        });
    }

    Ok(fields)
}
