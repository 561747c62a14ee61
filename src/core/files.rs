use crate::config::toml_config::FileRules;
use crate::domain::model::{FileDescriptor, FileField};
use crate::utils::error::ValidationError;
use crate::utils::validation::RuleResult;

pub const ALLOWED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// An absent file is valid; a present one must be an allowed image type
/// no larger than the configured ceiling. A file that carries its name must
/// also have an allowed extension.
pub fn validate_file(
    file: Option<&FileDescriptor>,
    field: FileField,
    rules: &FileRules,
) -> RuleResult {
    let Some(file) = file else {
        return Ok(());
    };

    let extension_ok = file.name.as_deref().map_or(true, has_allowed_extension);
    if !ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str()) || !extension_ok {
        return Err(ValidationError::UnsupportedFileType {
            field: field.input_id().to_string(),
            label: field.label().to_string(),
        });
    }

    if file.size > rules.max_size_bytes {
        return Err(ValidationError::FileTooLarge {
            field: field.input_id().to_string(),
            label: field.label().to_string(),
            limit_mb: rules.max_size_mb(),
        });
    }

    Ok(())
}

/// Extension allow-list the server applies to stored uploads.
pub fn has_allowed_extension(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, extension)) => {
            let extension = extension.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&extension.as_str())
        }
        None => false,
    }
}
