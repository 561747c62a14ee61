use thiserror::Error;

/// A user-input rule violation. `Display` is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields { field: String },

    #[error("Please fill in all required fields")]
    MissingRequiredFields { field: String },

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Monthly rent must be greater than 0")]
    NonPositiveRent,

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("Invalid amount format")]
    InvalidDepositAmount,

    #[error("Invalid deposit paid date format")]
    InvalidDepositDate,

    #[error("Amount must be greater than 0")]
    NonPositiveAmount,

    #[error("Please enter a valid payment date")]
    InvalidPaymentDate,

    #[error("Payment date cannot be in the future")]
    FuturePaymentDate,

    #[error("Subject must be at least {min} characters long")]
    SubjectTooShort { min: usize },

    #[error("Description must be at least {min} characters long")]
    DescriptionTooShort { min: usize },

    #[error("Description is too long (maximum {max} characters)")]
    DescriptionTooLong { max: usize },

    #[error("{label} must be a JPG, JPEG, or PNG file")]
    UnsupportedFileType { field: String, label: String },

    #[error("{label} must be less than {limit_mb}MB")]
    FileTooLarge {
        field: String,
        label: String,
        limit_mb: u64,
    },
}

impl ValidationError {
    /// Name of the form field the violation is about.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingFields { field }
            | ValidationError::MissingRequiredFields { field }
            | ValidationError::UnsupportedFileType { field, .. }
            | ValidationError::FileTooLarge { field, .. } => field.as_str(),
            ValidationError::InvalidEmail => "email",
            ValidationError::InvalidPhone => "phone",
            ValidationError::NonPositiveRent => "monthly_rent",
            ValidationError::PasswordTooShort { .. } => "password",
            ValidationError::InvalidDepositAmount => "deposit_amount",
            ValidationError::InvalidDepositDate => "deposit_paid_date",
            ValidationError::NonPositiveAmount => "amount",
            ValidationError::InvalidPaymentDate | ValidationError::FuturePaymentDate => {
                "payment_date"
            }
            ValidationError::SubjectTooShort { .. } => "subject",
            ValidationError::DescriptionTooShort { .. }
            | ValidationError::DescriptionTooLong { .. } => "description",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl GuardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GuardError::IoError(_) => ErrorCategory::System,
            GuardError::SerializationError(_)
            | GuardError::InvalidInput { .. }
            | GuardError::Validation(_) => ErrorCategory::Input,
            GuardError::TomlError(_) | GuardError::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GuardError::IoError(e) => format!("Could not read file: {}", e),
            GuardError::SerializationError(e) => format!("Could not parse form fields: {}", e),
            GuardError::TomlError(e) => format!("Could not parse TOML: {}", e),
            GuardError::ConfigValidationError { field, message } => {
                format!("Rule '{}' is invalid: {}", field, message)
            }
            GuardError::InvalidInput { message } => message.clone(),
            GuardError::Validation(e) => e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GuardError>;
