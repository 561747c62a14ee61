use crate::utils::error::{GuardError, Result};
use crate::utils::validation::{validate_ordered_bounds, validate_positive_number};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

pub const DEFAULT_MAX_FILE_SIZE: u64 = 2 * 1024 * 1024;

/// Tunable limits of the form rules. Every section and field is optional in
/// the TOML file and falls back to the values the web app ships with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuardRules {
    pub tenant: TenantRules,
    pub complaint: ComplaintRules,
    pub files: FileRules,
    pub flash: FlashRules,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantRules {
    pub password_min_length: usize,
}

impl Default for TenantRules {
    fn default() -> Self {
        Self {
            password_min_length: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplaintRules {
    pub subject_min_length: usize,
    pub description_min_length: usize,
    pub description_max_length: usize,
}

impl Default for ComplaintRules {
    fn default() -> Self {
        Self {
            subject_min_length: 5,
            description_min_length: 10,
            description_max_length: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRules {
    pub max_size_bytes: u64,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            max_size_bytes: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl FileRules {
    /// Ceiling in whole MiB, as quoted in user messages.
    pub fn max_size_mb(&self) -> u64 {
        (self.max_size_bytes / (1024 * 1024)).max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashRules {
    pub display_ms: u64,
    pub fade_ms: u64,
    pub confirm_prompt: String,
}

impl Default for FlashRules {
    fn default() -> Self {
        Self {
            display_ms: 5000,
            fade_ms: 500,
            confirm_prompt: "Are you sure?".to_string(),
        }
    }
}

impl FlashRules {
    pub fn display(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

impl GuardRules {
    /// 從 TOML 檔案載入規則
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GuardError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析規則
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let rules: GuardRules = toml::from_str(&processed_content)?;
        rules.validate_config()?;
        Ok(rules)
    }

    /// 替換環境變數 (例如 ${MAX_UPLOAD_BYTES})
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_positive_number(
            "tenant.password_min_length",
            self.tenant.password_min_length as u64,
            1,
        )?;
        validate_positive_number("files.max_size_bytes", self.files.max_size_bytes, 1)?;
        validate_ordered_bounds(
            "complaint.description_min_length",
            self.complaint.description_min_length,
            self.complaint.description_max_length,
        )?;

        if self.flash.confirm_prompt.trim().is_empty() {
            return Err(GuardError::ConfigValidationError {
                field: "flash.confirm_prompt".to_string(),
                message: "Prompt cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GuardError::ConfigValidationError {
            field: "toml_serialization".to_string(),
            message: e.to_string(),
        })
    }
}
