pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{FixedClock, MemoryDocument, SystemClock};
pub use config::toml_config::GuardRules;
pub use crate::core::{attach_validators, FormGuard};
pub use utils::error::{GuardError, Result, ValidationError};
