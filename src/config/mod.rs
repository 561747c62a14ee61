pub mod fields;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::FormKind;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "form-guard")]
#[command(about = "Check rent-management form submissions against the client-side rules")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a serialized form submission
    Check {
        /// Form to validate (admin-login, tenant-login, add-tenant, add-payment, raise-complaint)
        #[arg(long)]
        form: FormKind,

        /// Field values as a JSON or TOML file
        #[arg(long)]
        fields: PathBuf,

        /// Rule overrides as a TOML file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<chrono::NaiveDate>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply the phone input mask to a value
    FormatPhone { value: String },

    /// Apply the two-decimal amount formatting to a value
    FormatCurrency { value: String },

    /// Print the effective rules as TOML
    Rules {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
