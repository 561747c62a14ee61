use anyhow::Context;
use clap::Parser;
use rent_form_guard::adapters::clock::SystemClock;
use rent_form_guard::config::fields::load_fields;
use rent_form_guard::core::forms::validate_json;
use rent_form_guard::core::formatters::{format_currency, format_phone};
use rent_form_guard::domain::ports::Clock;
use rent_form_guard::utils::logger;
use rent_form_guard::utils::validation::ValidationContext;
use rent_form_guard::{CliConfig, Command, GuardError, GuardRules};
use std::path::Path;
use std::process::ExitCode;

const EXIT_BLOCKED: u8 = 1;
const EXIT_INPUT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    match run(config.command) {
        Ok(code) => code,
        Err(e) => {
            match e.downcast_ref::<GuardError>() {
                Some(guard_error) => {
                    tracing::error!(category = ?guard_error.category(), "❌ {:#}", e);
                    eprintln!("❌ {}", guard_error.user_friendly_message());
                }
                None => {
                    tracing::error!("❌ {:#}", e);
                    eprintln!("❌ {:#}", e);
                }
            }
            ExitCode::from(EXIT_INPUT_ERROR)
        }
    }
}

fn run(command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Check {
            form,
            fields,
            config,
            today,
            json,
        } => {
            let rules = load_rules(config.as_deref())?;
            let fields = load_fields(&fields)
                .with_context(|| format!("loading field values from {}", fields.display()))?;
            let today = today.unwrap_or_else(|| SystemClock.today());
            let ctx = ValidationContext::new(&rules, today);

            let outcome = validate_json(form, fields, &ctx)?;

            if json {
                let report = match &outcome {
                    Ok(()) => serde_json::json!({ "form": form, "allowed": true }),
                    Err(e) => serde_json::json!({
                        "form": form,
                        "allowed": false,
                        "field": e.field(),
                        "message": e.to_string(),
                    }),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }

            match outcome {
                Ok(()) => {
                    tracing::info!(form = %form, "✅ submission allowed");
                    if !json {
                        println!("✅ {} submission allowed", form);
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    tracing::info!(form = %form, field = e.field(), "submission blocked");
                    if !json {
                        println!("❌ {} submission blocked: {}", form, e);
                    }
                    Ok(ExitCode::from(EXIT_BLOCKED))
                }
            }
        }
        Command::FormatPhone { value } => {
            println!("{}", format_phone(&value));
            Ok(ExitCode::SUCCESS)
        }
        Command::FormatCurrency { value } => {
            // 非數字或負數保持原樣
            println!("{}", format_currency(&value).unwrap_or(value));
            Ok(ExitCode::SUCCESS)
        }
        Command::Rules { config } => {
            let rules = load_rules(config.as_deref())?;
            print!("{}", rules.to_toml_string()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_rules(path: Option<&Path>) -> anyhow::Result<GuardRules> {
    match path {
        Some(path) => {
            tracing::info!("📁 Loading rules from: {}", path.display());
            GuardRules::from_file(path)
                .with_context(|| format!("loading rules from {}", path.display()))
        }
        None => Ok(GuardRules::default()),
    }
}
