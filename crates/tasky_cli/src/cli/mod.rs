use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tasky_core::config::ConfigOverrides;

#[derive(Parser, Debug)]
#[command(name = "tasky", author, version, about = "Your personal command-line task manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Override configuration values (format KEY=VALUE)
    #[arg(long = "config-override", value_name = "KEY=VALUE", global = true)]
    pub config_override: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task, reading it from stdin when no words are given
    ///
    /// Example: tasky add Buy milk -p High
    #[command(visible_alias = "a")]
    Add {
        description: Vec<String>,
        /// Low, Medium or High (anything else means Medium)
        #[arg(short, long, value_name = "PRIORITY")]
        priority: Option<String>,
    },
    /// Mark a task as completed
    ///
    /// Example: tasky done 1
    #[command(visible_aliases = ["complete", "c"])]
    Done { id: usize },
    /// Replace a task's description and optionally its priority
    ///
    /// Example: tasky edit 1 Buy oat milk -p Low
    #[command(visible_alias = "e")]
    Edit {
        id: usize,
        #[arg(required = true)]
        description: Vec<String>,
        /// Low, Medium or High; omitted keeps the current priority
        #[arg(short, long, value_name = "PRIORITY")]
        priority: Option<String>,
    },
    /// Delete a task; later tasks move up by one
    ///
    /// Example: tasky delete 2
    #[command(visible_aliases = ["remove", "rm", "r"])]
    Delete { id: usize },
    /// List all tasks
    ///
    /// Example: tasky list
    #[command(visible_aliases = ["ls", "l"])]
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOverrideTarget {
    StorePath,
    StrictComplete,
    Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedConfigOverride {
    pub target: ConfigOverrideTarget,
    pub value: String,
}

/// Parse a raw `KEY=VALUE` override string into a structured target.
pub fn parse_config_override(raw: &str) -> Result<ParsedConfigOverride, String> {
    let (key_raw, value_raw) = raw
        .trim()
        .split_once('=')
        .ok_or_else(|| "override must be in KEY=VALUE format".to_string())?;

    let key = canonicalize_field_name(key_raw);
    let target = match key.as_str() {
        "" => return Err("override key cannot be empty".to_string()),
        "store_path" | "store" => ConfigOverrideTarget::StorePath,
        "strict_complete" | "strict" => ConfigOverrideTarget::StrictComplete,
        "color" => ConfigOverrideTarget::Color,
        other => return Err(format!("unknown config field '{other}'")),
    };

    Ok(ParsedConfigOverride {
        target,
        value: value_raw.trim().to_string(),
    })
}

/// Lowercases and collapses every run of non-alphanumerics into one `_`.
fn canonicalize_field_name(raw: &str) -> String {
    let mut cleaned = String::new();
    let mut previous_underscore = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            cleaned.push(ch.to_ascii_lowercase());
            previous_underscore = false;
        } else if !previous_underscore && !cleaned.is_empty() {
            cleaned.push('_');
            previous_underscore = true;
        }
    }

    cleaned.trim_matches('_').to_string()
}

/// Folds every `--config-override` argument into one set of overrides.
/// Later values win.
pub fn collect_config_overrides(raw: &[String]) -> Result<ConfigOverrides, String> {
    let mut overrides = ConfigOverrides::default();

    for entry in raw {
        let parsed = parse_config_override(entry)?;
        match parsed.target {
            ConfigOverrideTarget::StorePath => {
                if parsed.value.is_empty() {
                    return Err("store_path override cannot be empty".to_string());
                }
                overrides.store_path = Some(PathBuf::from(parsed.value));
            }
            ConfigOverrideTarget::StrictComplete => {
                overrides.strict_complete = Some(parse_flag(&parsed.value)?);
            }
            ConfigOverrideTarget::Color => overrides.color = Some(parse_flag(&parsed.value)?),
        }
    }

    Ok(overrides)
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(format!("expected true or false, got '{other}'")),
    }
}
