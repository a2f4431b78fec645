//! Command-line arguments.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, ValueEnum};

/// Engine base URL used when neither the flag nor the environment sets one.
pub const DEFAULT_ENGINE_URL: &str = "http://127.0.0.1:8000";

/// Birth data and host options for one wizard run.
#[derive(Debug, Parser)]
#[command(name = "mingpan")]
#[command(about = "Cast a chart, answer its questions, print the report", long_about = None)]
#[command(version)]
pub struct Args {
    /// Birth date, `YYYY-MM-DD`.
    #[arg(long, value_parser = parse_birth_date)]
    pub birth_date: String,

    /// Birth time, `HH` or `HH:MM` (24h).
    #[arg(long, value_parser = parse_birth_time)]
    pub birth_time: String,

    /// Gender as the engine expects it.
    #[arg(long, value_enum)]
    pub gender: Gender,

    /// Birth city, display only.
    #[arg(long, default_value = "")]
    pub city: String,

    /// YAML mapping of question id to `yes`/`no`. Prompts on stdin when absent.
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Write the report markup here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Base URL of the chart engine.
    #[arg(long, env = "MINGPAN_ENGINE_URL", default_value = DEFAULT_ENGINE_URL)]
    pub engine_url: String,

    /// Emit logs as JSON.
    #[arg(long)]
    pub log_json: bool,
}

/// Accepted `--gender` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// The form value the engine expects.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

fn parse_birth_date(value: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| value.to_owned())
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_birth_time(value: &str) -> Result<String, String> {
    let valid = if value.contains(':') {
        NaiveTime::parse_from_str(value, "%H:%M").is_ok()
    } else {
        value.len() <= 2 && value.parse::<u32>().is_ok_and(|hour| hour < 24)
    };
    if valid {
        Ok(value.to_owned())
    } else {
        Err(format!("expected HH or HH:MM (24h), got `{value}`"))
    }
}
