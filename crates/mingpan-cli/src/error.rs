//! Mingpan CLI — error types.

use mingpan_core::error::WizardError;
use mingpan_gateway::ConfigError;
use thiserror::Error;

/// Everything that makes the binary exit non-zero.
#[derive(Debug, Error)]
pub enum CliError {
    /// The engine URL is unusable.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A wizard action failed. The user has already been notified.
    #[error(transparent)]
    Wizard(#[from] WizardError),

    /// The answers file is not a YAML mapping.
    #[error("answers file error: {0}")]
    AnswersFile(#[from] serde_yaml::Error),

    /// An answers-file entry is neither yes nor no.
    #[error("answer for `{id}` must be yes or no, got `{value}`")]
    InvalidAnswer {
        /// Question id.
        id: String,
        /// The rejected value, as written.
        value: String,
    },

    /// Reading input or writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An action was skipped because its control was busy, or its response
    /// was discarded.
    #[error("{0} did not complete")]
    Incomplete(&'static str),
}

/// The line to print on exit, or `None` when the wizard already notified the
/// user.
#[must_use]
pub fn exit_message(err: &CliError) -> Option<String> {
    match err {
        CliError::Wizard(_) => None,
        other => Some(format!("mingpan: {other}")),
    }
}
