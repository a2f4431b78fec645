//! Verification questions.

use serde::Deserialize;

/// A yes/no question whose expected answer the engine derived from the chart.
///
/// The id is unique within one session; it doubles as the radio group name
/// and as the answer-map key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    /// Session-scoped unique token.
    pub id: String,
    /// The prompt shown to the user.
    pub text: String,
}
