//! Request and response bodies for `POST /api/chart`.

use serde::{Deserialize, Serialize};

use super::chart::Chart;
use super::question::Question;

/// Birth data submitted to the chart engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    /// `YYYY-MM-DD`.
    pub birth_date: String,
    /// `HH` or `HH:MM`.
    pub birth_time: String,
    /// `male`, `female` or `other`.
    pub gender: String,
    /// Birth city; empty when not given.
    pub city: String,
}

/// The chart engine's answer: a session, its chart, and its questions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    /// Opaque session token for the follow-up result request.
    pub session_id: String,
    /// The computed chart.
    pub chart: Chart,
    /// Questions in display order; absent means none.
    #[serde(default)]
    pub verification_questions: Vec<Question>,
}
