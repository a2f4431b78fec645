//! Request body for `POST /api/result`.

use std::collections::BTreeMap;

use serde::Serialize;

/// Answers keyed by question id: `true` for yes, `false` for no.
///
/// Unanswered questions are absent, not `false`.
pub type AnswerMap = BTreeMap<String, bool>;

/// The session plus the user's answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRequest {
    /// Token issued by the chart endpoint.
    pub session_id: String,
    /// Collected answers.
    pub answers: AnswerMap,
}
