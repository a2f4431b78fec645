//! The transient wizard record.

use mingpan_chart::domain::chart::Chart;
use mingpan_chart::domain::question::Question;
use mingpan_chart::domain::requests::ChartResponse;

/// Session id, chart, and questions for the current page lifetime.
///
/// Empty at load, populated wholesale after a successful chart request,
/// cleared wholesale on restart. Fields are never patched individually, so a
/// new session id can never sit next to a stale chart.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WizardState {
    session_id: Option<String>,
    chart: Option<Chart>,
    questions: Vec<Question>,
}

impl WizardState {
    /// Replaces the whole record with the contents of a chart response.
    pub fn populate(&mut self, response: ChartResponse) {
        *self = Self {
            session_id: Some(response.session_id),
            chart: Some(response.chart),
            questions: response.verification_questions,
        };
    }

    /// Clears all three fields.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The session token, if a chart has been fetched.
    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// The last fetched chart.
    #[must_use]
    pub fn chart(&self) -> Option<&Chart> {
        self.chart.as_ref()
    }

    /// Questions in display order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Whether the record holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.session_id.is_none() && self.chart.is_none() && self.questions.is_empty()
    }
}
