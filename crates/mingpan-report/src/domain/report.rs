//! The generated report as returned by the result endpoint.
//!
//! Optional sub-fields are defaulted here, once, at decode time; renderers
//! never re-derive them.

use serde::{Deserialize, Deserializer};

/// Cross-check of the user's answers against the chart's expectations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastReview {
    /// Number of questions the user answered.
    pub answered: u32,
    /// Number of questions asked.
    pub total: u32,
    /// Number of answers that matched the expectation.
    pub matched: u32,
    /// Engine-computed match score.
    pub match_score: f64,
    /// Per-question review, in question order.
    #[serde(default)]
    pub items: Vec<ReviewItem>,
}

/// One reviewed verification question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    /// The question text.
    pub question: String,
    /// What the chart predicts.
    pub expected_yes: bool,
    /// What the user answered.
    pub your_answer: bool,
    /// Whether the two agree.
    pub matched: bool,
    /// Why the chart predicts what it does.
    pub rationale: String,
}

/// Headline interpretation of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureSummary {
    /// Element of the day master.
    pub day_master_element: String,
    /// Strength label of the day master.
    pub day_master_strength: String,
    /// Core interpretation points.
    #[serde(default)]
    pub focus: Vec<String>,
    /// Suggested actions.
    #[serde(default)]
    pub tips: Vec<String>,
}

/// Closed three-way classification of a projected year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TrendLevel {
    /// `順勢`: the year supports the day master.
    Favorable,
    /// `保守`: the year calls for caution.
    Cautious,
    /// Any other label.
    Steady,
}

impl TrendLevel {
    /// Classifies an engine label by exact match.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "順勢" => TrendLevel::Favorable,
            "保守" => TrendLevel::Cautious,
            _ => TrendLevel::Steady,
        }
    }

    /// Text printed in the badge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TrendLevel::Favorable => "順勢",
            TrendLevel::Cautious => "保守",
            TrendLevel::Steady => "平穩",
        }
    }

    /// Badge class: positive, negative, or neutral.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            TrendLevel::Favorable => "badge ok",
            TrendLevel::Cautious => "badge no",
            TrendLevel::Steady => "badge",
        }
    }
}

impl From<String> for TrendLevel {
    fn from(label: String) -> Self {
        TrendLevel::from_label(&label)
    }
}

/// Projection for a single year.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearProjection {
    /// Year label; numeric years are normalised to text.
    #[serde(deserialize_with = "label")]
    pub year: String,
    /// Element of that year.
    pub year_element: String,
    /// Strength classification.
    pub level: TrendLevel,
    /// Advice text.
    pub advice: String,
}

/// Forward-looking half of the report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Future {
    /// Confidence label derived from the match score.
    pub confidence: String,
    /// Headline interpretation.
    pub summary: FutureSummary,
    /// Per-year projections in display order.
    #[serde(default)]
    pub timeline: Vec<YearProjection>,
    /// Free-text disclaimer.
    #[serde(default)]
    pub note: Option<String>,
}

/// The full result payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPayload {
    /// Past verification review.
    pub past_review: PastReview,
    /// Future projection.
    pub future: Future,
}

fn label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Label::deserialize(deserializer)? {
        Label::Text(text) => text,
        Label::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mingpan_test_support::fixtures;

    #[test]
    fn test_trend_level_classifies_by_exact_match() {
        assert_eq!(TrendLevel::from_label("順勢"), TrendLevel::Favorable);
        assert_eq!(TrendLevel::from_label("保守"), TrendLevel::Cautious);
        assert_eq!(TrendLevel::from_label("平穩"), TrendLevel::Steady);
        assert_eq!(TrendLevel::from_label("順勢 "), TrendLevel::Steady);
        assert_eq!(TrendLevel::from_label(""), TrendLevel::Steady);
    }

    #[test]
    fn test_result_payload_decodes_engine_payload() {
        let payload: ResultPayload =
            serde_json::from_value(fixtures::result_json(2, 1)).unwrap();

        assert_eq!(payload.past_review.total, 2);
        assert_eq!(payload.past_review.matched, 1);
        assert_eq!(payload.past_review.items.len(), 2);
        assert_eq!(payload.future.timeline.len(), 3);
        assert_eq!(payload.future.timeline[0].level, TrendLevel::Favorable);
    }

    #[test]
    fn test_numeric_year_is_normalised_to_label() {
        let projection: YearProjection = serde_json::from_value(serde_json::json!({
            "year": 2027,
            "yearElement": "火",
            "level": "保守",
            "advice": "守成",
        }))
        .unwrap();

        assert_eq!(projection.year, "2027");
        assert_eq!(projection.level, TrendLevel::Cautious);
    }

    #[test]
    fn test_absent_optional_fields_default_at_decode() {
        let payload: ResultPayload = serde_json::from_value(serde_json::json!({
            "pastReview": { "answered": 0, "total": 1, "matched": 0, "matchScore": 0 },
            "future": {
                "confidence": "低",
                "summary": { "dayMasterElement": "水", "dayMasterStrength": "偏弱" },
            },
        }))
        .unwrap();

        assert!(payload.past_review.items.is_empty());
        assert!(payload.future.summary.focus.is_empty());
        assert!(payload.future.summary.tips.is_empty());
        assert!(payload.future.timeline.is_empty());
        assert!(payload.future.note.is_none());
    }
}
