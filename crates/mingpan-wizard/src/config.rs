//! Wizard configuration.

/// Shown on a busy control when no specific label is configured.
pub const DEFAULT_BUSY_LABEL: &str = "處理中…";

/// Endpoints and labels the controller uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    /// Path (or absolute URL) of the chart endpoint.
    pub chart_endpoint: String,
    /// Path (or absolute URL) of the result endpoint.
    pub result_endpoint: String,
    /// Label on the submit control while a chart request is pending.
    pub chart_busy_label: String,
    /// Label on the result control while a result request is pending.
    pub result_busy_label: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            chart_endpoint: "/api/chart".to_owned(),
            result_endpoint: "/api/result".to_owned(),
            chart_busy_label: "排盤中…".to_owned(),
            result_busy_label: "生成中…".to_owned(),
        }
    }
}
