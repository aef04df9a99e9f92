use crate::reconcile::Report;

/// Format a report envelope as JSON.
pub fn format_json(report: &Report) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}
