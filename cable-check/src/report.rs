use cabling_core::{format_summary, format_text, Report, TextOptions};
use colored::Colorize;

/// Render one device report for terminal output.
pub fn render_report(report: &Report, opts: TextOptions) -> String {
    let mut out = Vec::new();
    out.push(
        format!(
            "device {} desired={} existing={}",
            report.device,
            report.desired.len(),
            report.existing.len()
        )
        .bold()
        .to_string(),
    );

    let raw = format_text(&report.result, opts);
    for line in raw.lines() {
        let colored = if line.starts_with('=') {
            line.green().to_string()
        } else if line.starts_with('+') {
            line.magenta().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else if line.starts_with('~') {
            line.yellow().to_string()
        } else {
            line.to_string()
        };
        out.push(colored);
    }

    out.join("\n")
}

/// Render status counts for terminal output.
pub fn render_summary(report: &Report) -> String {
    format_summary(&report.result).cyan().to_string()
}
