use crate::reconcile::{Diagnostic, LinkStatus};

/// Configures plain text rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// Print the status strings of older cabling reports instead of wire codes.
    pub legacy_status: bool,
}

/// Format diagnostics as plain text, one line per row.
pub fn format_text(entries: &[Diagnostic], opts: TextOptions) -> String {
    let mut lines = Vec::with_capacity(entries.len());
    for entry in entries {
        let marker = match entry.status {
            LinkStatus::Ok => '=',
            LinkStatus::NeighborMismatch | LinkStatus::NeighborInterfaceMismatch => '~',
            LinkStatus::MissingInObserved => '-',
            LinkStatus::UndocumentedObserved => '+',
        };
        let status = if opts.legacy_status {
            entry.legacy_status()
        } else {
            format!("[{}] {}", entry.status, entry.message)
        };
        lines.push(format!(
            "{marker} {} -> {} {} {status}",
            entry.local_interface, entry.neighbor, entry.neighbor_interface
        ));
    }
    lines.join("\n")
}

/// Format a simple summary of diagnostic counts.
pub fn format_summary(entries: &[Diagnostic]) -> String {
    let mut ok = 0;
    let mut neighbor_mismatch = 0;
    let mut interface_mismatch = 0;
    let mut missing = 0;
    let mut undocumented = 0;

    for entry in entries {
        match entry.status {
            LinkStatus::Ok => ok += 1,
            LinkStatus::NeighborMismatch => neighbor_mismatch += 1,
            LinkStatus::NeighborInterfaceMismatch => interface_mismatch += 1,
            LinkStatus::MissingInObserved => missing += 1,
            LinkStatus::UndocumentedObserved => undocumented += 1,
        }
    }

    format!(
        "ok={ok} neighbor_mismatch={neighbor_mismatch} neighbor_interface_mismatch={interface_mismatch} missing={missing} undocumented={undocumented}"
    )
}
