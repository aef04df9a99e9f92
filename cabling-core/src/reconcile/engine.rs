use std::collections::HashSet;

use thiserror::Error;

use crate::model::{LinkRecord, TopologyDocument};
use crate::reconcile::result::{Diagnostic, LinkStatus, Report};

/// Errors raised before any link is compared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// The device has no documented links to check against.
    #[error("{message} (device '{device}')")]
    NotFound { device: String, message: String },
}

/// Where undocumented observed links land in the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UndocumentedPlacement {
    /// At the point of the scan where each one is first reached.
    #[default]
    Interleaved,
    /// After every intended link, in observed order.
    Trailing,
}

/// Configures reconciliation behavior.
#[derive(Debug, Clone, Default)]
pub struct ReconcileOptions {
    pub undocumented: UndocumentedPlacement,
}

/// Reconcile two link lists with default options.
pub fn reconcile(intended: &[LinkRecord], observed: &[LinkRecord]) -> Vec<Diagnostic> {
    reconcile_with_options(intended, observed, &ReconcileOptions::default())
}

/// Reconcile two link lists with custom options.
///
/// Every intended link yields exactly one diagnostic. Every observed link whose
/// local interface appears nowhere in `intended` yields exactly one
/// [`LinkStatus::UndocumentedObserved`] diagnostic. Only the first observed
/// record for a local interface takes part; later duplicates are ignored.
pub fn reconcile_with_options(
    intended: &[LinkRecord],
    observed: &[LinkRecord],
    opts: &ReconcileOptions,
) -> Vec<Diagnostic> {
    let intended_ifaces: HashSet<&str> = intended
        .iter()
        .map(|link| link.local_interface.as_str())
        .collect();

    // Marks the first observed record of each local interface.
    let mut seen = HashSet::new();
    let primary: Vec<bool> = observed
        .iter()
        .map(|link| seen.insert(link.local_interface.as_str()))
        .collect();
    let observed_ifaces = seen;

    let mut unclaimed: HashSet<&str> = observed_ifaces
        .difference(&intended_ifaces)
        .copied()
        .collect();

    let mut out = Vec::with_capacity(intended.len() + unclaimed.len());

    for desired in intended {
        let mut matched = false;
        for (idx, existing) in observed.iter().enumerate() {
            if !primary[idx] {
                continue;
            }
            if existing.local_interface == desired.local_interface {
                if !matched {
                    matched = true;
                    out.push(classify(desired, existing));
                }
            } else if opts.undocumented == UndocumentedPlacement::Interleaved
                && unclaimed.remove(existing.local_interface.as_str())
            {
                out.push(undocumented(existing));
            }
        }

        if !observed_ifaces.contains(desired.local_interface.as_str()) {
            out.push(Diagnostic::anchored(
                desired,
                LinkStatus::MissingInObserved,
                "documented in intended, not found in observed".to_string(),
            ));
        }
    }

    // Trailing placement, and interleaved runs that never scanned (empty intended).
    for (idx, existing) in observed.iter().enumerate() {
        if primary[idx] && unclaimed.remove(existing.local_interface.as_str()) {
            out.push(undocumented(existing));
        }
    }

    out
}

/// Look up `device` in `document` and reconcile its links against `observed`.
pub fn reconcile_device(
    document: &TopologyDocument,
    device: &str,
    observed: &[LinkRecord],
    opts: &ReconcileOptions,
) -> Result<Report, ReconcileError> {
    let intended = match document.links(device) {
        Some(links) if !links.is_empty() => links,
        _ => {
            return Err(ReconcileError::NotFound {
                device: device.to_string(),
                message: "device not found in intended cabling or no neighbors defined"
                    .to_string(),
            })
        }
    };

    let result = reconcile_with_options(intended, observed, opts);
    tracing::debug!(
        device,
        intended = intended.len(),
        observed = observed.len(),
        diagnostics = result.len(),
        "reconciled device cabling"
    );

    Ok(Report {
        device: device.to_string(),
        desired: intended.to_vec(),
        existing: observed.to_vec(),
        result,
    })
}

fn classify(desired: &LinkRecord, existing: &LinkRecord) -> Diagnostic {
    if existing.neighbor != desired.neighbor {
        Diagnostic::anchored(
            desired,
            LinkStatus::NeighborMismatch,
            "neighbors do not match".to_string(),
        )
    } else if existing.neighbor_interface != desired.neighbor_interface {
        let mut diag = Diagnostic::anchored(
            desired,
            LinkStatus::NeighborInterfaceMismatch,
            format!(
                "neighbor interfaces do not match, current is {}",
                existing.neighbor_interface
            ),
        );
        diag.observed_neighbor_interface = Some(existing.neighbor_interface.clone());
        diag
    } else {
        Diagnostic::anchored(desired, LinkStatus::Ok, "ok".to_string())
    }
}

fn undocumented(existing: &LinkRecord) -> Diagnostic {
    Diagnostic::anchored(
        existing,
        LinkStatus::UndocumentedObserved,
        "found in observed, not found in intended".to_string(),
    )
}
