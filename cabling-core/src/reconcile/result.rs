use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::model::LinkRecord;

/// Outcome of checking one link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinkStatus {
    /// Local interface, neighbor and neighbor interface all agree.
    Ok,
    /// Same local interface, different neighbor device.
    NeighborMismatch,
    /// Same local interface and neighbor, different neighbor port.
    NeighborInterfaceMismatch,
    /// Documented link whose local interface was not observed at all.
    MissingInObserved,
    /// Observed link whose local interface is not documented for the device.
    UndocumentedObserved,
}

impl LinkStatus {
    /// Every status, in severity-neutral declaration order.
    pub const ALL: [LinkStatus; 5] = [
        LinkStatus::Ok,
        LinkStatus::NeighborMismatch,
        LinkStatus::NeighborInterfaceMismatch,
        LinkStatus::MissingInObserved,
        LinkStatus::UndocumentedObserved,
    ];

    /// Stable wire name.
    pub fn code(self) -> &'static str {
        match self {
            LinkStatus::Ok => "OK",
            LinkStatus::NeighborMismatch => "NEIGHBOR_MISMATCH",
            LinkStatus::NeighborInterfaceMismatch => "NEIGHBOR_INTERFACE_MISMATCH",
            LinkStatus::MissingInObserved => "MISSING_IN_OBSERVED",
            LinkStatus::UndocumentedObserved => "UNDOCUMENTED_OBSERVED",
        }
    }

    /// Status label used by older cabling reports.
    pub fn legacy_code(self) -> &'static str {
        match self {
            LinkStatus::Ok => "OK",
            LinkStatus::NeighborMismatch => "FAIL_001",
            LinkStatus::NeighborInterfaceMismatch => "FAIL_002",
            LinkStatus::MissingInObserved => "FAIL_003",
            LinkStatus::UndocumentedObserved => "FAIL_004",
        }
    }

    /// True when the diagnostic is anchored on the observed record.
    pub fn is_observed_anchored(self) -> bool {
        self == LinkStatus::UndocumentedObserved
    }

    pub fn is_ok(self) -> bool {
        self == LinkStatus::Ok
    }
}

impl Display for LinkStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One row of a cabling report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub local_interface: String,
    pub neighbor: String,
    pub neighbor_interface: String,
    pub status: LinkStatus,
    /// Human readable explanation of `status`.
    pub message: String,
    /// Neighbor interface actually seen, set for interface mismatches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_neighbor_interface: Option<String>,
}

impl Diagnostic {
    pub(crate) fn anchored(link: &LinkRecord, status: LinkStatus, message: String) -> Self {
        Self {
            local_interface: link.local_interface.clone(),
            neighbor: link.neighbor.clone(),
            neighbor_interface: link.neighbor_interface.clone(),
            status,
            message,
            observed_neighbor_interface: None,
        }
    }

    /// Status string as older cabling reports spelled it.
    pub fn legacy_status(&self) -> String {
        let code = self.status.legacy_code();
        match self.status {
            LinkStatus::Ok => code.to_string(),
            LinkStatus::NeighborMismatch => format!("{code}: NEIGHBORS DO NOT MATCH"),
            LinkStatus::NeighborInterfaceMismatch => format!(
                "{code}: NEIGHBOR INTERFACES DO NOT MATCH. CURRENT IS: {}",
                self.observed_neighbor_interface.as_deref().unwrap_or_default()
            ),
            LinkStatus::MissingInObserved => {
                format!("{code}: NEIGHBOR DOCUMENTED IN DESIRED, BUT NOT FOUND IN EXISTING")
            }
            LinkStatus::UndocumentedObserved => {
                format!("{code}: NEIGHBOR FOUND IN EXISTING, BUT NOT FOUND IN DESIRED")
            }
        }
    }
}

/// Full result for one device: inputs echoed back plus diagnostics.
///
/// Serializes as `{device, desired, existing, result}`, the `{desired,
/// existing, result}` envelope with the device identifier added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub device: String,
    /// Intended links for the device.
    pub desired: Vec<LinkRecord>,
    /// Observed links for the device.
    pub existing: Vec<LinkRecord>,
    pub result: Vec<Diagnostic>,
}

impl Report {
    /// Number of diagnostics carrying `status`.
    pub fn count(&self, status: LinkStatus) -> usize {
        self.result.iter().filter(|d| d.status == status).count()
    }

    /// True when every diagnostic is OK.
    pub fn is_clean(&self) -> bool {
        self.result.iter().all(|d| d.status.is_ok())
    }
}
