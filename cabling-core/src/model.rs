use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// One local port and the neighbor seen (or expected) on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Port on the device being checked. Unique within one snapshot.
    pub local_interface: String,
    /// Identifier of the neighboring device.
    pub neighbor: String,
    /// Port on the neighboring device.
    pub neighbor_interface: String,
}

impl LinkRecord {
    /// Create a link record from its three fields.
    pub fn new(
        local_interface: impl Into<String>,
        neighbor: impl Into<String>,
        neighbor_interface: impl Into<String>,
    ) -> Self {
        Self {
            local_interface: local_interface.into(),
            neighbor: neighbor.into(),
            neighbor_interface: neighbor_interface.into(),
        }
    }
}

impl Display for LinkRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} {}",
            self.local_interface, self.neighbor, self.neighbor_interface
        )
    }
}

/// Cabling for every device in one topology file, keyed by device identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopologyDocument {
    devices: BTreeMap<String, Vec<LinkRecord>>,
}

impl TopologyDocument {
    pub fn new(devices: BTreeMap<String, Vec<LinkRecord>>) -> Self {
        Self { devices }
    }

    /// Links declared for `device`, if the device is present at all.
    pub fn links(&self, device: &str) -> Option<&[LinkRecord]> {
        self.devices.get(device).map(Vec::as_slice)
    }

    /// Device identifiers in sorted order.
    pub fn device_names(&self) -> impl Iterator<Item = &str> {
        self.devices.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[LinkRecord])> {
        self.devices
            .iter()
            .map(|(name, links)| (name.as_str(), links.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
