//! Where observed neighbor data comes from.

use std::path::Path;

use anyhow::{Context, Result};
use cabling_core::{
    load_document_with_options, parse_link_list, DocumentFormat, LinkRecord, LoadOptions,
    TopologyDocument,
};

/// Observed links, either per device or one list shared by every device.
#[derive(Debug, Clone)]
pub enum ObservedLinks {
    Document(TopologyDocument),
    Shared(Vec<LinkRecord>),
}

impl ObservedLinks {
    /// Load observed links from a topology file keyed by device.
    pub fn from_file(path: &Path, opts: &LoadOptions) -> Result<Self> {
        let doc = load_document_with_options(path, opts)
            .with_context(|| format!("failed to load observed cabling {}", path.display()))?;
        Ok(Self::Document(doc))
    }

    /// Parse observed links given inline as a JSON list.
    pub fn from_inline(raw: &str) -> Result<Self> {
        let links = parse_link_list(raw.as_bytes(), DocumentFormat::Json)
            .context("failed to parse inline observed links")?;
        Ok(Self::Shared(links))
    }

    /// Observed links for `device`. A device absent from an observed document has none.
    pub fn for_device(&self, device: &str) -> &[LinkRecord] {
        match self {
            Self::Document(doc) => {
                let links = doc.links(device).unwrap_or_default();
                if links.is_empty() {
                    tracing::warn!(device, "no observed links for device");
                }
                links
            }
            Self::Shared(links) => links,
        }
    }
}
