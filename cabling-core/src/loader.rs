use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::{LinkRecord, TopologyDocument};

/// Top-level key holding the per-device cabling collection.
pub const DEFAULT_ROOT_KEY: &str = "cabling";

/// Position of a link record inside its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLocation {
    /// Owning device, or `None` for a bare link list.
    pub device: Option<String>,
    /// Zero-based index within the device's link list.
    pub index: usize,
}

impl Display for RecordLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.device {
            Some(device) => write!(f, "device '{device}' record {}", self.index),
            None => write!(f, "record {}", self.index),
        }
    }
}

/// Errors that can occur while loading topology documents.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read input file.
    #[error("failed to read topology file: {0}")]
    Io(#[from] std::io::Error),
    /// Input was not valid YAML.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Input was not valid JSON.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The top-level cabling key is absent.
    #[error("top-level key '{0}' not found")]
    MissingRoot(String),
    /// Document structure does not match the expected shape.
    #[error("malformed topology document: {0}")]
    Malformed(String),
    /// A link record lacks one of its required fields.
    #[error("{location} is missing required field '{field}'")]
    MissingField {
        location: RecordLocation,
        field: &'static str,
    },
    /// A link record field is present but not a string.
    #[error("{location} field '{field}' must be a string (quote numeric values)")]
    InvalidField {
        location: RecordLocation,
        field: &'static str,
    },
}

/// Serialization format of a topology document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Guess the format from a file extension. Anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Configures document loading.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Top-level key holding the device collection.
    pub root_key: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            root_key: DEFAULT_ROOT_KEY.to_string(),
        }
    }
}

/// Parse a topology document with default options.
pub fn parse_document(input: &[u8], format: DocumentFormat) -> Result<TopologyDocument, LoadError> {
    parse_document_with_options(input, format, &LoadOptions::default())
}

/// Parse a topology document with custom options.
pub fn parse_document_with_options(
    input: &[u8],
    format: DocumentFormat,
    opts: &LoadOptions,
) -> Result<TopologyDocument, LoadError> {
    let root = decode(input, format)?;
    let root = root.as_object().ok_or_else(|| {
        LoadError::Malformed("document root must be a mapping".to_string())
    })?;
    let cabling = root
        .get(&opts.root_key)
        .ok_or_else(|| LoadError::MissingRoot(opts.root_key.clone()))?;

    let empty = Map::new();
    let devices = match cabling {
        Value::Null => &empty,
        Value::Object(map) => map,
        _ => {
            return Err(LoadError::Malformed(format!(
                "'{}' must map device identifiers to link lists",
                opts.root_key
            )))
        }
    };

    let mut out = BTreeMap::new();
    for (device, links) in devices {
        let records = match links {
            Value::Null => Vec::new(),
            Value::Array(items) => records_from_values(items, Some(device))?,
            _ => {
                return Err(LoadError::Malformed(format!(
                    "links for device '{device}' must be a list"
                )))
            }
        };
        out.insert(device.clone(), records);
    }

    tracing::debug!(devices = out.len(), "loaded topology document");
    Ok(TopologyDocument::new(out))
}

/// Load a topology document from disk, inferring the format from the extension.
pub fn load_document(path: &Path) -> Result<TopologyDocument, LoadError> {
    load_document_with_options(path, &LoadOptions::default())
}

/// Load a topology document from disk with custom options.
pub fn load_document_with_options(
    path: &Path,
    opts: &LoadOptions,
) -> Result<TopologyDocument, LoadError> {
    let bytes = fs::read(path)?;
    parse_document_with_options(&bytes, DocumentFormat::from_path(path), opts)
}

/// Parse a bare list of link records, as supplied for observed links.
pub fn parse_link_list(input: &[u8], format: DocumentFormat) -> Result<Vec<LinkRecord>, LoadError> {
    match decode(input, format)? {
        Value::Array(items) => records_from_values(&items, None),
        _ => Err(LoadError::Malformed(
            "link list must be a sequence of records".to_string(),
        )),
    }
}

fn decode(input: &[u8], format: DocumentFormat) -> Result<Value, LoadError> {
    let value = match format {
        DocumentFormat::Yaml => serde_yaml::from_slice(input)?,
        DocumentFormat::Json => serde_json::from_slice(input)?,
    };
    Ok(value)
}

fn records_from_values(
    items: &[Value],
    device: Option<&String>,
) -> Result<Vec<LinkRecord>, LoadError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let location = RecordLocation {
                device: device.cloned(),
                index,
            };
            record_from_value(item, location)
        })
        .collect()
}

fn record_from_value(value: &Value, location: RecordLocation) -> Result<LinkRecord, LoadError> {
    let Some(map) = value.as_object() else {
        return Err(LoadError::Malformed(format!("{location} must be a mapping")));
    };

    Ok(LinkRecord {
        local_interface: required_field(map, "local_interface", &location)?,
        neighbor: required_field(map, "neighbor", &location)?,
        neighbor_interface: required_field(map, "neighbor_interface", &location)?,
    })
}

fn required_field(
    map: &Map<String, Value>,
    field: &'static str,
    location: &RecordLocation,
) -> Result<String, LoadError> {
    match map.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        None | Some(Value::Null) => Err(LoadError::MissingField {
            location: location.clone(),
            field,
        }),
        Some(_) => Err(LoadError::InvalidField {
            location: location.clone(),
            field,
        }),
    }
}
