use std::path::{Path, PathBuf};

use cabling_core::{LoadOptions, ReconcileOptions, UndocumentedPlacement};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Interleaved,
    Trailing,
}

/// Defaults for `cable-check`, overridable per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default = "default_root_key")]
    pub root_key: String,
    #[serde(default = "default_format")]
    pub format: ReportFormat,
    #[serde(default = "default_placement")]
    pub undocumented: Placement,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub legacy_status: bool,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings in {origin}: {source}")]
    Parse {
        origin: String,
        source: toml::de::Error,
    },
}

impl Settings {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            root_key: self.root_key.clone(),
        }
    }

    pub fn reconcile_options(&self) -> ReconcileOptions {
        ReconcileOptions {
            undocumented: match self.undocumented {
                Placement::Interleaved => UndocumentedPlacement::Interleaved,
                Placement::Trailing => UndocumentedPlacement::Trailing,
            },
        }
    }
}

/// Load settings from `path`, or the embedded defaults when no path is given.
///
/// Returns the settings together with a description of where they came from.
pub fn load_settings(path: Option<&Path>) -> Result<(Settings, String), SettingsError> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let origin = format!("file:{}", path.display());
            let settings = parse_settings(&raw).map_err(|source| SettingsError::Parse {
                origin: origin.clone(),
                source,
            })?;
            Ok((settings, origin))
        }
        None => Ok((embedded_settings()?, "embedded".to_string())),
    }
}

fn embedded_settings() -> Result<Settings, SettingsError> {
    let raw = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/settings/default.toml"));
    parse_settings(raw).map_err(|source| SettingsError::Parse {
        origin: "embedded".to_string(),
        source,
    })
}

fn parse_settings(raw: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str::<Settings>(raw)
}

fn default_root_key() -> String {
    cabling_core::DEFAULT_ROOT_KEY.to_string()
}

fn default_format() -> ReportFormat {
    ReportFormat::Text
}

fn default_placement() -> Placement {
    Placement::Interleaved
}
