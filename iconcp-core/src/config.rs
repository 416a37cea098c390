//! Configuration management for icon copying

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{IconError, IconResult};

/// Directory the icons are read from unless configured otherwise
pub const DEFAULT_SOURCE_ROOT: &str = "/home/user/public/icons";

/// Directory the icons are written to unless configured otherwise
pub const DEFAULT_DESTINATION_ROOT: &str = "/vercel/share/v0-project/public/icons";

/// The pair of roots a run operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyConfig {
    /// Directory the icons are read from
    pub source_root:      PathBuf,
    /// Directory the icons are copied into
    pub destination_root: PathBuf,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            source_root:      PathBuf::from(DEFAULT_SOURCE_ROOT),
            destination_root: PathBuf::from(DEFAULT_DESTINATION_ROOT),
        }
    }
}

/// Contents of an optional TOML settings file. Every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub source_root:      Option<PathBuf>,
    pub destination_root: Option<PathBuf>,
}

impl SettingsFile {
    /// Read and parse a settings file
    pub fn load(path: &Path) -> IconResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| IconError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| IconError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

impl CopyConfig {
    /// Built-in defaults with a settings file layered on top
    pub fn load(path: &Path) -> IconResult<Self> {
        let settings = SettingsFile::load(path)?;
        Ok(Self::default().merge(settings))
    }

    /// Replace every root the settings file names
    pub fn merge(self, settings: SettingsFile) -> Self {
        Self {
            source_root:      settings.source_root.unwrap_or(self.source_root),
            destination_root: settings.destination_root.unwrap_or(self.destination_root),
        }
    }

    /// Apply explicit overrides, e.g. from command-line flags
    pub fn with_overrides(
        self,
        source_root: Option<PathBuf>,
        destination_root: Option<PathBuf>,
    ) -> Self {
        self.merge(SettingsFile { source_root, destination_root })
    }
}
