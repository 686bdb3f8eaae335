use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use wallet_import_core::{Capabilities, ClipboardEmptiness};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "WALLET_IMPORT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImportScreenConfig {
    pub clipboard_emptiness: ClipboardEmptiness,
    /// Where the camera source starts browsing on desktop.
    pub capture_dir: Option<PathBuf>,
    pub image_extensions: Vec<String>,
    /// Pre-fills the import field.
    pub label: String,
    pub max_image_bytes: u64,
    /// Overrides the detected platform descriptor.
    pub capabilities: Option<Capabilities>,
}

impl Default for ImportScreenConfig {
    fn default() -> Self {
        Self {
            clipboard_emptiness: ClipboardEmptiness::SingleSpace,
            capture_dir: None,
            image_extensions: ["png", "jpg", "jpeg", "webp"]
                .into_iter()
                .map(ToOwned::to_owned)
                .collect(),
            label: String::new(),
            max_image_bytes: 16 * 1024 * 1024,
            capabilities: None,
        }
    }
}

impl ImportScreenConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
            .unwrap_or_else(crate::capabilities::resolve_capabilities)
    }

    /// Reads the file named by [`CONFIG_ENV`]; defaults when unset or missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) else {
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let config = Self::from_json_file(&path)?;
        tracing::info!(path = %path.display(), "loaded import screen config");
        Ok(config)
    }
}
