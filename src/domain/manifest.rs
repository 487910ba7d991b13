//! Provenance record written to `etc/install.toml` after placement.

use chrono::Utc;
use serde::Serialize;
use url::Url;

use crate::domain::AppError;

/// What was installed, from where, and when. Informational only; nothing
/// reads it back during an install.
#[derive(Debug, Clone, Serialize)]
pub struct InstallManifest {
    /// RFC 3339 timestamp of the placement.
    pub installed_at: String,
    /// Archive the tree was extracted from.
    pub source_url: String,
    /// SHA-256 of the downloaded archive.
    pub archive_sha256: String,
    /// Version of the installer that produced this tree.
    pub installer_version: String,
}

impl InstallManifest {
    pub fn new(source_url: &Url, archive_sha256: String) -> Self {
        Self {
            installed_at: Utc::now().to_rfc3339(),
            source_url: source_url.to_string(),
            archive_sha256,
            installer_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn to_toml(&self) -> Result<String, AppError> {
        toml::to_string_pretty(self)
            .map_err(|e| AppError::config_error(format!("Could not serialize manifest: {e}")))
    }
}
