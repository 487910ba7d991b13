//! Immutable configuration for the install and sync flows.
//!
//! Everything here is a hardcoded constant in production use; the structs
//! exist so tests can point the flows at throwaway roots and mock servers.

use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::AppError;

/// Source archive for the portal, a release tarball with a single top-level
/// directory.
const DEFAULT_ARCHIVE_URL: &str =
    "https://codeload.github.com/pol-apps/portal/tar.gz/refs/heads/main";

/// Base URL for template sync; entries are joined onto this, so it must end
/// with a slash.
const DEFAULT_TEMPLATE_BASE: &str =
    "https://raw.githubusercontent.com/pol-apps/claude-dev-workflow/main/templates/";

/// Settings for the portal installer.
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Top-level directory the portal lives under.
    pub install_root: PathBuf,
    /// Name of the application subdirectory inside the install root.
    pub app_dir_name: String,
    /// Where the source archive is fetched from.
    pub archive_url: Url,
    /// Scratch directory for the download and extraction.
    pub temp_dir: PathBuf,
    /// systemd unit name, without the `.service` suffix.
    pub service_name: String,
    /// Unprivileged account the service runs as.
    pub service_account: String,
    /// Where the system's service units live.
    pub system_unit_dir: PathBuf,
    /// Setup script bundled inside the archive, relative to the app directory.
    pub nested_setup: PathBuf,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            install_root: PathBuf::from("/opt/pol-portal"),
            app_dir_name: "portal".to_string(),
            archive_url: Url::parse(DEFAULT_ARCHIVE_URL).expect("default archive URL is valid"),
            temp_dir: std::env::temp_dir().join("pol-portal-install"),
            service_name: "pol-portal".to_string(),
            service_account: "polportal".to_string(),
            system_unit_dir: PathBuf::from("/etc/systemd/system"),
            nested_setup: PathBuf::from("scripts/setup.sh"),
        }
    }
}

impl InstallConfig {
    /// Directory the extracted application tree is placed at.
    pub fn app_path(&self) -> PathBuf {
        self.install_root.join(&self.app_dir_name)
    }

    /// Local mirror of the service unit, kept alongside data/ and logs/.
    pub fn unit_mirror_path(&self) -> PathBuf {
        self.install_root.join("etc/systemd").join(format!("{}.service", self.service_name))
    }

    /// Provenance manifest written after placement.
    pub fn manifest_path(&self) -> PathBuf {
        self.install_root.join("etc/install.toml")
    }
}

/// Settings for template sync.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Remote base the template entries are fetched from.
    pub template_base: Url,
    /// Working tree the files are synced into.
    pub target_dir: PathBuf,
}

impl SyncConfig {
    /// Sync into `target_dir` from the default template source.
    pub fn new<P: AsRef<Path>>(target_dir: P) -> Self {
        Self {
            template_base: Url::parse(DEFAULT_TEMPLATE_BASE)
                .expect("default template base URL is valid"),
            target_dir: target_dir.as_ref().to_path_buf(),
        }
    }

    /// Sync into the current working directory.
    pub fn for_current_dir() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}
