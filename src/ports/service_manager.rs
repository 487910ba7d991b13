use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Seam over the host's service manager and account database.
///
/// The registrar never calls anything here unless [`available`] reported
/// true and the operator opted in.
///
/// [`available`]: ServiceManager::available
pub trait ServiceManager {
    /// Whether the host has a usable service manager at all.
    fn available(&self) -> bool;

    /// Create the unprivileged service account if missing; an existing
    /// account is reused silently.
    fn ensure_account(&self, account: &str, home: &Path) -> Result<(), AppError>;

    /// Recursively hand the install tree to the service account.
    fn assign_ownership(&self, account: &str, root: &Path) -> Result<(), AppError>;

    /// Write the rendered unit into the system unit directory, returning the
    /// path it landed at.
    fn install_unit(&self, service_name: &str, contents: &str) -> Result<PathBuf, AppError>;

    /// Reload the service manager's unit cache.
    fn daemon_reload(&self) -> Result<(), AppError>;

    /// Start the unit.
    fn start(&self, service_name: &str) -> Result<(), AppError>;

    /// Whether the unit currently reports active.
    fn is_active(&self, service_name: &str) -> Result<bool, AppError>;
}
