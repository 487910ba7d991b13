//! polup: provision a pol-apps portal host install and sync workflow
//! template files into a working tree.
//!
//! Two independent flows share the same fetch → verify → place shape:
//! [`install`] downloads and places the full portal tree (with optional
//! systemd registration), [`sync`] populates a repository with a fixed set
//! of workflow template files without ever overwriting local edits.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::AppContext;
use app::commands::{doctor, install, sync as sync_command};
use services::{HttpRemoteSource, SystemToolProbe, SystemdManager, TerminalConfirmer};

pub use app::commands::doctor::DoctorOutcome;
pub use domain::{
    AppError, InstallConfig, InstallOutcome, InstallReport, SyncConfig, SyncReport,
};

/// Run the interactive portal installer with production adapters.
pub fn install(config: &InstallConfig) -> Result<InstallOutcome, AppError> {
    let ctx = AppContext::new(
        TerminalConfirmer,
        HttpRemoteSource::new()?,
        SystemdManager::new(config.system_unit_dir.clone()),
        SystemToolProbe,
    );

    install::execute(&ctx, config)
}

/// Run template sync into the configured working tree.
pub fn sync(config: &SyncConfig) -> Result<SyncReport, AppError> {
    let remote = HttpRemoteSource::new()?;
    sync_command::execute(&remote, config)
}

/// Report host prerequisite status without touching anything.
pub fn doctor() -> DoctorOutcome {
    doctor::execute(&SystemToolProbe)
}
