//! Hand-off to the setup script bundled inside the extracted archive.
//!
//! Install and application-specific configuration are different concerns: a
//! failing setup script is recorded and surfaced, never an abort, so the
//! still-useful service registration stage runs either way.

use std::fs;
use std::path::Path;
use std::process::Command;

use crate::app::status;
use crate::domain::{AppError, InstallConfig, InstallReport};

pub fn run(config: &InstallConfig, report: &mut InstallReport) -> Result<(), AppError> {
    let script = config.app_path().join(&config.nested_setup);
    if !script.exists() {
        report.warn(format!("No setup script bundled at {}", config.nested_setup.display()));
        return Ok(());
    }

    mark_executable(&script)?;
    status::info(format!("Running {}", config.nested_setup.display()));

    match Command::new(&script).current_dir(config.app_path()).status() {
        Ok(exit) if exit.success() => {
            status::ok("Application setup completed");
        }
        Ok(exit) => {
            let code = exit.code().unwrap_or(1);
            report.nested_setup_exit = Some(code);
            report.warn(format!("Application setup exited with code {code}"));
            status::warn(format!("Application setup exited with code {code}; continuing"));
        }
        Err(err) => {
            report.nested_setup_exit = Some(1);
            report.warn(format!("Could not run the setup script: {err}"));
            status::warn(format!("Could not run the setup script: {err}; continuing"));
        }
    }

    Ok(())
}

#[cfg(unix)]
fn mark_executable(script: &Path) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(script)?.permissions();
    permissions.set_mode(permissions.mode() | 0o755);
    fs::set_permissions(script, permissions)?;
    Ok(())
}

#[cfg(not(unix))]
fn mark_executable(_script: &Path) -> Result<(), AppError> {
    Ok(())
}
