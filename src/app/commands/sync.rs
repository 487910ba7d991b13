//! Idempotent fetch-if-missing template sync into a working tree.
//!
//! First-write-wins: an existing destination file is never touched, whatever
//! the remote holds. Entries fetch independently; one failure does not block
//! the rest.

use std::fs;
use std::path::Path;

use crate::app::status;
use crate::domain::{
    AppError, PROJECT_CONFIG_TEMPLATE, SyncConfig, SyncReport, TEMPLATE_ENTRIES, TemplateEntry,
};
use crate::ports::RemoteSource;

pub fn execute<R: RemoteSource>(remote: &R, config: &SyncConfig) -> Result<SyncReport, AppError> {
    // Refuse to scatter files outside a repository.
    if git2::Repository::discover(&config.target_dir).is_err() {
        return Err(AppError::NotAWorkingTree(config.target_dir.display().to_string()));
    }

    let mut report = SyncReport::default();
    for entry in TEMPLATE_ENTRIES {
        sync_entry(remote, config, entry, &mut report);
    }

    // The project configuration template comes last; unlike the fixed set it
    // ships as a skeleton the operator has to fill in.
    if sync_entry(remote, config, PROJECT_CONFIG_TEMPLATE, &mut report) {
        status::info(format!(
            "Edit {} to describe this project before committing",
            PROJECT_CONFIG_TEMPLATE.dest
        ));
    }

    Ok(report)
}

/// Fetch one entry unless its destination already exists. Returns whether a
/// new file was written.
fn sync_entry<R: RemoteSource>(
    remote: &R,
    config: &SyncConfig,
    entry: TemplateEntry,
    report: &mut SyncReport,
) -> bool {
    let dest = config.target_dir.join(entry.dest);
    if dest.exists() {
        status::info(format!("{} already exists; skipping", entry.dest));
        report.skipped.push(entry.dest.to_string());
        return false;
    }

    match fetch_one(remote, config, entry, &dest) {
        Ok(()) => {
            status::ok(format!("Fetched {}", entry.dest));
            report.fetched.push(entry.dest.to_string());
            true
        }
        Err(err) => {
            status::warn(format!("Could not fetch {}: {err}", entry.dest));
            report.failed.push((entry.dest.to_string(), err.to_string()));
            false
        }
    }
}

fn fetch_one<R: RemoteSource>(
    remote: &R,
    config: &SyncConfig,
    entry: TemplateEntry,
    dest: &Path,
) -> Result<(), AppError> {
    let url = config
        .template_base
        .join(entry.remote)
        .map_err(|e| AppError::config_error(format!("Bad template URL for {}: {e}", entry.remote)))?;

    let bytes = remote.fetch(&url)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, bytes)?;
    Ok(())
}
