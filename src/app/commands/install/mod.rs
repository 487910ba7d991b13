//! Portal installer: verify, confirm, fetch-extract-place, nested setup,
//! optional service registration, final banner.
//!
//! Strictly sequential. Each stage either completes or aborts the run; the
//! one deliberate exception is the bundled setup script, whose failure is
//! surfaced at the end instead of stopping the later stages.

mod nested_setup;
mod pipeline;
mod service;

use crate::app::commands::prereqs;
use crate::app::{AppContext, status};
use crate::domain::{AppError, InstallConfig, InstallOutcome, InstallReport};
use crate::ports::{Confirmer, RemoteSource, ServiceManager, ToolProbe};

pub fn execute<C, R, S, T>(
    ctx: &AppContext<C, R, S, T>,
    config: &InstallConfig,
) -> Result<InstallOutcome, AppError>
where
    C: Confirmer,
    R: RemoteSource,
    S: ServiceManager,
    T: ToolProbe,
{
    status::info(format!("Installing the pol-apps portal under {}", config.install_root.display()));

    prereqs::verify(ctx.tools())?;

    if config.install_root.exists() {
        let prompt =
            format!("{} already exists. Overwrite it?", config.install_root.display());
        if !ctx.confirmer().confirm(&prompt)? {
            status::info("Installation cancelled; the existing tree was left untouched");
            return Ok(InstallOutcome::Cancelled);
        }
    }

    let mut report = InstallReport::default();

    pipeline::fetch_extract_place(ctx.remote(), config)?;
    nested_setup::run(config, &mut report)?;
    service::register(ctx.confirmer(), ctx.service_manager(), config, &mut report)?;

    banner(config, &report);
    Ok(InstallOutcome::Completed(report))
}

fn banner(config: &InstallConfig, report: &InstallReport) {
    println!();
    if report.clean() {
        status::ok("Installation completed cleanly");
    } else {
        status::warn("Installation completed with warnings:");
        for warning in &report.warnings {
            status::warn(format!("  - {warning}"));
        }
    }

    println!();
    println!("Next steps:");
    println!("  1. Sign in with the default credentials admin / admin and change the password.");
    println!("  2. Set GITHUB_TOKEN in the portal's environment to enable repository imports.");
    if report.service_registered {
        println!("  3. Check the service with: systemctl status {}", config.service_name);
    } else {
        println!(
            "  3. Start the portal manually: python3 {}/run.py",
            config.app_path().display()
        );
    }
}
