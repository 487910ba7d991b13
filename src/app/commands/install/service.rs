//! Optional service registration, entirely gated on operator assent.

use std::fs;
use std::thread;
use std::time::Duration;

use crate::app::status;
use crate::domain::{AppError, InstallConfig, InstallReport};
use crate::ports::{Confirmer, ServiceManager};
use crate::services::render_unit;

/// How long a freshly started unit gets before its state is probed.
const START_PROBE_DELAY: Duration = Duration::from_secs(3);

pub fn register<C, S>(
    confirmer: &C,
    services: &S,
    config: &InstallConfig,
    report: &mut InstallReport,
) -> Result<(), AppError>
where
    C: Confirmer,
    S: ServiceManager,
{
    if !services.available() {
        status::info("No service manager detected; skipping service registration");
        return Ok(());
    }

    if !confirmer.confirm("Register the portal as a systemd service?")? {
        status::info("Service registration skipped");
        return Ok(());
    }

    services.ensure_account(&config.service_account, &config.install_root)?;
    services.assign_ownership(&config.service_account, &config.install_root)?;

    let unit = render_unit(config)?;
    let unit_path = services.install_unit(&config.service_name, &unit)?;
    // Mirror kept inside the install tree so the unit travels with it.
    fs::write(config.unit_mirror_path(), &unit)?;
    services.daemon_reload()?;

    report.service_registered = true;
    status::ok(format!("Service unit installed at {}", unit_path.display()));

    if !confirmer.confirm("Start the service now?")? {
        return Ok(());
    }

    services.start(&config.service_name)?;
    thread::sleep(START_PROBE_DELAY);

    if services.is_active(&config.service_name)? {
        report.service_started = true;
        status::ok(format!("Service {} is active", config.service_name));
    } else {
        report.warn(format!(
            "Service {} did not report active; inspect it with `systemctl status {}`",
            config.service_name, config.service_name
        ));
    }

    Ok(())
}
