//! systemd adapter: account provisioning, tree ownership, unit lifecycle.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use minijinja::{Environment, context};

use crate::domain::{AppError, InstallConfig};
use crate::ports::{ServiceManager, ToolProbe};
use crate::services::SystemToolProbe;

const UNIT_TEMPLATE: &str = r#"[Unit]
Description=pol-apps portal
After=network.target

[Service]
Type=simple
User={{ account }}
WorkingDirectory={{ app_dir }}
ExecStart=/usr/bin/python3 {{ app_dir }}/run.py
Restart=on-failure
StandardOutput=append:{{ root }}/logs/portal.log
StandardError=append:{{ root }}/logs/portal.err

[Install]
WantedBy=multi-user.target
"#;

/// Render the service unit for the configured install.
pub fn render_unit(config: &InstallConfig) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.add_template("unit", UNIT_TEMPLATE)
        .map_err(|e| AppError::config_error(format!("Invalid unit template: {e}")))?;

    let template = env
        .get_template("unit")
        .map_err(|e| AppError::config_error(format!("Unit template missing: {e}")))?;

    template
        .render(context! {
            account => config.service_account.as_str(),
            root => config.install_root.display().to_string(),
            app_dir => config.app_path().display().to_string(),
        })
        .map_err(|e| AppError::config_error(format!("Could not render unit: {e}")))
}

/// [`ServiceManager`] backed by `systemctl`, `id`, `useradd`, and `chown`.
#[derive(Debug, Clone)]
pub struct SystemdManager {
    unit_dir: PathBuf,
}

impl SystemdManager {
    pub fn new(unit_dir: PathBuf) -> Self {
        Self { unit_dir }
    }
}

impl ServiceManager for SystemdManager {
    fn available(&self) -> bool {
        SystemToolProbe.locate("systemctl").is_some()
    }

    fn ensure_account(&self, account: &str, home: &Path) -> Result<(), AppError> {
        if Command::new("id").args(["-u", account]).output().is_ok_and(|o| o.status.success()) {
            return Ok(());
        }

        run_checked(
            "useradd",
            &[
                "--system",
                "--home-dir",
                &home.display().to_string(),
                "--shell",
                "/usr/sbin/nologin",
                account,
            ],
        )
    }

    fn assign_ownership(&self, account: &str, root: &Path) -> Result<(), AppError> {
        let owner = format!("{account}:{account}");
        run_checked("chown", &["-R", &owner, &root.display().to_string()])
    }

    fn install_unit(&self, service_name: &str, contents: &str) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.unit_dir)?;
        let path = self.unit_dir.join(format!("{service_name}.service"));
        fs::write(&path, contents)?;
        Ok(path)
    }

    fn daemon_reload(&self) -> Result<(), AppError> {
        run_checked("systemctl", &["daemon-reload"])
    }

    fn start(&self, service_name: &str) -> Result<(), AppError> {
        run_checked("systemctl", &["start", service_name])
    }

    fn is_active(&self, service_name: &str) -> Result<bool, AppError> {
        let status = Command::new("systemctl")
            .args(["is-active", "--quiet", service_name])
            .status()
            .map_err(|err| AppError::CommandFailed {
                command: format!("systemctl is-active {service_name}"),
                details: err.to_string(),
            })?;

        Ok(status.success())
    }
}

fn run_checked(program: &str, args: &[&str]) -> Result<(), AppError> {
    let command = format!("{} {}", program, args.join(" "));
    let output = Command::new(program).args(args).output().map_err(|err| {
        AppError::CommandFailed { command: command.clone(), details: err.to_string() }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AppError::CommandFailed {
            command,
            details: format!("exited with {}: {}", output.status, stderr.trim()),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    fn test_config() -> InstallConfig {
        InstallConfig {
            install_root: PathBuf::from("/srv/portal-test"),
            app_dir_name: "portal".to_string(),
            archive_url: Url::parse("https://example.com/portal.tar.gz").unwrap(),
            temp_dir: PathBuf::from("/tmp/portal-test"),
            service_name: "portal-test".to_string(),
            service_account: "portalsvc".to_string(),
            system_unit_dir: PathBuf::from("/etc/systemd/system"),
            nested_setup: PathBuf::from("scripts/setup.sh"),
        }
    }

    #[test]
    fn unit_renders_account_and_paths() {
        let unit = render_unit(&test_config()).unwrap();

        assert!(unit.contains("User=portalsvc"));
        assert!(unit.contains("WorkingDirectory=/srv/portal-test/portal"));
        assert!(unit.contains("ExecStart=/usr/bin/python3 /srv/portal-test/portal/run.py"));
        assert!(unit.contains("append:/srv/portal-test/logs/portal.log"));
    }

    #[test]
    fn install_unit_writes_into_the_unit_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let manager = SystemdManager::new(dir.path().join("units"));

        let path = manager.install_unit("portal-test", "[Unit]\n").unwrap();

        assert_eq!(path, dir.path().join("units/portal-test.service"));
        assert_eq!(fs::read_to_string(path).unwrap(), "[Unit]\n");
    }
}
