//! Shared testing utilities for polup integration tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

use polup::domain::AppError;
use polup::ports::{Confirmer, RemoteSource, ServiceManager, ToolProbe};

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty tool search path.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create test bin directory");

        Self { root, work_dir, bin_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `polup` binary.
    ///
    /// The child only sees the harness bin directory on its search path, so
    /// tests fully control which tools exist.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("polup").expect("Failed to locate polup binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path()).env("PATH", &self.bin_dir);
        cmd
    }

    /// Drop a do-nothing tool shim onto the harness search path.
    pub fn add_tool(&self, name: &str) {
        self.add_tool_with_output(name, "");
    }

    /// Drop a tool shim that prints `stdout` and exits 0.
    pub fn add_tool_with_output(&self, name: &str, stdout: &str) {
        let path = self.bin_dir.join(name);
        let script = format!("#!/bin/sh\nprintf '%s\\n' \"{stdout}\"\n");
        fs::write(&path, script).expect("Failed to write tool shim");
        mark_executable(&path);
    }

    /// Turn the work directory into a Git working tree.
    pub fn init_git_repo(&self) {
        git2::Repository::init(&self.work_dir).expect("Failed to init test repository");
    }

    /// Create a file under the work directory, parents included.
    pub fn write_work_file(&self, relative: &str, contents: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(path, contents).expect("Failed to write work file");
    }
}

#[cfg(unix)]
fn mark_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark shim executable");
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) {}

// ---------------------------------------------------------------------------
// Port doubles for library-level flow tests
// ---------------------------------------------------------------------------

/// Confirmer answering from a fixed script; panics on an unexpected prompt.
#[allow(dead_code)]
pub struct ScriptedConfirmer {
    answers: RefCell<VecDeque<bool>>,
}

#[allow(dead_code)]
impl ScriptedConfirmer {
    pub fn new(answers: &[bool]) -> Self {
        Self { answers: RefCell::new(answers.iter().copied().collect()) }
    }

    /// How many scripted answers were never consumed.
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        match self.answers.borrow_mut().pop_front() {
            Some(answer) => Ok(answer),
            None => panic!("unexpected confirmation prompt: {prompt}"),
        }
    }
}

/// Remote that fails every call; flows that should never fetch use it as a
/// tripwire.
#[allow(dead_code)]
pub struct FailingRemote;

impl RemoteSource for FailingRemote {
    fn fetch(&self, url: &url::Url) -> Result<Vec<u8>, AppError> {
        Err(AppError::DownloadFailed {
            url: url.to_string(),
            details: "test remote always fails".to_string(),
        })
    }

    fn download_to(&self, url: &url::Url, _dest: &Path) -> Result<(), AppError> {
        Err(AppError::DownloadFailed {
            url: url.to_string(),
            details: "test remote always fails".to_string(),
        })
    }
}

/// Probe with a configurable set of missing tools and version banner.
#[allow(dead_code)]
pub struct StaticToolProbe {
    pub missing: Vec<&'static str>,
    pub version_banner: String,
}

#[allow(dead_code)]
impl StaticToolProbe {
    pub fn complete() -> Self {
        Self { missing: Vec::new(), version_banner: "Python 3.11.4".to_string() }
    }

    pub fn without(tool: &'static str) -> Self {
        Self { missing: vec![tool], ..Self::complete() }
    }

    pub fn with_banner(banner: &str) -> Self {
        Self { missing: Vec::new(), version_banner: banner.to_string() }
    }
}

impl ToolProbe for StaticToolProbe {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        if self.missing.contains(&tool) {
            return None;
        }
        Some(PathBuf::from(format!("/usr/bin/{tool}")))
    }

    fn version_output(&self, _tool: &str) -> Result<String, AppError> {
        Ok(self.version_banner.clone())
    }
}

/// Service manager that records calls instead of touching the host.
#[allow(dead_code)]
pub struct RecordingServiceManager {
    pub available: bool,
    pub active_after_start: bool,
    pub unit_dir: PathBuf,
    pub calls: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingServiceManager {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            active_after_start: true,
            unit_dir: PathBuf::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn available_in(unit_dir: PathBuf) -> Self {
        Self {
            available: true,
            active_after_start: true,
            unit_dir,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn recorded(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }
}

impl ServiceManager for RecordingServiceManager {
    fn available(&self) -> bool {
        self.available
    }

    fn ensure_account(&self, account: &str, _home: &Path) -> Result<(), AppError> {
        self.record(format!("ensure_account {account}"));
        Ok(())
    }

    fn assign_ownership(&self, account: &str, _root: &Path) -> Result<(), AppError> {
        self.record(format!("assign_ownership {account}"));
        Ok(())
    }

    fn install_unit(&self, service_name: &str, contents: &str) -> Result<PathBuf, AppError> {
        self.record(format!("install_unit {service_name}"));
        fs::create_dir_all(&self.unit_dir)?;
        let path = self.unit_dir.join(format!("{service_name}.service"));
        fs::write(&path, contents)?;
        Ok(path)
    }

    fn daemon_reload(&self) -> Result<(), AppError> {
        self.record("daemon_reload");
        Ok(())
    }

    fn start(&self, service_name: &str) -> Result<(), AppError> {
        self.record(format!("start {service_name}"));
        Ok(())
    }

    fn is_active(&self, service_name: &str) -> Result<bool, AppError> {
        self.record(format!("is_active {service_name}"));
        Ok(self.active_after_start)
    }
}
