//! Result types the flows hand back to the CLI layer.

/// Final result of an install run.
#[derive(Debug)]
pub enum InstallOutcome {
    /// Operator declined the overwrite prompt; nothing was touched.
    Cancelled,
    /// The flow ran to completion, possibly with warnings.
    Completed(InstallReport),
}

/// What an install run accomplished and what went sideways along the way.
#[derive(Debug, Default)]
pub struct InstallReport {
    pub warnings: Vec<String>,
    /// Exit code of the bundled setup script, when it failed.
    pub nested_setup_exit: Option<i32>,
    pub service_registered: bool,
    pub service_started: bool,
}

impl InstallReport {
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Process exit code: a failed nested setup propagates its code even
    /// though the run itself continued past it.
    pub fn exit_code(&self) -> i32 {
        match self.nested_setup_exit {
            Some(code) if code != 0 => code,
            _ => 0,
        }
    }
}

/// Per-entry results of a template sync run.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub fetched: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl SyncReport {
    /// Entries fail independently, but a run with any failure exits non-zero
    /// so automation notices.
    pub fn exit_code(&self) -> i32 {
        if self.failed.is_empty() { 0 } else { 1 }
    }
}
