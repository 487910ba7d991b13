use std::path::PathBuf;

use crate::domain::AppError;

/// Search-path lookup and version capture for prerequisite checks.
pub trait ToolProbe {
    /// Locate `tool` on the execution search path.
    fn locate(&self, tool: &str) -> Option<PathBuf>;

    /// Capture `<tool> --version` output, stdout and stderr merged.
    fn version_output(&self, tool: &str) -> Result<String, AppError>;
}
