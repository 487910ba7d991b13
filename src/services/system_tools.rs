//! PATH-based tool probing for prerequisite checks.

use std::env;
use std::path::PathBuf;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::ToolProbe;

/// [`ToolProbe`] over the real `PATH` and the real binaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToolProbe;

impl ToolProbe for SystemToolProbe {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        let path_var = env::var_os("PATH")?;
        env::split_paths(&path_var).map(|dir| dir.join(tool)).find(|candidate| candidate.is_file())
    }

    fn version_output(&self, tool: &str) -> Result<String, AppError> {
        let output = Command::new(tool).arg("--version").output().map_err(|err| {
            AppError::CommandFailed {
                command: format!("{tool} --version"),
                details: err.to_string(),
            }
        })?;

        // Older interpreters print the banner to stderr, newer to stdout.
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(combined)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn locate_finds_files_on_an_injected_path() {
        let dir = TempDir::new().unwrap();
        let tool = dir.path().join("sometool");
        fs::write(&tool, "#!/bin/sh\n").unwrap();

        let original = env::var_os("PATH");
        unsafe {
            env::set_var("PATH", dir.path());
        }
        let located = SystemToolProbe.locate("sometool");
        let missing = SystemToolProbe.locate("othertool");
        unsafe {
            match original {
                Some(value) => env::set_var("PATH", value),
                None => env::remove_var("PATH"),
            }
        }

        assert_eq!(located, Some(tool));
        assert_eq!(missing, None);
    }
}
