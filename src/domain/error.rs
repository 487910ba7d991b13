use std::io;

use thiserror::Error;

/// Library-wide error type for polup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required external tool is missing from the search path.
    #[error("Required tool '{tool}' not found. {hint}")]
    MissingTool { tool: String, hint: String },

    /// Interpreter is present but below the supported floor.
    #[error("python3 {found} is below the supported {floor} floor")]
    InterpreterTooOld { found: String, floor: String },

    /// Interpreter version output could not be parsed.
    #[error("Could not read an interpreter version out of '{0}'")]
    InterpreterVersionUnreadable(String),

    /// Archive or template download failed.
    #[error("Download failed for {url}: {details}")]
    DownloadFailed { url: String, details: String },

    /// Archive extraction failed.
    #[error("Extraction failed: {0}")]
    ExtractFailed(String),

    /// Extracted archive did not have the expected shape.
    #[error("Unexpected archive layout: {0}")]
    ArchiveLayout(String),

    /// Sync was invoked outside a Git working tree.
    #[error("{0} is not inside a Git working tree. Run sync from within the repository.")]
    NotAWorkingTree(String),

    /// External command invocation failed.
    #[error("Error running '{command}': {details}")]
    CommandFailed { command: String, details: String },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Process exit code for failures that abort a run.
    ///
    /// Missing prerequisites get their own code so operators can tell an
    /// unprepared host apart from a failed run.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::MissingTool { .. }
            | AppError::InterpreterTooOld { .. }
            | AppError::InterpreterVersionUnreadable(_) => 3,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prerequisite_failures_map_to_exit_code_3() {
        let missing =
            AppError::MissingTool { tool: "tar".to_string(), hint: "Install tar.".to_string() };
        assert_eq!(missing.exit_code(), 3);

        let old = AppError::InterpreterTooOld {
            found: "3.8.10".to_string(),
            floor: "3.9".to_string(),
        };
        assert_eq!(old.exit_code(), 3);
    }

    #[test]
    fn other_failures_map_to_exit_code_1() {
        let download = AppError::DownloadFailed {
            url: "https://example.com/a.tar.gz".to_string(),
            details: "connection refused".to_string(),
        };
        assert_eq!(download.exit_code(), 1);
        assert_eq!(AppError::ExtractFailed("truncated".to_string()).exit_code(), 1);
    }
}
