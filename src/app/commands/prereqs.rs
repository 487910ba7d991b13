//! Prerequisite verification. Runs strictly before any filesystem mutation.

use std::path::PathBuf;

use crate::app::status;
use crate::domain::{
    AppError, INTERPRETER, INTERPRETER_FLOOR, InterpreterVersion, REQUIRED_TOOLS, ToolRequirement,
};
use crate::ports::ToolProbe;

/// Check every required tool and the interpreter floor, failing on the first
/// problem. No side effects on failure.
pub fn verify<T: ToolProbe>(tools: &T) -> Result<(), AppError> {
    for requirement in REQUIRED_TOOLS {
        let path = check_tool(tools, requirement)?;
        status::ok(format!("{} found at {}", requirement.name, path.display()));
    }

    let version = check_interpreter(tools)?;
    status::ok(format!(
        "{INTERPRETER} {version} meets the {}.{} floor",
        INTERPRETER_FLOOR.0, INTERPRETER_FLOOR.1
    ));

    Ok(())
}

/// Locate a single required tool.
pub fn check_tool<T: ToolProbe>(
    tools: &T,
    requirement: ToolRequirement,
) -> Result<PathBuf, AppError> {
    tools.locate(requirement.name).ok_or_else(|| AppError::MissingTool {
        tool: requirement.name.to_string(),
        hint: requirement.hint.to_string(),
    })
}

/// Parse the interpreter version and enforce the floor.
pub fn check_interpreter<T: ToolProbe>(tools: &T) -> Result<InterpreterVersion, AppError> {
    let output = tools.version_output(INTERPRETER)?;
    let version = InterpreterVersion::parse(&output)
        .ok_or_else(|| AppError::InterpreterVersionUnreadable(output.trim().to_string()))?;

    if !version.meets_floor(INTERPRETER_FLOOR) {
        return Err(AppError::InterpreterTooOld {
            found: version.to_string(),
            floor: format!("{}.{}", INTERPRETER_FLOOR.0, INTERPRETER_FLOOR.1),
        });
    }

    Ok(version)
}
