//! Host prerequisite report: the installer's checks, exposed standalone.

use crate::app::commands::prereqs;
use crate::app::status;
use crate::domain::{INTERPRETER, INTERPRETER_FLOOR, REQUIRED_TOOLS};
use crate::ports::ToolProbe;

/// Summary of a doctor run.
#[derive(Debug)]
pub struct DoctorOutcome {
    pub failures: usize,
}

impl DoctorOutcome {
    pub fn healthy(&self) -> bool {
        self.failures == 0
    }
}

/// Check every prerequisite, reporting all of them instead of stopping at
/// the first problem.
pub fn execute<T: ToolProbe>(tools: &T) -> DoctorOutcome {
    let mut failures = 0;
    let mut interpreter_present = false;

    for requirement in REQUIRED_TOOLS {
        match prereqs::check_tool(tools, requirement) {
            Ok(path) => {
                interpreter_present |= requirement.name == INTERPRETER;
                status::ok(format!("{} ({})", requirement.name, path.display()));
            }
            Err(err) => {
                failures += 1;
                status::fail(err.to_string());
            }
        }
    }

    // The version check only makes sense once the interpreter exists; its
    // absence was already reported above.
    if !interpreter_present {
        return DoctorOutcome { failures };
    }

    match prereqs::check_interpreter(tools) {
        Ok(version) => status::ok(format!(
            "{INTERPRETER} {version} (floor {}.{})",
            INTERPRETER_FLOOR.0, INTERPRETER_FLOOR.1
        )),
        Err(err) => {
            failures += 1;
            status::fail(err.to_string());
        }
    }

    DoctorOutcome { failures }
}
