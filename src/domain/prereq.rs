//! Required host tools, checked before any filesystem mutation.

/// A required external tool with a remediation hint for operators.
#[derive(Debug, Clone, Copy)]
pub struct ToolRequirement {
    pub name: &'static str,
    pub hint: &'static str,
}

/// Tools the installed application's own setup needs on the host.
pub const REQUIRED_TOOLS: [ToolRequirement; 4] = [
    ToolRequirement {
        name: "git",
        hint: "Install it with your package manager, e.g. `apt install git`.",
    },
    ToolRequirement {
        name: "tar",
        hint: "Install it with your package manager, e.g. `apt install tar`.",
    },
    ToolRequirement {
        name: "python3",
        hint: "Install Python 3.9 or newer, e.g. `apt install python3`.",
    },
    ToolRequirement {
        name: "pip3",
        hint: "Install pip for Python 3, e.g. `apt install python3-pip`.",
    },
];

/// The interpreter whose version is checked against [`INTERPRETER_FLOOR`].
pub const INTERPRETER: &str = "python3";

/// Minimum supported interpreter version (major, minor).
pub const INTERPRETER_FLOOR: (u32, u32) = (3, 9);
