use std::cmp::Ordering;
use std::fmt;

/// Parsed interpreter version, e.g. the `3.11.4` out of `Python 3.11.4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl InterpreterVersion {
    /// Parse the first dotted-version token out of `--version` output.
    ///
    /// Returns `None` when no `major.minor[.patch]` token is present.
    pub fn parse(output: &str) -> Option<Self> {
        let token = output.split_whitespace().find(|t| t.starts_with(|c: char| c.is_ascii_digit()))?;
        let core = token.split_once(['+', '-']).map_or(token, |(head, _)| head);
        let mut parts = core.split('.');

        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch = match parts.next() {
            Some(raw) => raw.parse().ok()?,
            None => 0,
        };

        if parts.next().is_some() {
            return None;
        }

        Some(Self { major, minor, patch })
    }

    /// Whether this version is at or above a `(major, minor)` floor.
    pub fn meets_floor(self, floor: (u32, u32)) -> bool {
        (self.major, self.minor).cmp(&floor) != Ordering::Less
    }
}

impl fmt::Display for InterpreterVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
