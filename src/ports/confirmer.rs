use crate::domain::AppError;

/// Yes/no confirmation seam so the flows can run without a real terminal.
pub trait Confirmer {
    /// Ask a yes/no question. Declining must be the default: a bare answer
    /// means "no".
    fn confirm(&self, prompt: &str) -> Result<bool, AppError>;
}

/// Whether a plain-line answer counts as assent.
///
/// Anything other than these literals declines, including an empty answer.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
