//! Interactive confirmation prompts.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Confirm;

use crate::domain::AppError;
use crate::ports::{Confirmer, is_affirmative};

/// Terminal-backed [`Confirmer`].
///
/// With a terminal attached this is a dialoguer prompt. With piped input it
/// degrades to reading one line from stdin, so scripted runs behave like the
/// shell installer's `read -p`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        if io::stdin().is_terminal() {
            return Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .map_err(|e| AppError::config_error(format!("Confirmation prompt failed: {e}")));
        }

        print!("{prompt} [y/N] ");
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}
