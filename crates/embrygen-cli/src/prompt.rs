//! Interactive confirmation on standard input.

use std::io::{self, BufRead, Write};

use tracing::debug;

use embrygen_core::{
    application::{ApplicationError, Confirmation, is_affirmative},
    error::EmbrygenResult,
};

/// Asks on stderr and reads one line from stdin.
///
/// Only `y`/`Y` accepts; anything else, including an empty line or EOF,
/// declines.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirmation;

impl StdinConfirmation {
    pub fn new() -> Self {
        Self
    }

    fn ask(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<bool> {
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut answer = String::new();
        let read = input.read_line(&mut answer)?;
        if read == 0 {
            // EOF: nothing typed, nothing echoed; end the prompt line.
            writeln!(out)?;
        }
        Ok(is_affirmative(&answer))
    }
}

impl Confirmation for StdinConfirmation {
    fn confirm(&self, prompt: &str) -> EmbrygenResult<bool> {
        let stdin = io::stdin();
        let mut stderr = io::stderr();
        let answer = Self::ask(prompt, &mut stdin.lock(), &mut stderr).map_err(|e| {
            ApplicationError::ConfirmationFailed {
                reason: e.to_string(),
            }
        })?;
        debug!(answer, "Confirmation answered");
        Ok(answer)
    }
}
