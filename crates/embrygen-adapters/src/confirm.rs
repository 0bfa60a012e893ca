//! Non-interactive confirmation.

use std::sync::atomic::{AtomicUsize, Ordering};

use embrygen_core::{application::ports::Confirmation, error::EmbrygenResult};
use tracing::info;

/// Answers every prompt with the same decision.
///
/// Used for `--yes` and by tests that need a deterministic answer.
#[derive(Debug)]
pub struct FixedConfirmation {
    answer: bool,
    asked: AtomicUsize,
}

impl FixedConfirmation {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn accept() -> Self {
        Self::new(true)
    }

    pub fn decline() -> Self {
        Self::new(false)
    }

    /// How many prompts were answered.
    pub fn times_asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

impl Confirmation for FixedConfirmation {
    fn confirm(&self, prompt: &str) -> EmbrygenResult<bool> {
        self.asked.fetch_add(1, Ordering::SeqCst);
        info!(prompt = prompt.trim_end(), answer = self.answer, "Answered without prompting");
        Ok(self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_and_counts() {
        let yes = FixedConfirmation::accept();
        assert!(yes.confirm("Remove?").unwrap());
        assert!(yes.confirm("Remove?").unwrap());
        assert_eq!(yes.times_asked(), 2);

        let no = FixedConfirmation::decline();
        assert!(!no.confirm("Remove?").unwrap());
    }
}
