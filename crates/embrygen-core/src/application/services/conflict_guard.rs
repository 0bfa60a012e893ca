//! Conflict guard - the only destructive step of a run.
//!
//! Checks whether the project root already exists and, if it does, asks the
//! injected [`Confirmation`] before removing it. The check and the removal
//! are not atomic: two runs racing on the same root are not supported.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::ports::{Confirmation, Filesystem, ScaffoldObserver},
    error::EmbrygenResult,
};

/// Outcome of the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// The root is absent (or was removed); generation may continue.
    Proceed,
    /// The user declined; nothing was touched.
    Abort,
}

/// Question asked when `root` already exists.
pub fn overwrite_prompt(root: &Path) -> String {
    format!(
        "Directory '{}' already exists. Remove existing directory and continue? (y/N): ",
        root.display()
    )
}

/// `true` only for `y`/`Y`, ignoring surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

pub struct ConflictGuard<'a> {
    filesystem: &'a dyn Filesystem,
    confirmation: &'a dyn Confirmation,
}

impl<'a> ConflictGuard<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, confirmation: &'a dyn Confirmation) -> Self {
        Self {
            filesystem,
            confirmation,
        }
    }

    /// Evaluate the guard once for `root`.
    ///
    /// Confirmation is only requested when the root exists. On acceptance
    /// the whole tree is removed before returning [`GuardDecision::Proceed`].
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn check(
        &self,
        root: &Path,
        observer: &dyn ScaffoldObserver,
    ) -> EmbrygenResult<GuardDecision> {
        if !self.filesystem.exists(root) {
            return Ok(GuardDecision::Proceed);
        }

        if !self.confirmation.confirm(&overwrite_prompt(root))? {
            info!("Existing project root kept; aborting");
            return Ok(GuardDecision::Abort);
        }

        self.filesystem.remove_dir_all(root)?;
        info!("Removed existing project root");
        observer.root_removed(root);

        Ok(GuardDecision::Proceed)
    }
}
