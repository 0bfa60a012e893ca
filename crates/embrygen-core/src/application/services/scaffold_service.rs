//! Scaffold engine - main application orchestrator.
//!
//! A run is a strictly linear state machine:
//!
//! ```text
//! Init -> GuardChecked -> RootCreated -> DirsCreated -> FilesWritten -> Done
//!              |
//!              +-> Aborted
//! ```
//!
//! Everything that can fail without touching the disk (spec validation,
//! template loading, rendering) happens in `Init`, so a bad template never
//! reaches the destructive guard. Any later failure halts the run and leaves
//! the partial tree in place; there is no rollback.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, info_span, instrument};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{
            Confirmation, Filesystem, NoopObserver, ScaffoldObserver, TemplateRenderer,
            TemplateStore,
        },
        services::{
            conflict_guard::{ConflictGuard, GuardDecision},
            materializer::FileMaterializer,
        },
    },
    domain::{
        DirectoryPlanner, DomainValidator as validator, GenerationSpec, ProjectStructure,
        RenderContext,
    },
    error::EmbrygenResult,
};

/// Lifecycle of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScaffoldState {
    Init,
    GuardChecked,
    RootCreated,
    DirsCreated,
    FilesWritten,
    Done,
    Aborted,
}

impl ScaffoldState {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Init => "Init",
            Self::GuardChecked => "GuardChecked",
            Self::RootCreated => "RootCreated",
            Self::DirsCreated => "DirsCreated",
            Self::FilesWritten => "FilesWritten",
            Self::Done => "Done",
            Self::Aborted => "Aborted",
        }
    }

    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Init, Self::GuardChecked)
                | (Self::GuardChecked, Self::RootCreated)
                | (Self::GuardChecked, Self::Aborted)
                | (Self::RootCreated, Self::DirsCreated)
                | (Self::DirsCreated, Self::FilesWritten)
                | (Self::FilesWritten, Self::Done)
        )
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Aborted)
    }
}

impl fmt::Display for ScaffoldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tracks the current state and rejects illegal moves.
#[derive(Debug)]
struct StateTracker {
    current: ScaffoldState,
}

impl StateTracker {
    fn new() -> Self {
        Self {
            current: ScaffoldState::Init,
        }
    }

    fn advance(&mut self, next: ScaffoldState) -> EmbrygenResult<()> {
        if !self.current.can_transition_to(next) {
            return Err(ApplicationError::IllegalTransition {
                from: self.current.name(),
                to: next.name(),
            }
            .into());
        }
        info!(from = %self.current, to = %next, "State transition");
        self.current = next;
        Ok(())
    }
}

/// Result of [`ScaffoldEngine::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Completed(ScaffoldSummary),
    /// The project root existed and removal was declined. Not an error.
    Aborted { project_root: PathBuf },
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldSummary {
    pub run_id: Uuid,
    pub project_root: PathBuf,
    pub template: String,
    pub module_id: String,
    pub app_name: String,
    pub directories_created: usize,
    pub files_written: Vec<String>,
    pub placeholders_kept: Vec<String>,
}

impl ScaffoldSummary {
    /// Recommended follow-up commands for the generated project.
    ///
    /// `cd_path` is how the project root should be shown in the `cd` step
    /// (usually relative to the caller's working directory).
    pub fn next_steps(&self, cd_path: &str) -> Vec<String> {
        vec![
            format!("cd {cd_path}"),
            "Review and update `.env` from `.env.example` (especially `APP_BASE_URL`).".into(),
            "Run `make setup-tools` to install Node.js and Python tool dependencies.".into(),
            "Run `go mod tidy` or `make tidy` to fetch Go dependencies.".into(),
            "Run `make run` for development (requires Air, Templ CLI).".into(),
            "Or, `make build` then `make start-prod` for a production-like build.".into(),
            "Download the actual htmx.min.js library and replace the placeholder in webroot/statics/htmx.min.js.".into(),
        ]
    }
}

/// Main scaffolding engine.
///
/// Owns its adapters; a single engine can run any number of specs, one
/// after another. Runs are sequential and not cancellable.
pub struct ScaffoldEngine {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    confirmation: Box<dyn Confirmation>,
    observer: Box<dyn ScaffoldObserver>,
}

impl ScaffoldEngine {
    /// Create a new engine with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use embrygen_core::application::ScaffoldEngine;
    ///
    /// let engine = ScaffoldEngine::new(
    ///     store,        // impl TemplateStore
    ///     renderer,     // impl TemplateRenderer
    ///     filesystem,   // impl Filesystem
    ///     confirmation, // impl Confirmation
    /// );
    /// let outcome = engine.run(&spec)?;
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        confirmation: Box<dyn Confirmation>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
            confirmation,
            observer: Box::new(NoopObserver),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn ScaffoldObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Validate, load and render everything in memory.
    ///
    /// Never touches the filesystem; used directly for dry runs.
    #[instrument(skip_all, fields(root = %spec.project_root().display()))]
    pub fn plan(&self, spec: &GenerationSpec) -> EmbrygenResult<ProjectStructure> {
        validator::validate_spec(spec)?;

        let set = self.store.load()?;
        validator::validate_template_set(&set)?;
        info!(template = %set, files = set.file_count(), "Template set loaded");

        let directories = DirectoryPlanner::plan(spec)?;
        let context = RenderContext::from_spec(spec);

        let mut structure =
            ProjectStructure::new(spec.project_root(), set.to_string(), directories);
        for entry in &set.files {
            structure.add_file(self.renderer.render(entry, &context)?);
        }
        validator::validate_project_structure(&structure)?;

        Ok(structure)
    }

    /// Run the whole scaffold for `spec`.
    pub fn run(&self, spec: &GenerationSpec) -> EmbrygenResult<ScaffoldOutcome> {
        let run_id = Uuid::new_v4();
        let span = info_span!("scaffold", %run_id, root = %spec.project_root().display());
        let _span = span.enter();

        let mut state = StateTracker::new();

        // Init
        let structure = self.plan(spec)?;
        let root = structure.root().clone();

        // Init -> GuardChecked
        let guard = ConflictGuard::new(self.filesystem.as_ref(), self.confirmation.as_ref());
        let decision = guard.check(&root, self.observer.as_ref())?;
        state.advance(ScaffoldState::GuardChecked)?;

        if decision == GuardDecision::Abort {
            state.advance(ScaffoldState::Aborted)?;
            return Ok(ScaffoldOutcome::Aborted { project_root: root });
        }

        let materializer =
            FileMaterializer::new(self.filesystem.as_ref(), self.observer.as_ref(), &root);

        // GuardChecked -> RootCreated
        materializer.create_root()?;
        state.advance(ScaffoldState::RootCreated)?;

        // RootCreated -> DirsCreated: directories, then placeholders
        let plan = structure.directories();
        for dir in plan.directories() {
            materializer.create_dir(&dir.path)?;
        }
        for dir in plan.placeholders() {
            materializer.write(&dir.placeholder_path()?, "")?;
        }
        state.advance(ScaffoldState::DirsCreated)?;

        // DirsCreated -> FilesWritten
        let mut files_written = Vec::with_capacity(structure.file_count());
        for file in structure.files() {
            materializer.write(&file.path, &file.content)?;
            files_written.push(file.path.to_slash_string());
        }

        let mut placeholders_kept = Vec::new();
        for dir in plan.placeholders() {
            let placeholder = dir.placeholder_path()?;
            if structure.has_content_under(&dir.path) {
                materializer.remove(&placeholder)?;
            } else {
                placeholders_kept.push(placeholder.to_slash_string());
            }
        }
        state.advance(ScaffoldState::FilesWritten)?;

        // FilesWritten -> Done
        let summary = ScaffoldSummary {
            run_id,
            project_root: root,
            template: structure.template().to_string(),
            module_id: spec.module_id().to_string(),
            app_name: spec.app_name().to_string(),
            directories_created: plan.len(),
            files_written,
            placeholders_kept,
        };
        state.advance(ScaffoldState::Done)?;
        info!(
            files = summary.files_written.len(),
            placeholders = summary.placeholders_kept.len(),
            "Scaffold completed successfully"
        );

        Ok(ScaffoldOutcome::Completed(summary))
    }
}
