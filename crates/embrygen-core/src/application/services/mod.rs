//! Application services - orchestrate use cases.
//!
//! The engine sequences the guard, the planner, the renderer and the
//! materializer for one scaffold run.

pub mod conflict_guard;
pub mod materializer;
pub mod scaffold_service;

pub use conflict_guard::{ConflictGuard, GuardDecision, is_affirmative, overwrite_prompt};
pub use materializer::FileMaterializer;
pub use scaffold_service::{ScaffoldEngine, ScaffoldOutcome, ScaffoldState, ScaffoldSummary};
