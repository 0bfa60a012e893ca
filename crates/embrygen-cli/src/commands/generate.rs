//! Implementation of `embrygen generate` (and bare `embrygen`).
//!
//! Responsibility: merge flags over configuration into a `GenerationSpec`,
//! wire the adapters into a `ScaffoldEngine`, and display the outcome. No
//! generation logic lives here.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};

use embrygen_adapters::{
    EmbeddedTemplates, FilesystemTemplateLoader, FixedConfirmation, LocalFilesystem,
    SimpleRenderer,
};
use embrygen_core::{
    application::{
        Confirmation, ScaffoldEngine, ScaffoldOutcome, ScaffoldSummary, TemplateStore,
    },
    domain::{GenerationSpec, ProjectStructure},
    error::EmbrygenError,
};

use crate::{
    cli::GenerateArgs,
    config::{AppConfig, GenerationConfig},
    error::{CliError, CliResult},
    output::{OutputManager, ProgressObserver},
    prompt::StdinConfirmation,
};

/// Execute the generate command.
///
/// Dispatch sequence:
/// 1. Resolve the `GenerationSpec` (flags over config over defaults)
/// 2. Pick the template source and the confirmation strategy
/// 3. Early-exit with a listing if `--dry-run`
/// 4. Run the engine and print the summary (or `Aborted.`)
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let spec = resolve_spec(&args, &config.generation)?;
    info!(spec = %spec, "Spec resolved");

    let store = template_store(&args, &config);
    let confirmation: Box<dyn Confirmation> = if args.yes {
        Box::new(FixedConfirmation::accept())
    } else {
        Box::new(StdinConfirmation::new())
    };

    let engine = ScaffoldEngine::new(
        store,
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        confirmation,
    )
    .with_observer(Box::new(ProgressObserver::new(output.clone())));

    let root = spec.project_root();

    if args.dry_run {
        let structure = engine.plan(&spec)?;
        return report_dry_run(&structure, &output);
    }

    output.header(&format!(
        "Generating EmbryGo project structure in: {}",
        absolute(&root).display()
    ))?;

    match engine.run(&spec)? {
        ScaffoldOutcome::Completed(summary) => {
            report_completed(&summary, spec.root_name(), &output)
        }
        ScaffoldOutcome::Aborted { project_root } => {
            info!(root = %project_root.display(), "Generation aborted by user");
            if output.is_json() {
                emit_json(
                    &output,
                    &AbortedReport {
                        status: "aborted",
                        generated_at: Utc::now(),
                        project_root,
                    },
                )
            } else {
                output.warning("Aborted.")?;
                Ok(())
            }
        }
    }
}

/// Flags win over configuration, which already merged file, env and
/// defaults.
pub fn resolve_spec(
    args: &GenerateArgs,
    defaults: &GenerationConfig,
) -> Result<GenerationSpec, EmbrygenError> {
    let spec = GenerationSpec::builder()
        .root_name(pick(&args.root_name, &defaults.root_name))
        .base_dir(
            args.base_dir
                .clone()
                .unwrap_or_else(|| defaults.base_dir.clone()),
        )
        .module_id(pick(&args.module, &defaults.module_id))
        .app_name(pick(&args.app_name, &defaults.app_name))
        .venv_dir_name(pick(&args.venv_dir, &defaults.venv_dir_name))
        .build()?;
    Ok(spec)
}

fn pick(flag: &Option<String>, fallback: &str) -> String {
    flag.clone().unwrap_or_else(|| fallback.to_string())
}

fn template_store(args: &GenerateArgs, config: &AppConfig) -> Box<dyn TemplateStore> {
    match args
        .templates_dir
        .as_ref()
        .or(config.templates.local_path.as_ref())
    {
        Some(dir) => {
            info!(dir = %dir.display(), "Using template pack from disk");
            Box::new(FilesystemTemplateLoader::new(dir))
        }
        None => Box::new(EmbeddedTemplates::new()),
    }
}

// ── Reports ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct CompletedReport<'a> {
    status: &'static str,
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    summary: &'a ScaffoldSummary,
    next_steps: Vec<String>,
}

#[derive(Debug, Serialize)]
struct AbortedReport {
    status: &'static str,
    generated_at: DateTime<Utc>,
    project_root: PathBuf,
}

#[derive(Debug, Serialize)]
struct DryRunReport {
    status: &'static str,
    generated_at: DateTime<Utc>,
    project_root: PathBuf,
    template: String,
    directories: Vec<String>,
    files: Vec<String>,
}

fn report_completed(
    summary: &ScaffoldSummary,
    root_name: &str,
    output: &OutputManager,
) -> CliResult<()> {
    let steps = summary.next_steps(&cd_path(&summary.project_root));

    if output.is_json() {
        return emit_json(
            output,
            &CompletedReport {
                status: "completed",
                generated_at: Utc::now(),
                summary,
                next_steps: steps,
            },
        );
    }

    output.print("")?;
    output.success(&format!(
        "EmbryGo project '{}' generated successfully in '{}'!",
        root_name,
        absolute(&summary.project_root).display()
    ))?;
    output.print(&format!("   Go Module Name: {}", summary.module_id))?;
    output.print("")?;
    output.print("Next steps:")?;
    for (i, step) in steps.iter().enumerate() {
        output.print(&format!("{}. {}", i + 1, step))?;
    }
    Ok(())
}

fn report_dry_run(structure: &ProjectStructure, output: &OutputManager) -> CliResult<()> {
    let plan = structure.directories();
    let directories: Vec<String> = plan.directories().map(|d| d.path.to_slash_string()).collect();
    let files: Vec<String> = structure.files().map(|f| f.path.to_slash_string()).collect();

    if output.is_json() {
        return emit_json(
            output,
            &DryRunReport {
                status: "dry_run",
                generated_at: Utc::now(),
                project_root: structure.root().clone(),
                template: structure.template().to_string(),
                directories,
                files,
            },
        );
    }

    let root = structure.root();
    output.info(&format!(
        "Dry run: would generate {} from {}",
        root.display(),
        structure.template()
    ))?;
    for dir in &directories {
        output.print(&format!("  Would create dir: {}", root.join(dir).display()))?;
    }
    for file in &files {
        output.print(&format!("  Would create: {}", root.join(file).display()))?;
    }
    Ok(())
}

fn emit_json<T: Serialize>(output: &OutputManager, report: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| CliError::IoError {
        message: format!("Failed to serialise report: {e}"),
        source: std::io::Error::other(e),
    })?;
    output.emit(&json)?;
    Ok(())
}

// ── Paths ─────────────────────────────────────────────────────────────────────

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// How to `cd` into `root` from the current directory, with forward slashes.
pub fn cd_path(root: &Path) -> String {
    let shown = if root.is_relative() {
        root.to_path_buf()
    } else {
        std::env::current_dir()
            .ok()
            .and_then(|cwd| root.strip_prefix(cwd).ok().map(Path::to_path_buf))
            .unwrap_or_else(|| root.to_path_buf())
    };
    shown.to_string_lossy().replace('\\', "/")
}
