//! # embrygen
//!
//! Generates the EmbryGo project skeleton: directories, rendered starter
//! files and `.gitkeep` placeholders.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Load configuration (defaults, then file, then environment).
//! 3. Initialise the tracing subscriber (logging).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success, or overwrite declined            |
//! |  1   | Write failure / internal error            |
//! |  2   | Usage error                               |
//! |  4   | Invalid parameter, template or config     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here and exit 0.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    let (global, command) = cli.into_command();

    // ── 2. Load configuration ─────────────────────────────────────────────
    // `init` writes the defaults, so a broken file must not block it.
    let config = if matches!(command, Commands::Init(_)) {
        AppConfig::default()
    } else {
        match AppConfig::load(global.config.as_ref()) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error: failed to load configuration: {e:#}");
                return ExitCode::from(4);
            }
        }
    };

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    // The guard flushes the log file on drop; keep it until exit.
    let _log_guard = match init_logging(&global, config.logging.file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(1);
        }
    };

    debug!(
        verbose = global.verbose,
        quiet = global.quiet,
        no_color = global.no_color,
        "CLI started"
    );

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(command, &global, config, output) {
        Ok(()) => {
            info!("embrygen completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, global.verbose > 0),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(
    command: Commands,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match command {
        Commands::Generate(args) => commands::generate::execute(args, config, output),
        Commands::Init(args) => commands::init::execute(args, global, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, global, config, output),
    }
}

/// Translate a `CliError` into a user message and an exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
