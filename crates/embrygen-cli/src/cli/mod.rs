//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No generation logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand, `embrygen` behaves like `embrygen generate`.
#[derive(Debug, Parser)]
#[command(
    name    = "embrygen",
    bin_name = "embrygen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate an EmbryGo (Go + Templ + HTMX) project skeleton",
    long_about = "embrygen materializes the EmbryGo starter: a Go web service \
                  with Templ views, HTMX, Tailwind tooling and a Makefile, \
                  with your module path and app name substituted in.",
    after_help = "EXAMPLES:\n\
        \x20 embrygen\n\
        \x20 embrygen generate --root-name demo --module example.com/demo --app-name svc\n\
        \x20 embrygen generate --base-dir ~/src --yes --output-format json\n\
        \x20 embrygen completions bash > ~/.local/share/bash-completion/completions/embrygen",
    args_conflicts_with_subcommands = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Generation flags when no subcommand is given.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl Cli {
    /// The command to run, with the implicit `generate` made explicit.
    pub fn into_command(self) -> (GlobalArgs, Commands) {
        let command = self
            .command
            .unwrap_or(Commands::Generate(self.generate));
        (self.global, command)
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a project.
    #[command(
        visible_alias = "g",
        about = "Generate an EmbryGo project (default command)",
        after_help = "EXAMPLES:\n\
            \x20 embrygen generate\n\
            \x20 embrygen generate --root-name demo --module example.com/demo --app-name svc\n\
            \x20 embrygen generate --templates-dir ./my-pack --dry-run"
    )]
    Generate(GenerateArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 embrygen init                       # platform config location\n\
            \x20 embrygen --config ./embrygen.toml init\n\
            \x20 embrygen init --force               # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 embrygen completions bash > ~/.local/share/bash-completion/completions/embrygen\n\
            \x20 embrygen completions zsh  > ~/.zfunc/_embrygen\n\
            \x20 embrygen completions fish > ~/.config/fish/completions/embrygen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 embrygen config get generation.module_id\n\
            \x20 embrygen config list\n\
            \x20 embrygen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `embrygen generate`.
///
/// Every parameter falls back to the configuration (file, then
/// `EMBRYGEN__GENERATION__*` environment), then to the built-in defaults.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Name of the project root directory.
    #[arg(
        short = 'n',
        long = "root-name",
        value_name = "NAME",
        help = "Project root directory name [default: embrygo-project]"
    )]
    pub root_name: Option<String>,

    /// Directory the project root is created in.
    #[arg(
        short = 'b',
        long = "base-dir",
        value_name = "DIR",
        help = "Directory to create the project in [default: tests]"
    )]
    pub base_dir: Option<PathBuf>,

    /// Go module path.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "MODULE",
        help = "Go module path [default: github.com/r-via/embrygo]"
    )]
    pub module: Option<String>,

    /// Name of the service under `cmd/`.
    #[arg(
        short = 'a',
        long = "app-name",
        value_name = "NAME",
        help = "Service name under cmd/ [default: service-app]"
    )]
    pub app_name: Option<String>,

    /// Python venv directory under `tools/`.
    #[arg(
        long = "venv-dir",
        value_name = "NAME",
        help = "Tool venv directory under tools/ [default: .venv]"
    )]
    pub venv_dir: Option<String>,

    /// Template pack directory (`template.toml` + `files/`).
    #[arg(
        long = "templates-dir",
        value_name = "DIR",
        env = "EMBRYGEN_TEMPLATES_DIR",
        help = "Use a template pack from disk instead of the built-in one"
    )]
    pub templates_dir: Option<PathBuf>,

    /// Remove an existing project root without asking.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Overwrite an existing project root without prompting"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `embrygen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `embrygen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `embrygen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generation.app_name`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
