//! Library interface for the `plush` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man pages
//! and shell completions.

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, plush=trace)
    PLUSH_LOG_PATH         Explicit log file path
    PLUSH_LOG_DIR          Log directory
    PLUSH_STYLE            Default style preset (Gritty, Snappy, Poetic, Technical, Sparse)
    PLUSH_MAX_INPUT_BYTES  Maximum input file size in bytes
";
/// Command-line interface definition for plush.
#[derive(Parser)]
#[command(name = "plush")]
#[command(about = "Soft on the surface, sharp on the scene: manuscript analysis for fiction writers", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Straighten quotes, convert double hyphens, and collapse whitespace
    Clean(commands::clean::CleanArgs),

    /// Analyze a manuscript: fillers, long sentences, passive voice, suggestions
    Analyze(commands::analyze::AnalyzeArgs),

    /// Export the full report with dialogue, characters, and clichés
    Report(commands::report::ReportArgs),

    /// Extract quoted dialogue
    Dialogue(commands::dialogue::DialogueArgs),

    /// Count dialogue lines per attributed character
    Characters(commands::characters::CharactersArgs),

    /// Find clichés
    Cliches(commands::cliches::ClichesArgs),

    /// List style presets
    Presets(commands::presets::PresetsArgs),

    /// Show package information
    Info(commands::info::InfoArgs),

    /// Start MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn analyze_accepts_several_files_and_style() {
        let cli = Cli::try_parse_from([
            "plush", "analyze", "one.txt", "two.docx", "--style", "Gritty", "--clean",
        ])
        .expect("valid arguments");
        let Some(Commands::Analyze(args)) = cli.command else {
            panic!("expected analyze command");
        };
        assert_eq!(args.input.files.len(), 2);
        assert_eq!(args.style.as_deref(), Some("Gritty"));
        assert!(args.clean);
    }

    #[test]
    fn file_commands_require_a_file() {
        assert!(Cli::try_parse_from(["plush", "dialogue"]).is_err());
    }
}
