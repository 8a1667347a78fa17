//! Analyze command: the manuscript analysis report.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use plush_core::{analysis, normalize, report};

use super::{InputArgs, emit, print_json, resolve_style};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Manuscript input.
    #[command(flatten)]
    pub input: InputArgs,

    /// Style preset to annotate the report with (Gritty, Snappy, Poetic, Technical, Sparse)
    #[arg(short, long, value_name = "PRESET")]
    pub style: Option<String>,

    /// Clean the text before analyzing it
    #[arg(long)]
    pub clean: bool,

    /// Write the report to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

/// Analyze manuscript files and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(files = %args.input.describe()))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_style: Option<&str>,
    config_clean: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let clean = args.clean || config_clean;
    debug!(style = ?args.style, clean, "executing analyze command");

    let content = args.input.read(max_input_bytes)?;
    let text = if clean {
        normalize::clean(&content)
    } else {
        content
    };
    let style = resolve_style(args.style.as_deref(), config_style);

    let analysis = analysis::run_analysis(&text, &style);
    tracing::info!(
        words = analysis.readability.words,
        sentences = analysis.readability.sentences,
        findings = analysis.suggestions.findings.len(),
        "analysis complete"
    );

    if global_json {
        return print_json(&analysis);
    }

    emit(&report::render_analysis(&analysis), args.output.as_deref())
}
