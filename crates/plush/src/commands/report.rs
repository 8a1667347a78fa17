//! Report command: the full, timestamped export.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument, warn};

use plush_core::report;

use super::{InputArgs, emit, resolve_style};

/// Arguments for the `report` subcommand.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Manuscript input.
    #[command(flatten)]
    pub input: InputArgs,

    /// Style preset to annotate the report with (Gritty, Snappy, Poetic, Technical, Sparse)
    #[arg(short, long, value_name = "PRESET")]
    pub style: Option<String>,

    /// Write the report to FILE instead of stdout (e.g. full_report.txt)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

/// Build the full report for manuscript files.
///
/// The full report is text only; `--json` is accepted as a global flag but
/// logs a warning here. Use `analyze --json` for structured output.
#[instrument(name = "cmd_report", skip_all, fields(files = %args.input.describe()))]
pub fn cmd_report(
    args: ReportArgs,
    global_json: bool,
    config_style: Option<&str>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(style = ?args.style, output = ?args.output, "executing report command");

    if global_json {
        warn!("--json is not supported by report; printing the text report (use analyze --json)");
    }

    let content = args.input.read(max_input_bytes)?;
    let style = resolve_style(args.style.as_deref(), config_style);
    let full_report = report::export_full_report(&content, &style);

    emit(&full_report, args.output.as_deref())
}
