//! Clean command: normalize quotes, dashes, and whitespace.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use plush_core::normalize;

use super::{InputArgs, emit, print_json};

/// Arguments for the `clean` subcommand.
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Manuscript input.
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the cleaned text to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct CleanOutput {
    text: String,
    chars_before: usize,
    chars_after: usize,
}

/// Print (or write) the normalized manuscript text.
#[instrument(name = "cmd_clean", skip_all, fields(files = %args.input.describe()))]
pub fn cmd_clean(
    args: CleanArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(output = ?args.output, "executing clean command");

    let content = args.input.read(max_input_bytes)?;
    let cleaned = normalize::clean(&content);

    if global_json {
        return print_json(&CleanOutput {
            chars_before: content.chars().count(),
            chars_after: cleaned.chars().count(),
            text: cleaned,
        });
    }

    emit(&cleaned, args.output.as_deref())
}
