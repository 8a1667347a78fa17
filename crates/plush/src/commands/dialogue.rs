//! Dialogue command: quoted lines in document order.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use plush_core::analysis::dialogue;
use plush_core::report;

use super::{InputArgs, emit, print_json};

/// Arguments for the `dialogue` subcommand.
#[derive(Args, Debug)]
pub struct DialogueArgs {
    /// Manuscript input.
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the dialogue to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

/// Extract quoted dialogue from manuscript files.
#[instrument(name = "cmd_dialogue", skip_all, fields(files = %args.input.describe()))]
pub fn cmd_dialogue(
    args: DialogueArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing dialogue command");

    let content = args.input.read(max_input_bytes)?;
    let found = dialogue::extract_dialogue(&content);

    if global_json {
        return print_json(&found);
    }

    if found.lines.is_empty() {
        eprintln!("{}", "No dialogue found in this manuscript.".yellow());
        return Ok(());
    }

    emit(&report::render_dialogue(&found), args.output.as_deref())
}
