//! Characters command: dialogue lines per attributed speaker.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use plush_core::analysis::dialogue;
use plush_core::report;

use super::{InputArgs, emit, print_json};

/// Arguments for the `characters` subcommand.
#[derive(Args, Debug)]
pub struct CharactersArgs {
    /// Manuscript input.
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the character report to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

/// Count attributed dialogue lines per character.
#[instrument(name = "cmd_characters", skip_all, fields(files = %args.input.describe()))]
pub fn cmd_characters(
    args: CharactersArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing characters command");

    let content = args.input.read(max_input_bytes)?;
    let speakers = dialogue::attribute_speakers(&content);

    if global_json {
        return print_json(&speakers);
    }

    emit(&report::render_speakers(&speakers), args.output.as_deref())
}
