//! Clichés command.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use plush_core::analysis::cliches;
use plush_core::report;

use super::{InputArgs, emit, print_json};

/// Arguments for the `cliches` subcommand.
#[derive(Args, Debug)]
pub struct ClichesArgs {
    /// Manuscript input.
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the cliché report to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

/// Find catalog clichés in manuscript files.
#[instrument(name = "cmd_cliches", skip_all, fields(files = %args.input.describe()))]
pub fn cmd_cliches(
    args: ClichesArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing cliches command");

    let content = args.input.read(max_input_bytes)?;
    let found = cliches::analyze_cliches(&content);

    if global_json {
        return print_json(&found);
    }

    emit(&report::render_cliches(&found), args.output.as_deref())
}
