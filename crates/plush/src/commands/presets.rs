//! Presets command: list the style presets.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use plush_core::presets::STYLE_PRESETS;

use super::print_json;

/// Arguments for the `presets` subcommand.
#[derive(Args, Debug, Default)]
pub struct PresetsArgs {
    // No subcommand-specific arguments; uses global --json flag
}

/// List the available style presets.
#[instrument(name = "cmd_presets", skip_all)]
pub fn cmd_presets(_args: PresetsArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing presets command");

    if global_json {
        return print_json(&STYLE_PRESETS);
    }

    for (i, preset) in STYLE_PRESETS.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", preset.name.bold());
        println!("  {}: {}", "Focus".dimmed(), preset.emphasis);
        println!("  {}: {}", "Note".dimmed(), preset.note);
    }

    Ok(())
}
