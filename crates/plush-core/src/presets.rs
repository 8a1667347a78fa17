//! Style presets.
//!
//! A preset labels a report with the kind of prose the writer is aiming for.
//! Presets are annotations only: the same extractors run regardless of the
//! preset, and an unknown name simply produces an unannotated report.

use schemars::JsonSchema;
use serde::Serialize;

/// A named style preset with the emphasis and note shown in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct StylePreset {
    /// Preset name as selected by the user (e.g., "Gritty").
    pub name: &'static str,
    /// What the preset focuses on.
    pub emphasis: &'static str,
    /// A one-line description of the preset's intent.
    pub note: &'static str,
}

/// Name that explicitly selects no preset.
pub const NO_STYLE: &str = "None";

/// The preset catalog, in display order.
pub const STYLE_PRESETS: [StylePreset; 5] = [
    StylePreset {
        name: "Gritty",
        emphasis: "Cliché detection, passive voice, long sentences",
        note: "Highlights harshness and realism \u{2014} cracks down on clichés and overwritten prose.",
    },
    StylePreset {
        name: "Snappy",
        emphasis: "Filler words, punchy structure, dialogue ratio",
        note: "Focuses on rhythm, minimalism, and active scenes.",
    },
    StylePreset {
        name: "Poetic",
        emphasis: "Flow, sentence variety, rhythm",
        note: "Tolerates longer prose, flags broken rhythm or repetition.",
    },
    StylePreset {
        name: "Technical",
        emphasis: "Passive voice, clarity, redundancy",
        note: "Suited for nonfiction or precise procedural tone.",
    },
    StylePreset {
        name: "Sparse",
        emphasis: "Minimal filler, clarity, clean structure",
        note: "Zero fluff. Cuts verbosity. Favors clean delivery.",
    },
];

/// Look up a preset by its exact name.
///
/// Returns `None` for [`NO_STYLE`] and for any name not in the catalog.
pub fn find_preset(name: &str) -> Option<&'static StylePreset> {
    STYLE_PRESETS.iter().find(|preset| preset.name == name)
}

/// Names accepted as a style selection: [`NO_STYLE`] followed by every preset.
pub fn style_names() -> impl Iterator<Item = &'static str> {
    std::iter::once(NO_STYLE).chain(STYLE_PRESETS.iter().map(|preset| preset.name))
}
