//! Manuscript analysis.
//!
//! Each extractor is a pure function in its own module and can be called
//! individually. [`run_analysis`] runs all of them over one segmentation of
//! the document so sentence numbers agree across sections.

pub mod cliches;
pub mod dialogue;
pub mod fillers;
pub mod frequency;
pub mod long_sentences;
pub mod passive;
pub mod reports;

pub use reports::DocumentAnalysis;

use crate::presets;
use crate::readability;
use crate::suggestions;
use crate::text;

/// Run every extractor over `text`.
///
/// `style` only annotates the result: a recognized preset name is recorded,
/// anything else (including `"None"`) leaves it unset. The findings are the
/// same either way.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn run_analysis(text: &str, style: &str) -> DocumentAnalysis {
    let sentences = text::split_sentences(text);

    DocumentAnalysis {
        style: presets::find_preset(style).map(|preset| preset.name.to_string()),
        readability: readability::check_readability(text),
        filler_words: fillers::analyze_filler_words(text),
        long_sentences: long_sentences::analyze_long_sentences(&sentences),
        frequent_words: frequency::analyze_frequent_words(text),
        passive_voice: passive::analyze_passive_voice(&sentences),
        suggestions: suggestions::suggest_for_sentences(&sentences),
        cliches: cliches::analyze_cliches(text),
        dialogue: dialogue::extract_dialogue(text),
        speakers: dialogue::attribute_speakers(text),
    }
}
