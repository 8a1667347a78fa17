//! Filler word counting.

use crate::text;
use crate::word_lists::FILLER_WORDS;

use super::reports::{FillerWordsReport, WordCount};

/// Count filler words across the whole document.
///
/// The text is split on whitespace and lowercased; a filler word counts only
/// when a token equals it exactly, so `"just,"` does not count as `just`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_filler_words(text: &str) -> FillerWordsReport {
    let lower = text.to_lowercase();
    let tokens: Vec<&str> = text::whitespace_words(&lower).collect();

    let words: Vec<WordCount> = FILLER_WORDS
        .iter()
        .map(|&filler| WordCount {
            word: filler.to_string(),
            count: tokens.iter().filter(|&&token| token == filler).count(),
        })
        .filter(|wc| wc.count > 0)
        .collect();

    FillerWordsReport {
        total: words.iter().map(|wc| wc.count).sum(),
        words,
    }
}

/// Sum of filler-word substring occurrences in one sentence.
///
/// Unlike [`analyze_filler_words`] this is a density signal: each filler is
/// counted wherever it appears in the lowercased sentence, even inside a
/// longer word.
pub fn filler_density(sentence: &str) -> usize {
    let lower = sentence.to_lowercase();
    FILLER_WORDS
        .iter()
        .map(|filler| lower.matches(filler).count())
        .sum()
}
