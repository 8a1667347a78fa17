//! Readability scoring using Flesch-Kincaid Grade Level.
//!
//! Formula: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`
//!
//! Lower grade = more readable. Most commercial fiction lands between grades
//! 4 and 8.
//!
//! Words are whitespace-separated, sentences come from
//! [`text::split_sentences`], and syllables from the exception-backed counter
//! in [`dictionaries::syllables`](crate::dictionaries::syllables).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::syllables;
use crate::text;

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Number of whitespace-separated words.
    pub words: usize,
    /// Number of sentences detected.
    pub sentences: usize,
    /// Total syllable count.
    pub syllables: usize,
    /// Average words per sentence.
    pub avg_sentence_length: f64,
    /// Flesch-Kincaid Grade Level score.
    pub grade: f64,
}

/// Score the readability of `text`.
///
/// Total over any input: text with no words or no sentences scores 0 for
/// every field instead of dividing by zero.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check_readability(text: &str) -> ReadabilityReport {
    let words = text::whitespace_words(text).count();
    let sentences = text::split_sentences(text).len();
    let syllables = count_syllables(text);

    if words == 0 || sentences == 0 {
        return ReadabilityReport {
            words,
            sentences,
            syllables,
            avg_sentence_length: 0.0,
            grade: 0.0,
        };
    }

    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    let grade = 0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59;

    ReadabilityReport {
        words,
        sentences,
        syllables,
        avg_sentence_length: words_per_sentence,
        grade,
    }
}

/// Count total syllables across all words, ignoring surrounding punctuation.
fn count_syllables(text: &str) -> usize {
    text::whitespace_words(text)
        .map(|w| {
            let cleaned = w.trim_matches(|c: char| !c.is_alphabetic());
            if cleaned.is_empty() {
                0
            } else {
                syllables::count_syllables(cleaned)
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_readability() {
        let report = check_readability("The cat sat on the mat. The dog ran fast.");
        assert_eq!(report.words, 10);
        assert_eq!(report.sentences, 2);
        assert_eq!(report.syllables, 10);
        assert!((report.avg_sentence_length - 5.0).abs() < f64::EPSILON);
        assert!(report.grade < 0.0);
    }

    #[test]
    fn dense_prose_scores_high() {
        let text = "The implementation of the comprehensive organizational restructuring \
                    initiative necessitated the establishment of interdepartmental \
                    communication protocols that facilitated the dissemination of \
                    procedural documentation.";
        let report = check_readability(text);
        assert_eq!(report.sentences, 1);
        assert!(report.grade > 12.0);
    }

    #[test]
    fn empty_input_scores_zero() {
        let report = check_readability("");
        assert_eq!(report.words, 0);
        assert_eq!(report.sentences, 0);
        assert_eq!(report.syllables, 0);
        assert!(report.avg_sentence_length.abs() < f64::EPSILON);
        assert!(report.grade.abs() < f64::EPSILON);
    }

    #[test]
    fn punctuation_only_words_have_no_syllables() {
        let report = check_readability("Wait \u{2014} go.");
        assert_eq!(report.words, 3);
        assert_eq!(report.syllables, 2);
        assert!(report.grade.is_finite());
    }
}
