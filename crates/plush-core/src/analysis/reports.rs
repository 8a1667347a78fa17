//! Report structs for manuscript analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses. The plain-text report
//! in [`crate::report`] is rendered from these same values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::readability::ReadabilityReport;

/// Every extractor's findings for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentAnalysis {
    /// Style preset the report is annotated with, if recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Word, sentence, and grade-level statistics.
    pub readability: ReadabilityReport,
    /// Filler words that appear at least once.
    pub filler_words: FillerWordsReport,
    /// Sentences over the token threshold.
    pub long_sentences: LongSentencesReport,
    /// Most frequent non-stopword words.
    pub frequent_words: FrequentWordsReport,
    /// Sentences matching the passive-voice pattern.
    pub passive_voice: PassiveVoiceReport,
    /// Per-sentence rewrite hints.
    pub suggestions: SuggestionsReport,
    /// Catalog clichés found anywhere in the text.
    pub cliches: ClichesReport,
    /// Quoted dialogue lines.
    pub dialogue: DialogueReport,
    /// Attributed speakers and their line counts.
    pub speakers: SpeakersReport,
}

// -- Filler Words -----------------------------------------------------------

/// Filler word usage across the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FillerWordsReport {
    /// Total occurrences across all filler words.
    pub total: usize,
    /// Filler words with a non-zero count, in catalog order.
    pub words: Vec<WordCount>,
}

/// A word and how many times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordCount {
    /// The word, lowercased.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

// -- Long Sentences ---------------------------------------------------------

/// Sentences longer than the token threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LongSentencesReport {
    /// Token count a sentence must exceed to be flagged.
    pub threshold: usize,
    /// Flagged sentences in document order.
    pub sentences: Vec<LongSentence>,
}

/// A sentence flagged for length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LongSentence {
    /// Sentence number (1-indexed).
    pub sentence_num: usize,
    /// Word-punct token count.
    pub word_count: usize,
    /// The sentence text.
    pub text: String,
}

// -- Frequent Words ---------------------------------------------------------

/// Most frequent content words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FrequentWordsReport {
    /// Top words by count, ties in first-seen order.
    pub words: Vec<WordCount>,
}

// -- Passive Voice ----------------------------------------------------------

/// Sentences that look passive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PassiveVoiceReport {
    /// Number of sentences examined.
    pub sentence_count: usize,
    /// Flagged sentences in document order.
    pub sentences: Vec<PassiveSentence>,
}

/// A sentence matching the passive-voice pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PassiveSentence {
    /// Sentence number (1-indexed).
    pub sentence_num: usize,
    /// The sentence text.
    pub text: String,
    /// The matched construction (e.g., "was thrown").
    pub matched: String,
}

// -- Suggestions ------------------------------------------------------------

/// Rewrite hints for flagged sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SuggestionsReport {
    /// One finding per sentence that tripped at least one check.
    pub findings: Vec<SentenceFinding>,
}

/// A flagged sentence with the hints it earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SentenceFinding {
    /// Sentence number (1-indexed).
    pub sentence_num: usize,
    /// The sentence text.
    pub text: String,
    /// Advisory lines, in check order.
    pub issues: Vec<String>,
}

// -- Clichés ----------------------------------------------------------------

/// Clichés found in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClichesReport {
    /// Total occurrences across all clichés.
    pub total_cliches: usize,
    /// Each cliché found, once, in catalog order.
    pub cliches: Vec<ClicheFound>,
}

/// A cliché and how often it appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClicheFound {
    /// The catalog phrase.
    pub cliche: String,
    /// Number of occurrences.
    pub count: usize,
}

// -- Dialogue ---------------------------------------------------------------

/// Quoted dialogue in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DialogueReport {
    /// Each quoted span, trimmed.
    pub lines: Vec<String>,
}

/// Lines of dialogue attributed to named speakers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SpeakersReport {
    /// Speakers ordered by line count, most first.
    pub speakers: Vec<SpeakerCount>,
}

/// A speaker and how many attributed lines they have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SpeakerCount {
    /// The speaker's name as written.
    pub name: String,
    /// Number of attributed lines.
    pub lines: usize,
}
