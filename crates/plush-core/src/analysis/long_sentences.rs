//! Long sentence detection.

use crate::text::{self, Sentence};

use super::reports::{LongSentence, LongSentencesReport};

/// A sentence is flagged when its token count exceeds this.
pub const LONG_SENTENCE_TOKENS: usize = 30;

/// Whether a sentence exceeds [`LONG_SENTENCE_TOKENS`] word-punct tokens.
///
/// Punctuation tokens count toward the total.
pub fn is_long_sentence(sentence: &str) -> bool {
    text::count_tokens(sentence) > LONG_SENTENCE_TOKENS
}

/// Flag sentences longer than [`LONG_SENTENCE_TOKENS`] tokens.
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn analyze_long_sentences(sentences: &[Sentence]) -> LongSentencesReport {
    let sentences = sentences
        .iter()
        .filter_map(|sentence| {
            let word_count = text::count_tokens(&sentence.text);
            (word_count > LONG_SENTENCE_TOKENS).then(|| LongSentence {
                sentence_num: sentence.ordinal,
                word_count,
                text: sentence.text.clone(),
            })
        })
        .collect();

    LongSentencesReport {
        threshold: LONG_SENTENCE_TOKENS,
        sentences,
    }
}
