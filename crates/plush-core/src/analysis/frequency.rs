//! Word frequency counting.

use std::collections::HashMap;

use crate::dictionaries::stopwords::is_stopword;
use crate::text;

use super::reports::{FrequentWordsReport, WordCount};

/// How many words the frequency listing keeps.
pub const TOP_WORDS: usize = 5;

/// Find the most frequent content words.
///
/// The text is lowercased and word-punct tokenized; only purely alphabetic
/// tokens that are not English stopwords are counted. Ties keep the order in
/// which words first appear.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_frequent_words(text: &str) -> FrequentWordsReport {
    let lower = text.to_lowercase();
    let mut counts: Vec<WordCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in text::tokenize_words(&lower) {
        if !token.chars().all(char::is_alphabetic) || is_stopword(token) {
            continue;
        }
        match index.get(token) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(token, counts.len());
                counts.push(WordCount {
                    word: token.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_WORDS);

    FrequentWordsReport { words: counts }
}
