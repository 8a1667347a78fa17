//! Sentence and word segmentation.
//!
//! Every extractor that reports sentence numbers goes through
//! [`split_sentences`], so ordinals agree across the whole report.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::abbreviations::suppresses_break;

/// Word-punct tokenization: alphanumeric runs or punctuation runs.
static WORD_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+|[^\w\s]+").expect("valid regex"));

/// A sentence with its 1-based position in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Sentence {
    /// Position in the document, starting at 1.
    pub ordinal: usize,
    /// Sentence text, trimmed of surrounding whitespace.
    pub text: String,
}

/// Split text into sentences with abbreviation, initial, and dialogue
/// awareness.
///
/// Uses a character scan with context-based boundary detection. Closing
/// quotes and brackets after a terminator stay with the sentence they close.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let chars: Vec<char> = text.chars().collect();
    let mut pieces: Vec<String> = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_sentence_terminator(chars[i]) {
            i += 1;
            continue;
        }

        let mut end = i + 1;
        while end < chars.len() && is_sentence_terminator(chars[end]) {
            end += 1;
        }
        while end < chars.len() && is_closing_mark(chars[end]) {
            end += 1;
        }

        if is_sentence_boundary(&chars, start, i, end) {
            push_trimmed(&mut pieces, &chars[start..end]);
            start = end;
        }
        i = end;
    }

    push_trimmed(&mut pieces, &chars[start..]);

    pieces
        .into_iter()
        .enumerate()
        .map(|(idx, text)| Sentence {
            ordinal: idx + 1,
            text,
        })
        .collect()
}

/// Tokenize into words and punctuation runs (`"Hello, world!"` yields
/// `Hello`, `,`, `world`, `!`).
pub fn tokenize_words(text: &str) -> Vec<&str> {
    WORD_PUNCT.find_iter(text).map(|m| m.as_str()).collect()
}

/// Count word-punct tokens without collecting them.
pub fn count_tokens(text: &str) -> usize {
    WORD_PUNCT.find_iter(text).count()
}

/// Whitespace-separated words, punctuation left attached.
pub fn whitespace_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

fn push_trimmed(pieces: &mut Vec<String>, chars: &[char]) {
    let sentence: String = chars.iter().collect();
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        pieces.push(sentence.to_string());
    }
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_closing_mark(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '\u{201D}' | '\u{2019}' | ')' | ']')
}

/// Decide whether the terminator at `pos` (with its run ending at `end`)
/// closes the sentence that began at `start`.
fn is_sentence_boundary(chars: &[char], start: usize, pos: usize, end: usize) -> bool {
    let Some(&after) = chars.get(end) else {
        return true;
    };
    // "3.14" and "Yahoo!Inc" never break mid-token
    if !after.is_whitespace() {
        return false;
    }

    let next_char = chars[end..].iter().copied().find(|c| !c.is_whitespace());
    let Some(next_char) = next_char else {
        return true;
    };

    // A lowercase continuation means the sentence carries on:
    // `"Wait!" shouted Maria.` or `at 5 p.m. tomorrow`
    if next_char.is_lowercase() {
        return false;
    }

    if chars[pos..end].iter().any(|&c| matches!(c, '!' | '?')) {
        return true;
    }

    let word = word_before(chars, start, pos);
    if word.is_empty() {
        return true;
    }
    if suppresses_break(&word, next_char) {
        return false;
    }

    // The pronoun "I" is only an initial inside a run of initials: "I. M. Pei"
    if word == "I" {
        let next = word_after(chars, end);
        return !(next.ends_with('.') && is_initial(&next));
    }

    !is_initial(&word)
}

/// The token immediately before `pos`, including internal periods
/// (`e.g`, `J.R`).
fn word_before(chars: &[char], start: usize, pos: usize) -> String {
    let mut begin = pos;
    while begin > start && (chars[begin - 1].is_alphanumeric() || chars[begin - 1] == '.') {
        begin -= 1;
    }
    chars[begin..pos].iter().collect()
}

/// The whitespace-delimited token after `pos`, minus trailing punctuation other
/// than periods (`M.` stays `M.`).
fn word_after(chars: &[char], pos: usize) -> String {
    chars[pos..]
        .iter()
        .skip_while(|c| c.is_whitespace())
        .take_while(|c| !c.is_whitespace())
        .collect::<String>()
        .trim_end_matches(|c: char| c != '.' && !c.is_alphanumeric())
        .to_string()
}

/// Single capital letters and dotted initials (`J`, `J.R`).
fn is_initial(word: &str) -> bool {
    let mut parts = word.split('.').filter(|p| !p.is_empty()).peekable();
    parts.peek().is_some()
        && parts.all(|p| {
            let mut cs = p.chars();
            matches!((cs.next(), cs.next()), (Some(c), None) if c.is_uppercase())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        split_sentences(input).into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].ordinal, 1);
        assert_eq!(sentences[0].text, "This is a sentence.");
        assert_eq!(sentences[1].ordinal, 2);
        assert_eq!(sentences[1].text, "This is another sentence.");
    }

    #[test]
    fn abbreviations_not_split() {
        let sentences = texts("Dr. Smith went to the store. He bought milk.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Dr. Smith went to the store.");
    }

    #[test]
    fn latin_shorthand_not_split() {
        let sentences = texts("Bring something small, e.g. A pebble. Then go.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn initials_not_split() {
        let sentences = texts("J. R. Tolkien wrote it. Everyone read it.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].starts_with("J. R. Tolkien"));
    }

    #[test]
    fn short_words_that_look_like_abbreviations_end_sentences() {
        assert_eq!(texts("She sat. He stood."), vec!["She sat.", "He stood."]);
        assert_eq!(texts("I met Ed. He waved."), vec!["I met Ed.", "He waved."]);
        assert_eq!(
            texts("They were wed. It rained."),
            vec!["They were wed.", "It rained."]
        );
        assert_eq!(texts("He did one more rep. Then he quit.").len(), 2);
    }

    #[test]
    fn calendar_and_title_forms_still_hold() {
        assert_eq!(texts("It opened Jan. 5 at noon. We went.").len(), 2);
        assert_eq!(texts("Col. Mustard did it. Nobody cared.").len(), 2);
    }

    #[test]
    fn pronoun_i_ends_sentence() {
        assert_eq!(
            texts("Neither did I. We left."),
            vec!["Neither did I.", "We left."]
        );
        assert_eq!(texts("So did I. A car passed.").len(), 2);
    }

    #[test]
    fn i_inside_initials_does_not_split() {
        assert_eq!(texts("I. M. Pei drew it. Crowds came.").len(), 2);
    }

    #[test]
    fn single_capital_letters_are_read_as_initials() {
        // "plan B." is indistinguishable from a middle initial ("John F. Kennedy")
        assert_eq!(texts("Take plan B. Then run."), vec!["Take plan B. Then run."]);
        assert_eq!(texts("John F. Kennedy spoke. We listened.").len(), 2);
    }

    #[test]
    fn passive_sentence_keeps_its_ordinal() {
        let sentences = split_sentences("She sat. The ball was thrown by John.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].ordinal, 2);
        assert_eq!(sentences[1].text, "The ball was thrown by John.");
    }

    #[test]
    fn decimal_numbers_not_split() {
        let sentences = texts("The price is 3.14 dollars. That's cheap.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.14"));
    }

    #[test]
    fn question_and_exclamation() {
        let sentences = texts("Are you serious? I can't believe it! This is amazing.");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn closing_quote_stays_with_sentence() {
        let sentences = texts("He said \"Hello there.\" Then she said \"Goodbye.\"");
        assert_eq!(
            sentences,
            vec!["He said \"Hello there.\"", "Then she said \"Goodbye.\""]
        );
    }

    #[test]
    fn dialogue_tag_continues_sentence() {
        let sentences = texts("\"I am leaving,\" said Maria. \"Wait!\" shouted Maria.");
        assert_eq!(
            sentences,
            vec!["\"I am leaving,\" said Maria.", "\"Wait!\" shouted Maria."]
        );
    }

    #[test]
    fn ellipsis_before_lowercase_continues() {
        let sentences = texts("She paused... and then laughed. It was over.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn trailing_fragment_kept() {
        let sentences = texts("One. Two without a stop");
        assert_eq!(sentences, vec!["One.", "Two without a stop"]);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn tokenize_words_splits_punctuation() {
        assert_eq!(
            tokenize_words("Hello, world! It's done."),
            vec!["Hello", ",", "world", "!", "It", "'", "s", "done", "."]
        );
    }

    #[test]
    fn count_tokens_matches_tokenize() {
        let text = "Wait -- what?! No...";
        assert_eq!(count_tokens(text), tokenize_words(text).len());
    }

    #[test]
    fn whitespace_words_keep_punctuation() {
        let words: Vec<_> = whitespace_words("silly, just silly.").collect();
        assert_eq!(words, vec!["silly,", "just", "silly."]);
    }
}
