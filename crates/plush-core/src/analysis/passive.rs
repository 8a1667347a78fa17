//! Passive voice detection.
//!
//! A lexical heuristic: an auxiliary (`was`, `were`, `is being`, `are being`,
//! `has been`, `have been`, `had been`) followed by a word ending in `-ed` or
//! by a listed irregular participle ("was thrown"). It flags `-ed` adjectives
//! ("was tired") and misses strong verbs outside the list ("was slung").
//! Both are accepted behavior.

use std::sync::LazyLock;

use regex::Regex;

use crate::dictionaries::participles::IRREGULAR_PARTICIPLES;
use crate::text::Sentence;

use super::reports::{PassiveSentence, PassiveVoiceReport};

/// Auxiliary plus participle, case-insensitive.
static PASSIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?i)\b(?:was|were|is being|are being|has been|have been|had been)\b\s+(?:\w+ed|{})\b",
        IRREGULAR_PARTICIPLES.join("|")
    );
    Regex::new(&pattern).expect("valid regex")
});

/// Return the passive construction in a sentence, if any.
pub fn find_passive(sentence: &str) -> Option<&str> {
    PASSIVE_PATTERN.find(sentence).map(|m| m.as_str())
}

/// Flag sentences that match the passive-voice pattern.
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn analyze_passive_voice(sentences: &[Sentence]) -> PassiveVoiceReport {
    let flagged = sentences
        .iter()
        .filter_map(|sentence| {
            find_passive(&sentence.text).map(|matched| PassiveSentence {
                sentence_num: sentence.ordinal,
                text: sentence.text.clone(),
                matched: matched.to_string(),
            })
        })
        .collect();

    PassiveVoiceReport {
        sentence_count: sentences.len(),
        sentences: flagged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::split_sentences;

    #[test]
    fn flags_auxiliary_plus_ed() {
        let report = analyze_passive_voice(&split_sentences("The window was opened by John."));
        assert_eq!(report.sentences.len(), 1);
        assert_eq!(report.sentences[0].matched, "was opened");
    }

    #[test]
    fn active_sentence_not_flagged() {
        let report = analyze_passive_voice(&split_sentences("The ball rolled down the hill."));
        assert!(report.sentences.is_empty());
        assert_eq!(report.sentence_count, 1);
    }

    #[test]
    fn case_insensitive_and_multiword_auxiliary() {
        assert_eq!(find_passive("HAD BEEN WARNED"), Some("HAD BEEN WARNED"));
        assert_eq!(
            find_passive("The fence is being painted."),
            Some("is being painted")
        );
    }

    #[test]
    fn listed_irregular_participles() {
        let report = analyze_passive_voice(&split_sentences("The ball was thrown by John."));
        assert_eq!(report.sentences.len(), 1);
        assert_eq!(report.sentences[0].matched, "was thrown");
        assert!(find_passive("The letters had been written by hand.").is_some());
    }

    #[test]
    fn unlisted_forms_are_missed() {
        assert!(find_passive("The bag was slung over a shoulder.").is_none());
        assert!(find_passive("The crowd was thronging.").is_none());
    }

    #[test]
    fn ed_adjectives_are_flagged() {
        assert!(find_passive("She was tired.").is_some());
    }

    #[test]
    fn reports_ordinals() {
        let text = "He ran. The door was locked. She left.";
        let report = analyze_passive_voice(&split_sentences(text));
        assert_eq!(report.sentences.len(), 1);
        assert_eq!(report.sentences[0].sentence_num, 2);
        assert_eq!(report.sentences[0].text, "The door was locked.");
    }
}
