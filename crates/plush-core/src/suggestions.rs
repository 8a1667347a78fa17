//! Per-sentence rewrite hints.
//!
//! Three checks run on every sentence, in order: length, passive voice, and
//! filler density. A sentence that trips any of them becomes a
//! [`SentenceFinding`] carrying one advisory line per check.

use crate::analysis::fillers::filler_density;
use crate::analysis::long_sentences::is_long_sentence;
use crate::analysis::passive::find_passive;
use crate::analysis::reports::{SentenceFinding, SuggestionsReport};
use crate::text::{self, Sentence};

/// Advice for sentences over the token threshold.
pub const LONG_SENTENCE_ADVICE: &str = "\u{26A0}\u{FE0F} Consider breaking this long sentence into two or more.";

/// Advice for sentences matching the passive-voice pattern.
pub const PASSIVE_VOICE_ADVICE: &str = "\u{1F4A1} Try rephrasing in active voice.";

/// Advice for sentences dense with filler words.
pub const FILLER_ADVICE: &str = "\u{2702}\u{FE0F} This line may be padded with filler words.";

/// Printed when no sentence needs a hint.
pub const NO_SUGGESTIONS: &str = "\u{2705} No smart suggestions needed \u{2014} looking solid!";

/// Filler occurrences a sentence may carry before it is flagged.
pub const FILLER_DENSITY_LIMIT: usize = 2;

/// Collect findings for every sentence in `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn suggest_findings(text: &str) -> SuggestionsReport {
    suggest_for_sentences(&text::split_sentences(text))
}

/// Collect findings for an already segmented document.
pub fn suggest_for_sentences(sentences: &[Sentence]) -> SuggestionsReport {
    let findings = sentences
        .iter()
        .filter_map(|sentence| {
            let issues = sentence_issues(&sentence.text);
            (!issues.is_empty()).then(|| SentenceFinding {
                sentence_num: sentence.ordinal,
                text: sentence.text.clone(),
                issues,
            })
        })
        .collect();

    SuggestionsReport { findings }
}

/// Render suggestions for `text` as report text.
pub fn suggest(text: &str) -> String {
    render_suggestions(&suggest_findings(text))
}

/// Render a suggestions report.
///
/// Each finding becomes a block of the sentence number, the quoted sentence,
/// and its advice lines; blocks are separated by a newline.
pub fn render_suggestions(report: &SuggestionsReport) -> String {
    if report.findings.is_empty() {
        return NO_SUGGESTIONS.to_string();
    }

    report
        .findings
        .iter()
        .map(|finding| {
            format!(
                "\nSentence {}:\n\u{201C}{}\u{201D}\n{}",
                finding.sentence_num,
                finding.text,
                finding.issues.join("\n")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Same passive pattern as the passive-voice section (case-insensitive), so
/// every sentence listed there also gets the active-voice hint.
fn sentence_issues(sentence: &str) -> Vec<String> {
    let mut issues = Vec::new();
    if is_long_sentence(sentence) {
        issues.push(LONG_SENTENCE_ADVICE.to_string());
    }
    if find_passive(sentence).is_some() {
        issues.push(PASSIVE_VOICE_ADVICE.to_string());
    }
    if filler_density(sentence) > FILLER_DENSITY_LIMIT {
        issues.push(FILLER_ADVICE.to_string());
    }
    issues
}
