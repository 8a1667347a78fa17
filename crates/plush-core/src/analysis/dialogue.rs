//! Dialogue extraction and speaker attribution.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::word_lists::REPORTING_VERBS;

use super::reports::{DialogueReport, SpeakerCount, SpeakersReport};

/// A span between double quotes, straight or curly.
static QUOTED_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[\u{201C}\"]([^\u{201C}\u{201D}\"]+)[\u{201D}\"]").expect("valid regex")
});

/// A straight-quoted line, a reporting verb, and a capitalized name.
static ATTRIBUTION: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r#""[^"]+?"\s+(?:{})\s+([A-Z][a-zA-Z]*)"#,
        REPORTING_VERBS.join("|")
    );
    Regex::new(&pattern).expect("valid regex")
});

/// Extract quoted dialogue in document order.
///
/// Each span is trimmed; spans that are empty after trimming are dropped.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn extract_dialogue(text: &str) -> DialogueReport {
    let lines = QUOTED_SPAN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    DialogueReport { lines }
}

/// Count dialogue lines per speaker.
///
/// Only direct attributions are recognized: a quoted line, whitespace, one of
/// the [`REPORTING_VERBS`], whitespace, then a capitalized name
/// (`"Wait!" shouted Maria`). Lowercase or multi-word names and
/// name-before-verb order (`Maria said`) are not matched.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn attribute_speakers(text: &str) -> SpeakersReport {
    let mut speakers: Vec<SpeakerCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for caps in ATTRIBUTION.captures_iter(text) {
        let Some(name) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        match index.get(name) {
            Some(&i) => speakers[i].lines += 1,
            None => {
                index.insert(name, speakers.len());
                speakers.push(SpeakerCount {
                    name: name.to_string(),
                    lines: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts
    speakers.sort_by(|a, b| b.lines.cmp(&a.lines));

    SpeakersReport { speakers }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_two_lines() {
        let report = extract_dialogue("He said \"Hello there.\" Then she said \"Goodbye.\"");
        assert_eq!(report.lines, vec!["Hello there.", "Goodbye."]);
    }

    #[test]
    fn curly_quotes_and_trimming() {
        let report = extract_dialogue("\u{201C} Run! \u{201D} she hissed.");
        assert_eq!(report.lines, vec!["Run!"]);
    }

    #[test]
    fn blank_quotes_dropped() {
        let report = extract_dialogue("\"   \" and then \"ok\"");
        assert_eq!(report.lines, vec!["ok"]);
    }

    #[test]
    fn no_dialogue() {
        assert!(extract_dialogue("Silence filled the room.").lines.is_empty());
    }

    #[test]
    fn counts_lines_per_speaker() {
        let report = attribute_speakers("\"I am leaving,\" said Maria. \"Wait!\" shouted Maria.");
        assert_eq!(
            report.speakers,
            vec![SpeakerCount {
                name: "Maria".to_string(),
                lines: 2,
            }]
        );
    }

    #[test]
    fn most_lines_first_ties_in_first_seen_order() {
        let text = "\"One,\" said Ann. \"Two,\" said Bo. \"Three,\" asked Bo. \
                    \"Four,\" replied Cy. \"Five,\" said Ann. \"Six,\" muttered Dee.";
        let report = attribute_speakers(text);
        let order: Vec<_> = report
            .speakers
            .iter()
            .map(|s| (s.name.as_str(), s.lines))
            .collect();
        assert_eq!(order, vec![("Ann", 2), ("Bo", 2), ("Cy", 1), ("Dee", 1)]);
    }

    #[test]
    fn ignores_lowercase_names_and_other_verbs() {
        let text = "\"Hi,\" said the man. \"Bye,\" laughed Ann. Maria said \"Hello.\"";
        assert!(attribute_speakers(text).speakers.is_empty());
    }
}
