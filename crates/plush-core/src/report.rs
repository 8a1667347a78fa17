//! Plain-text report composition.
//!
//! [`analyze_text`] produces the deterministic analysis report and
//! [`export_full_report`] wraps it with a timestamp, the dialogue and cliché
//! sections, and a footer. Every section is rendered from the structured
//! reports in [`crate::analysis::reports`].

use chrono::Local;

use crate::analysis::dialogue::{attribute_speakers, extract_dialogue};
use crate::analysis::reports::{ClichesReport, DialogueReport, DocumentAnalysis, SpeakersReport};
use crate::analysis::{cliches, run_analysis};
use crate::presets::{StylePreset, find_preset};
use crate::suggestions::render_suggestions;

/// Printed under a findings heading with nothing to list.
pub const NONE_FOUND: &str = "   None found \u{2705}";

/// Printed when no speaker attribution is recognized.
pub const NO_SPEAKERS: &str = "No named characters found using direct dialogue attribution.";

/// Printed when no catalog cliché appears.
pub const NO_CLICHES: &str = "\u{2705} No clichés found!";

/// Closing line of the full report.
pub const FOOTER: &str = "\u{1F5A4} Crafted by Bastian \u{2014} Plush Edition for writtenbybc.com";

/// Timestamp format used in the full report header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const RULE_WIDTH: usize = 50;

/// Analyze `text` and render the analysis report.
///
/// The output contains no timestamp, so identical input always yields
/// identical output.
pub fn analyze_text(text: &str, style: &str) -> String {
    render_analysis(&run_analysis(text, style))
}

/// Render an already computed analysis.
pub fn render_analysis(analysis: &DocumentAnalysis) -> String {
    let mut report: Vec<String> = Vec::new();

    if let Some(preset) = analysis.style.as_deref().and_then(find_preset) {
        report.extend(preset_lines(preset));
        report.push(String::new());
    }

    let readability = &analysis.readability;
    report.push("\u{1F4CA} Analysis Report:".to_string());
    report.push(format!("• Total words: {}", readability.words));
    report.push(format!("• Total sentences: {}", readability.sentences));
    report.push(format!(
        "• Avg sentence length: {:.2} words",
        readability.avg_sentence_length
    ));
    report.push(format!("• Reading grade level: {:.2}", readability.grade));

    // -- Filler Words -------------------------------------------------------
    report.push("\n\u{1F50E} Common Filler Words Found:".to_string());
    push_or_none(
        &mut report,
        analysis
            .filler_words
            .words
            .iter()
            .map(|wc| format!("   - {}: {}", wc.word, wc.count)),
    );

    // -- Long Sentences -----------------------------------------------------
    report.push("\n\u{26A0}\u{FE0F} Long Sentences (over 30 words):".to_string());
    push_or_none(
        &mut report,
        analysis.long_sentences.sentences.iter().map(|s| {
            format!(
                "\nSentence {} ({} words):\n{}",
                s.sentence_num, s.word_count, s.text
            )
        }),
    );

    // -- Frequent Words -----------------------------------------------------
    report.push("\n\u{1F4C8} Top 5 Most Frequent Words (excluding stopwords):".to_string());
    push_or_none(
        &mut report,
        analysis
            .frequent_words
            .words
            .iter()
            .map(|wc| format!("   - {}: {}", wc.word, wc.count)),
    );

    // -- Passive Voice ------------------------------------------------------
    report.push("\n\u{1F575}\u{FE0F} Potential Passive Voice Sentences:".to_string());
    push_or_none(
        &mut report,
        analysis
            .passive_voice
            .sentences
            .iter()
            .map(|s| format!("\nSentence {}:\n{}", s.sentence_num, s.text)),
    );

    // -- Suggestions --------------------------------------------------------
    report.push("\n\u{1F916} Smart Suggestions:".to_string());
    report.push(render_suggestions(&analysis.suggestions));

    report.join("\n")
}

/// Analyze `text` and render the full, timestamped report.
pub fn export_full_report(text: &str, style: &str) -> String {
    let now = Local::now().format(TIMESTAMP_FORMAT).to_string();
    render_full_report(text, style, &now)
}

/// Render the full report with an explicit `generated_at` timestamp.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn render_full_report(text: &str, style: &str, generated_at: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut sections: Vec<String> = Vec::new();

    sections.push(format!("\u{1F5C2} Plush: Full Report\nGenerated: {generated_at}"));
    if let Some(preset) = find_preset(style) {
        sections.extend(preset_lines(preset));
    }
    sections.push(rule.clone());
    sections.push(analyze_text(text, style));
    sections.push(format!("\n{rule}"));
    sections.push(render_speakers(&attribute_speakers(text)));
    sections.push(format!("\n{rule}"));
    sections.push(format!(
        "\u{1F5E3} Extracted Dialogue:\n{}",
        render_dialogue(&extract_dialogue(text))
    ));
    sections.push(format!("\n{rule}"));
    sections.push(render_cliches(&cliches::analyze_cliches(text)));
    sections.push(format!("\n{rule}"));
    sections.push(FOOTER.to_string());

    sections.join("\n\n")
}

/// Render the per-character dialogue counts.
pub fn render_speakers(report: &SpeakersReport) -> String {
    if report.speakers.is_empty() {
        return NO_SPEAKERS.to_string();
    }

    std::iter::once("\u{1F9CD} Dialogue by Character:".to_string())
        .chain(
            report
                .speakers
                .iter()
                .map(|s| format!("   - {}: {} lines", s.name, s.lines)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the clichés found, once each.
pub fn render_cliches(report: &ClichesReport) -> String {
    if report.cliches.is_empty() {
        return NO_CLICHES.to_string();
    }

    let phrases: Vec<String> = report
        .cliches
        .iter()
        .map(|c| format!("• {}", c.cliche))
        .collect();
    format!("\n\u{1F4A3} Clichés Found:\n{}", phrases.join("\n"))
}

/// Render extracted dialogue, one line per quoted span.
pub fn render_dialogue(report: &DialogueReport) -> String {
    report.lines.join("\n")
}

fn preset_lines(preset: &StylePreset) -> [String; 3] {
    [
        format!("\u{1F3A8} Style Preset: {}", preset.name),
        format!("\u{1F50E} Focus: {}", preset.emphasis),
        format!("_Note: {}_", preset.note),
    ]
}

fn push_or_none(report: &mut Vec<String>, lines: impl Iterator<Item = String>) {
    let before = report.len();
    report.extend(lines);
    if report.len() == before {
        report.push(NONE_FOUND.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestions::NO_SUGGESTIONS;

    const SCENE: &str = "\"I am leaving,\" said Maria. \"Wait!\" shouted Maria. \
                         The vase was broken. It was raining cats and dogs outside.";

    #[test]
    fn analysis_is_deterministic() {
        assert_eq!(analyze_text(SCENE, "Gritty"), analyze_text(SCENE, "Gritty"));
    }

    #[test]
    fn empty_text_renders_sentinels() {
        let report = analyze_text("", "None");
        let expected = [
            "\u{1F4CA} Analysis Report:",
            "• Total words: 0",
            "• Total sentences: 0",
            "• Avg sentence length: 0.00 words",
            "• Reading grade level: 0.00",
            "\n\u{1F50E} Common Filler Words Found:",
            NONE_FOUND,
            "\n\u{26A0}\u{FE0F} Long Sentences (over 30 words):",
            NONE_FOUND,
            "\n\u{1F4C8} Top 5 Most Frequent Words (excluding stopwords):",
            NONE_FOUND,
            "\n\u{1F575}\u{FE0F} Potential Passive Voice Sentences:",
            NONE_FOUND,
            "\n\u{1F916} Smart Suggestions:",
            NO_SUGGESTIONS,
        ]
        .join("\n");
        assert_eq!(report, expected);
    }

    #[test]
    fn preset_header_precedes_report() {
        let report = analyze_text("The dog ran.", "Sparse");
        assert!(report.starts_with(
            "\u{1F3A8} Style Preset: Sparse\n\u{1F50E} Focus: Minimal filler, clarity, clean structure\n\
             _Note: Zero fluff. Cuts verbosity. Favors clean delivery._\n\n\u{1F4CA} Analysis Report:"
        ));
    }

    #[test]
    fn unknown_style_has_no_header() {
        assert!(analyze_text("The dog ran.", "Baroque").starts_with("\u{1F4CA} Analysis Report:"));
    }

    #[test]
    fn filler_and_passive_sections() {
        let report = analyze_text("This is just really very silly, just silly. The vase was broken.", "None");
        assert!(report.contains("Found:\n   - just: 2\n   - really: 1\n   - very: 1\n"));
        assert!(report.contains("Sentences:\n\nSentence 2:\nThe vase was broken.\n"));
    }

    #[test]
    fn short_word_before_period_keeps_sentences_apart() {
        let report = analyze_text("She sat. The ball was thrown by John.", "None");
        assert!(report.contains("• Total sentences: 2"));
        assert!(report.contains("Sentences:\n\nSentence 2:\nThe ball was thrown by John.\n"));
        assert!(report.contains("\nSentence 2:\n\u{201C}The ball was thrown by John.\u{201D}\n"));
    }

    #[test]
    fn long_sentence_block() {
        let sentence = format!("{}.", ["word"; 30].join(" "));
        let report = analyze_text(&sentence, "None");
        assert!(report.contains(&format!("(over 30 words):\n\nSentence 1 (31 words):\n{sentence}")));
    }

    #[test]
    fn speakers_render() {
        let rendered = render_speakers(&attribute_speakers(SCENE));
        assert_eq!(rendered, "\u{1F9CD} Dialogue by Character:\n   - Maria: 2 lines");
        assert_eq!(render_speakers(&attribute_speakers("No one spoke.")), NO_SPEAKERS);
    }

    #[test]
    fn cliches_render() {
        let rendered = render_cliches(&cliches::analyze_cliches(SCENE));
        assert_eq!(rendered, "\n\u{1F4A3} Clichés Found:\n• raining cats and dogs");
        assert_eq!(render_cliches(&cliches::analyze_cliches("Plain prose.")), NO_CLICHES);
    }

    #[test]
    fn dialogue_render() {
        let rendered = render_dialogue(&extract_dialogue("He said \"Hello there.\" Then she said \"Goodbye.\""));
        assert_eq!(rendered, "Hello there.\nGoodbye.");
    }

    #[test]
    fn full_report_layout() {
        let report = render_full_report(SCENE, "Gritty", "2025-01-02 03:04:05");
        let rule = "=".repeat(50);

        assert!(report.starts_with(
            "\u{1F5C2} Plush: Full Report\nGenerated: 2025-01-02 03:04:05\n\n\u{1F3A8} Style Preset: Gritty\n\n"
        ));
        assert!(report.contains(&format!("\n\n{rule}\n\n\u{1F3A8} Style Preset: Gritty\n")));
        assert!(report.contains(&format!(
            "\n\n\n{rule}\n\n\u{1F9CD} Dialogue by Character:\n   - Maria: 2 lines\n\n\n{rule}\n\n\u{1F5E3} Extracted Dialogue:\nI am leaving,\nWait!"
        )));
        assert!(report.ends_with(&format!("\n\n\n{rule}\n\n{FOOTER}")));
    }

    #[test]
    fn full_report_timestamp_format() {
        let report = export_full_report("The dog ran.", "None");
        let stamp = report
            .lines()
            .nth(1)
            .and_then(|line| line.strip_prefix("Generated: "))
            .expect("timestamp line");
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
    }
}
