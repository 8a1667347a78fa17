//! Text normalization.
//!
//! Straightens typographic quotes, turns double hyphens into em dashes, and
//! collapses whitespace so a manuscript exported from a word processor reads
//! as one clean run of prose.

/// Clean raw manuscript text.
///
/// - `“` and `”` become `"`; `‘` and `’` become `'`
/// - `--` becomes `—`
/// - every run of whitespace (newlines included) becomes a single space
/// - leading and trailing whitespace is removed
///
/// Cleaning is idempotent: `clean(&clean(x)) == clean(x)`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn clean(text: &str) -> String {
    let straightened = text
        .replace(['\u{201C}', '\u{201D}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'")
        .replace("--", "\u{2014}");
    straightened.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straightens_quotes() {
        assert_eq!(
            clean("\u{201C}Don\u{2019}t,\u{201D} she said."),
            "\"Don't,\" she said."
        );
    }

    #[test]
    fn converts_double_hyphens() {
        assert_eq!(clean("Wait--no."), "Wait\u{2014}no.");
        assert!(!clean("a---b----c").contains("--"));
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(clean("  One\n\ntwo\t three   "), "One two three");
    }

    #[test]
    fn empty_input() {
        assert_eq!(clean(""), "");
        assert_eq!(clean(" \n\t "), "");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "\u{201C}Hello--there,\u{201D}  he\nsaid.",
            "a-----b",
            "Plain text.",
            "\u{2018}quoted\u{2019}   -- spaced",
        ];
        for sample in samples {
            let once = clean(sample);
            assert_eq!(clean(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn output_has_no_curly_quotes() {
        let out = clean("\u{201C}\u{201D}\u{2018}\u{2019}--");
        assert!(!out.contains(['\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}']));
        assert!(!out.contains("--"));
    }
}
