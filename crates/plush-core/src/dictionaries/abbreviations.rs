//! Abbreviations that suppress sentence breaks.
//!
//! Manuscripts are mostly narrative prose, so the list favors forms of
//! address and common Latin shorthand over units and technical notation.
//! Words that often close a sentence for real (`in`, `no`, `am`) are left out.
//!
//! Short forms that are also ordinary words or names (`sat`, `wed`, `Ed`,
//! `col`) live in separate sets and only hold a sentence together when the
//! context says so.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Titles and honorifics. These precede a name and never end a sentence.
pub static TITLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "mr", "mrs", "ms", "mx", "dr", "prof", "rev", "sr", "jr", "st", "messrs", "mme", "mlle",
        "msgr", "hon", "capt", "lt", "maj", "sgt", "cpl", "pvt", "adm", "cmdr", "sen", "gov",
        "pres", "insp", "supt", "mt", "ft",
    ]
    .into_iter()
    .collect()
});

/// Titles that are also common words (`col`, `gen`, `rep`). They only act as
/// titles when written capitalized: `Col. Mustard` but not `one more rep.`
pub static CAPITALIZED_TITLES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["col", "gen", "rep", "det", "fr"].into_iter().collect());

/// Other abbreviations that are normally followed by more of the sentence.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Latin and editorial shorthand
        "e.g", "i.e", "vs", "cf", "viz", "approx", "ibid", "n.b", "p.s",
        // Time
        "a.m", "p.m",
        // Places and addresses
        "ave", "blvd", "rd", "apt", "dept", "u.s", "u.k", "u.s.a",
        // References
        "vol", "fig", "pp", "eds",
    ]
    .into_iter()
    .collect()
});

/// Short forms that double as words or names (`Sat.`, `wed.`, `Ed.`).
///
/// These only hold when the next token is not capitalized, as in
/// `Jan. 5` or `ch. 3`. Before a capitalized word the period ends the
/// sentence: `She sat. He stood.`
pub static AMBIGUOUS_ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Calendar
        "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
        "mon", "tue", "tues", "wed", "thu", "thurs", "fri", "sat",
        // Editorial
        "al", "ca", "ch", "ed",
    ]
    .into_iter()
    .collect()
});

/// Check if a word (with or without its trailing period) is a known title
/// or abbreviation that never ends a sentence.
pub fn is_abbreviation(word: &str) -> bool {
    let lower = word.to_lowercase();
    let trimmed = lower.trim_matches('.');
    TITLES.contains(trimmed) || ABBREVIATIONS.contains(trimmed)
}

/// Whether a period after `word` continues the sentence, given the first
/// character of the following token.
pub fn suppresses_break(word: &str, next: char) -> bool {
    if is_abbreviation(word) {
        return true;
    }

    let lower = word.to_lowercase();
    let trimmed = lower.trim_matches('.');
    if CAPITALIZED_TITLES.contains(trimmed) {
        return word.chars().next().is_some_and(char::is_uppercase);
    }
    AMBIGUOUS_ABBREVIATIONS.contains(trimmed) && !next.is_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_and_shorthand() {
        assert!(is_abbreviation("Dr"));
        assert!(is_abbreviation("Mrs."));
        assert!(is_abbreviation("e.g."));
        assert!(is_abbreviation("i.e"));
    }

    #[test]
    fn ordinary_words() {
        assert!(!is_abbreviation("hello"));
        assert!(!is_abbreviation("in"));
        assert!(!is_abbreviation("no"));
        assert!(!is_abbreviation("Maria"));
        assert!(!is_abbreviation("sat"));
        assert!(!is_abbreviation("Ed"));
    }

    #[test]
    fn capitalized_titles_need_capitals() {
        assert!(suppresses_break("Col", 'M'));
        assert!(!suppresses_break("col", 'T'));
        assert!(!suppresses_break("rep", 'H'));
    }

    #[test]
    fn ambiguous_forms_depend_on_next_token() {
        assert!(suppresses_break("Jan", '5'));
        assert!(suppresses_break("ch", '3'));
        assert!(!suppresses_break("sat", 'H'));
        assert!(!suppresses_break("wed", 'I'));
        assert!(!suppresses_break("Ed", 'H'));
    }
}
