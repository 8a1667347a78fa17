//! Curated word lists for manuscript analysis.
//!
//! Filler words, clichéd phrases, and dialogue reporting verbs. The lists are
//! ordered: reports walk them front to back, so their order is the order in
//! which findings are printed.

/// Words that tend to pad prose when overused.
pub const FILLER_WORDS: [&str; 10] = [
    "just", "really", "very", "that", "actually", "like", "maybe", "somewhat", "perhaps", "quite",
];

/// Overused phrases, matched case-insensitively as substrings.
pub const CLICHES: [&str; 20] = [
    "needle in a haystack",
    "cold sweat",
    "chill ran down",
    "time stood still",
    "dead silence",
    "at the end of the day",
    "low-hanging fruit",
    "the calm before the storm",
    "head over heels",
    "in the nick of time",
    "plenty of fish in the sea",
    "easy as pie",
    "scared stiff",
    "raining cats and dogs",
    "think outside the box",
    "every cloud has a silver lining",
    "pushing up daisies",
    "barking up the wrong tree",
    "blood ran cold",
    "fit as a fiddle",
];

/// Verbs that attribute a quoted line to a speaker (`"…" said Maria`).
pub const REPORTING_VERBS: [&str; 10] = [
    "said", "asked", "replied", "whispered", "shouted", "cried", "muttered", "yelled", "snapped",
    "called",
];
