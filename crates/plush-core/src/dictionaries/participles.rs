//! Irregular past participles for passive voice detection.
//!
//! The passive-voice heuristic otherwise relies on the `-ed` suffix, which
//! never matches strong verbs ("was thrown", "had been taken"). Forms that
//! usually act as adjectives or intransitive states after "was" (`gone`,
//! `done`, `become`) are left out.

/// Common irregular past participles, lowercase.
pub const IRREGULAR_PARTICIPLES: &[&str] = &[
    "beaten", "bent", "bitten", "blown", "bought", "bound", "broken", "brought", "built",
    "caught", "chosen", "cut", "drawn", "driven", "eaten", "felt", "forbidden", "forgiven",
    "forgotten", "forsaken", "fought", "found", "frozen", "given", "grown", "heard", "held",
    "hidden", "hit", "hung", "hurt", "kept", "known", "laid", "left", "lent", "lost", "made",
    "meant", "met", "paid", "put", "read", "ridden", "rung", "said", "seen", "sent", "set",
    "shaken", "shot", "shown", "shut", "slain", "sold", "spent", "spoken", "spun", "stolen",
    "struck", "stung", "sung", "sunk", "swept", "sworn", "taken", "taught", "thrown", "told",
    "torn", "understood", "woken", "won", "worn", "woven", "written",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_and_unique() {
        let mut sorted = IRREGULAR_PARTICIPLES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, IRREGULAR_PARTICIPLES);
    }

    #[test]
    fn no_regular_forms() {
        assert!(IRREGULAR_PARTICIPLES.iter().all(|p| !p.ends_with("ed")));
    }
}
