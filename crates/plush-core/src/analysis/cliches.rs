//! Cliché detection.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;

use crate::word_lists::CLICHES;

use super::reports::{ClicheFound, ClichesReport};

/// One automaton over the whole catalog; pattern ids index into [`CLICHES`].
static CLICHE_MATCHER: LazyLock<AhoCorasick> =
    LazyLock::new(|| AhoCorasick::new(CLICHES).expect("valid cliché patterns"));

/// Detect clichés in text.
///
/// Matching is a case-insensitive substring search. Each cliché is reported
/// once, in catalog order, with the number of times it occurs.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_cliches(text: &str) -> ClichesReport {
    let lower = text.to_lowercase();
    let mut counts = [0usize; CLICHES.len()];

    for mat in CLICHE_MATCHER.find_overlapping_iter(&lower) {
        counts[mat.pattern().as_usize()] += 1;
    }

    let cliches: Vec<ClicheFound> = CLICHES
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(cliche, count)| ClicheFound {
            cliche: (*cliche).to_string(),
            count,
        })
        .collect();

    ClichesReport {
        total_cliches: cliches.iter().map(|c| c.count).sum(),
        cliches,
    }
}
