//! Dictionaries for text analysis.
//!
//! Provides curated word sets used by sentence splitting, passive voice
//! detection, syllable counting, and word-frequency filtering.

pub mod abbreviations;
pub mod participles;
pub mod stopwords;
pub mod syllables;
