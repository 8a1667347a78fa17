//! Core library for plush, a manuscript analysis toolkit for fiction writers.
//!
//! The analysis pipeline is a set of pure functions over `&str`: text goes in,
//! structured findings or a formatted report come out, and nothing is kept
//! between calls.
//!
//! # Modules
//!
//! - [`normalize`] - Quote, dash, and whitespace cleanup
//! - [`text`] - Sentence segmentation and word tokenization
//! - [`analysis`] - Metric extractors and the [`DocumentAnalysis`] aggregate
//! - [`readability`] - Flesch-Kincaid scoring
//! - [`suggestions`] - Per-sentence rewrite hints
//! - [`report`] - Plain-text report composition
//! - [`presets`] - Style preset registry
//! - [`source`] - `.txt`, `.docx`, and `.rtf` decoding
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use plush_core::{analyze_text, clean};
//!
//! let draft = "She was just   really tired -- very tired.";
//! let report = analyze_text(&clean(draft), "Snappy");
//! assert!(report.contains("Style Preset: Snappy"));
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod normalize;
pub mod presets;
pub mod readability;
pub mod report;
pub mod source;
pub mod suggestions;
pub mod text;
pub mod word_lists;

pub use analysis::{DocumentAnalysis, run_analysis};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult, SourceError, SourceResult};
pub use normalize::clean;
pub use presets::{NO_STYLE, STYLE_PRESETS, StylePreset, find_preset};
pub use report::{analyze_text, export_full_report, render_full_report};
pub use source::SourceKind;
pub use suggestions::suggest;
