//! Command implementations.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use plush_core::presets::{NO_STYLE, find_preset, style_names};
use plush_core::source::{self, SourceKind};

pub mod analyze;
pub mod characters;
pub mod clean;
pub mod cliches;
pub mod dialogue;
pub mod info;
pub mod presets;
pub mod report;
#[cfg(feature = "mcp")]
pub mod serve;

/// Manuscript input shared by every file-reading command.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Manuscript files (.txt, .docx, .rtf); several are joined in order
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<Utf8PathBuf>,

    /// Read every file as this format instead of detecting it from the extension
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<SourceKind>,
}

impl InputArgs {
    /// Load and join the input files, enforcing the size limit per file.
    pub fn read(&self, max_bytes: Option<usize>) -> anyhow::Result<String> {
        source::load_paths(&self.files, self.format, max_bytes)
            .with_context(|| format!("failed to load {}", self.describe()))
    }

    /// Human-readable list of the input files.
    pub fn describe(&self) -> String {
        self.files
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Pick the style preset for a run: the flag, then config, then none.
///
/// Unknown names are kept (they simply produce an unannotated report) but
/// logged so a typo does not go unnoticed.
pub fn resolve_style(flag: Option<&str>, config_style: Option<&str>) -> String {
    let style = flag.or(config_style).unwrap_or(NO_STYLE);
    if style != NO_STYLE && find_preset(style).is_none() {
        let known: Vec<_> = style_names().collect();
        tracing::warn!(
            style,
            known = %known.join(", "),
            "unknown style preset; the report will not be annotated"
        );
    }
    style.to_string()
}

/// Print `text` to stdout, or write it to `output` when given.
pub fn emit(text: &str, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path.as_std_path(), text)
                .with_context(|| format!("failed to write {path}"))?;
            tracing::info!(%path, bytes = text.len(), "output written");
            eprintln!("{} {}", "Wrote".green(), path);
        }
        None => println!("{text}"),
    }
    Ok(())
}

/// Print a value as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn style_flag_wins_over_config() {
        assert_eq!(resolve_style(Some("Poetic"), Some("Gritty")), "Poetic");
        assert_eq!(resolve_style(None, Some("Gritty")), "Gritty");
        assert_eq!(resolve_style(None, None), NO_STYLE);
    }

    #[test]
    fn unknown_style_is_passed_through() {
        assert_eq!(resolve_style(Some("Baroque"), None), "Baroque");
    }

    #[test]
    fn emit_writes_file() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("out.txt")).unwrap();
        emit("report body", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "report body");
    }

    #[test]
    fn input_args_join_files() {
        let tmp = TempDir::new().unwrap();
        let first = Utf8PathBuf::try_from(tmp.path().join("a.txt")).unwrap();
        let second = Utf8PathBuf::try_from(tmp.path().join("b.txt")).unwrap();
        std::fs::write(&first, "One.").unwrap();
        std::fs::write(&second, "Two.").unwrap();
        let input = InputArgs {
            files: vec![first, second],
            format: None,
        };
        assert_eq!(input.read(None).unwrap(), "One.\nTwo.");
    }

    #[test]
    fn input_args_report_unsupported_format() {
        let input = InputArgs {
            files: vec![Utf8PathBuf::from("notes.md")],
            format: None,
        };
        let err = input.read(None).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported file type"));
    }
}
