//! Manuscript sources: turning `.txt`, `.docx`, and `.rtf` files into text.
//!
//! Decoding is strict. Bytes that are not valid UTF-8 (or a `.docx` that is
//! not a readable Word container) fail with a [`SourceError`] rather than
//! being analyzed as garbled text.

use std::io::{Cursor, Read};

use camino::{Utf8Path, Utf8PathBuf};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::{Deserialize, Serialize};

use crate::error::{SourceError, SourceResult};

/// Main document part inside a `.docx` container.
const DOCX_DOCUMENT_PART: &str = "word/document.xml";

/// Supported manuscript formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SourceKind {
    /// Plain UTF-8 text.
    Txt,
    /// Office Open XML word-processing document.
    Docx,
    /// Rich Text Format.
    Rtf,
}

impl SourceKind {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Utf8Path) -> SourceResult<Self> {
        let ext = path.extension().map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("txt") => Ok(Self::Txt),
            Some("docx") => Ok(Self::Docx),
            Some("rtf") => Ok(Self::Rtf),
            _ => Err(SourceError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Returns the format as its file extension.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Docx => "docx",
            Self::Rtf => "rtf",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load a manuscript, detecting its format from the extension.
pub fn load_path(path: &Utf8Path, max_bytes: Option<usize>) -> SourceResult<String> {
    let kind = SourceKind::from_path(path)?;
    load_path_as(path, kind, max_bytes)
}

/// Load a manuscript as an explicit format, ignoring its extension.
///
/// The size limit is checked against file metadata before anything is read.
#[tracing::instrument(skip_all, fields(%path, %kind))]
pub fn load_path_as(
    path: &Utf8Path,
    kind: SourceKind,
    max_bytes: Option<usize>,
) -> SourceResult<String> {
    let io_error = |source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(path.as_std_path()).map_err(io_error)?;
    if let Some(limit) = max_bytes
        && metadata.len() > limit as u64
    {
        return Err(SourceError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit,
        });
    }

    let bytes = std::fs::read(path.as_std_path()).map_err(io_error)?;
    let text = decode(kind, bytes)?;
    tracing::debug!(bytes = metadata.len(), chars = text.len(), "source decoded");
    Ok(text)
}

/// Load several manuscripts and join their text with newlines.
///
/// `forced` overrides extension detection for every path.
pub fn load_paths(
    paths: &[Utf8PathBuf],
    forced: Option<SourceKind>,
    max_bytes: Option<usize>,
) -> SourceResult<String> {
    let texts = paths
        .iter()
        .map(|path| match forced {
            Some(kind) => load_path_as(path, kind, max_bytes),
            None => load_path(path, max_bytes),
        })
        .collect::<SourceResult<Vec<_>>>()?;
    Ok(texts.join("\n"))
}

/// Decode raw file bytes in the given format.
pub fn decode(kind: SourceKind, bytes: Vec<u8>) -> SourceResult<String> {
    match kind {
        SourceKind::Txt => Ok(String::from_utf8(bytes)?),
        SourceKind::Docx => docx_to_text(&bytes),
        SourceKind::Rtf => Ok(rtf_to_text(&String::from_utf8(bytes)?)),
    }
}

// -- DOCX -------------------------------------------------------------------

/// Extract paragraph text from a `.docx` container.
///
/// Text runs (`w:t`) are concatenated per paragraph, `w:tab` becomes a tab,
/// `w:br`/`w:cr` a newline, and paragraphs are joined with newlines.
pub fn docx_to_text(bytes: &[u8]) -> SourceResult<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_DOCUMENT_PART)?
        .read_to_string(&mut xml)
        .map_err(SourceError::DocumentPart)?;

    let mut reader = Reader::from_str(&xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:t" => in_text = true,
                b"w:p" => current.clear(),
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                b"w:p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(t) if in_text => current.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

// -- RTF --------------------------------------------------------------------

/// Destinations whose content is never document text.
const IGNORED_DESTINATIONS: &[&str] = &[
    "annotation",
    "author",
    "buptim",
    "colortbl",
    "comment",
    "company",
    "creatim",
    "datastore",
    "doccomm",
    "falt",
    "fonttbl",
    "footer",
    "footerf",
    "footerl",
    "footerr",
    "footnote",
    "generator",
    "header",
    "headerf",
    "headerl",
    "headerr",
    "info",
    "keywords",
    "listtable",
    "listoverridetable",
    "object",
    "operator",
    "pict",
    "printim",
    "revtim",
    "rsidtbl",
    "stylesheet",
    "subject",
    "themedata",
    "title",
    "xmlnstbl",
];

/// Convert RTF markup to plain text.
///
/// Control words are dropped except for the handful that carry text:
/// `\par`/`\line` become newlines, `\tab` a tab, typographic quotes and dashes
/// their characters, and `\'hh`/`\uN` escapes are decoded. After each
/// `\uN`, the number of fallback characters set by the group's `\ucN`
/// (default 1) is dropped. Ignorable
/// destinations (`{\*...}`, font and color tables, document info, pictures)
/// are skipped entirely.
pub fn rtf_to_text(rtf: &str) -> String {
    let chars: Vec<char> = rtf.chars().collect();
    let mut out = String::with_capacity(rtf.len() / 2);
    // Group state saved on `{`: skipping flag and the active \ucN count
    let mut stack: Vec<(bool, usize)> = Vec::new();
    let mut skipping = false;
    let mut fallback_len = 1usize;
    // Fallback characters still to drop after a \uN escape
    let mut pending_fallback = 0usize;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match ch {
            '{' => {
                stack.push((skipping, fallback_len));
                i += 1;
            }
            '}' => {
                (skipping, fallback_len) = stack.pop().unwrap_or((false, 1));
                pending_fallback = 0;
                i += 1;
            }
            '\r' | '\n' => i += 1,
            '\\' => {
                let Some(&next) = chars.get(i + 1) else {
                    break;
                };
                if next.is_ascii_alphabetic() {
                    let (word, param, consumed) = read_control_word(&chars, i + 1);
                    i += 1 + consumed;
                    if IGNORED_DESTINATIONS.contains(&word.as_str()) {
                        skipping = true;
                        continue;
                    }
                    if skipping {
                        continue;
                    }
                    if word == "uc" {
                        fallback_len = param.and_then(|n| usize::try_from(n).ok()).unwrap_or(1);
                        continue;
                    }
                    if word == "u" {
                        if let Some(c) = param.and_then(unicode_escape) {
                            out.push(c);
                        }
                        pending_fallback = fallback_len;
                        continue;
                    }
                    if let Some(text) = control_word_text(&word) {
                        out.push_str(text);
                    }
                    continue;
                }

                i += 2;
                match next {
                    '*' => skipping = true,
                    '\'' => {
                        let hex: String = chars.iter().skip(i).take(2).collect();
                        i += hex.len();
                        if pending_fallback > 0 {
                            pending_fallback -= 1;
                        } else if !skipping
                            && let Ok(byte) = u8::from_str_radix(&hex, 16)
                        {
                            out.push(cp1252_char(byte));
                        }
                    }
                    '\\' | '{' | '}' if !skipping => out.push(next),
                    '~' if !skipping => out.push('\u{00A0}'),
                    '_' if !skipping => out.push('-'),
                    '\r' | '\n' if !skipping => out.push('\n'),
                    _ => {}
                }
            }
            _ => {
                if pending_fallback > 0 {
                    pending_fallback -= 1;
                } else if !skipping {
                    out.push(ch);
                }
                i += 1;
            }
        }
    }

    out
}

/// Read a control word starting at `start` (just past the backslash).
///
/// Returns the word, its numeric parameter, and how many chars were consumed,
/// including the optional single-space delimiter.
fn read_control_word(chars: &[char], start: usize) -> (String, Option<i32>, usize) {
    let mut pos = start;
    while pos < chars.len() && chars[pos].is_ascii_alphabetic() {
        pos += 1;
    }
    let word: String = chars[start..pos].iter().collect();

    let param_start = pos;
    if pos < chars.len() && chars[pos] == '-' {
        pos += 1;
    }
    while pos < chars.len() && chars[pos].is_ascii_digit() {
        pos += 1;
    }
    let param = chars[param_start..pos]
        .iter()
        .collect::<String>()
        .parse::<i32>()
        .ok();

    if pos < chars.len() && chars[pos] == ' ' {
        pos += 1;
    }
    (word, param, pos - start)
}

/// Text produced by a control word, if any.
fn control_word_text(word: &str) -> Option<&'static str> {
    Some(match word {
        "par" | "line" | "sect" | "page" => "\n",
        "tab" => "\t",
        "emdash" => "\u{2014}",
        "endash" => "\u{2013}",
        "lquote" => "\u{2018}",
        "rquote" => "\u{2019}",
        "ldblquote" => "\u{201C}",
        "rdblquote" => "\u{201D}",
        "bullet" => "\u{2022}",
        "emspace" | "enspace" | "qmspace" => " ",
        _ => return None,
    })
}

/// `\uN` takes a signed 16-bit value; negative values wrap.
fn unicode_escape(param: i32) -> Option<char> {
    let code = if param < 0 { param + 65_536 } else { param };
    u32::try_from(code).ok().and_then(char::from_u32)
}

/// Decode a Windows-1252 byte (the default RTF code page).
fn cp1252_char(byte: u8) -> char {
    match byte {
        0x80 => '\u{20AC}',
        0x85 => '\u{2026}',
        0x91 => '\u{2018}',
        0x92 => '\u{2019}',
        0x93 => '\u{201C}',
        0x94 => '\u{201D}',
        0x95 => '\u{2022}',
        0x96 => '\u{2013}',
        0x97 => '\u{2014}',
        0x99 => '\u{2122}',
        _ => char::from(byte),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCX_DOCUMENT_PART, zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    fn utf8_path(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::try_from(dir.path().join(name)).unwrap()
    }

    #[test]
    fn kind_from_extension() {
        assert_eq!(
            SourceKind::from_path(Utf8Path::new("draft.TXT")).unwrap(),
            SourceKind::Txt
        );
        assert_eq!(
            SourceKind::from_path(Utf8Path::new("ch1.docx")).unwrap(),
            SourceKind::Docx
        );
        assert_eq!(
            SourceKind::from_path(Utf8Path::new("ch2.rtf")).unwrap(),
            SourceKind::Rtf
        );
        assert!(matches!(
            SourceKind::from_path(Utf8Path::new("notes.md")),
            Err(SourceError::UnsupportedFormat { .. })
        ));
        assert!(SourceKind::from_path(Utf8Path::new("README")).is_err());
    }

    #[test]
    fn txt_must_be_utf8() {
        assert_eq!(
            decode(SourceKind::Txt, "Hello, world.".into()).unwrap(),
            "Hello, world."
        );
        assert!(matches!(
            decode(SourceKind::Txt, vec![0x48, 0xFF, 0xFE]),
            Err(SourceError::Decode(_))
        ));
    }

    #[test]
    fn docx_paragraphs_and_runs() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p><w:r><w:t>It was a </w:t></w:r><w:r><w:t xml:space="preserve">dark night.</w:t></w:r></w:p>
<w:p/>
<w:p><w:r><w:t>Tom &amp; Jerry</w:t><w:tab/><w:t>ran.</w:t><w:br/><w:t>Fast.</w:t></w:r></w:p>
</w:body></w:document>"#;
        let text = decode(SourceKind::Docx, docx_bytes(xml)).unwrap();
        assert_eq!(text, "It was a dark night.\n\nTom & Jerry\tran.\nFast.");
    }

    #[test]
    fn docx_requires_zip_container() {
        assert!(matches!(
            decode(SourceKind::Docx, b"plain text".to_vec()),
            Err(SourceError::Container(_))
        ));
    }

    #[test]
    fn docx_requires_document_part() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        assert!(matches!(
            decode(SourceKind::Docx, bytes),
            Err(SourceError::Container(_))
        ));
    }

    #[test]
    fn rtf_basic_paragraphs() {
        let rtf = r"{\rtf1\ansi\deff0{\fonttbl{\f0 Times New Roman;}}{\colortbl;\red0\green0\blue0;}
\f0\fs24 It was a dark night.\par
{\b Bold} move.\par
}";
        assert_eq!(rtf_to_text(rtf), "It was a dark night.\nBold move.\n");
    }

    #[test]
    fn rtf_escapes() {
        let rtf = r"{\rtf1 Caf\'e9 \ldblquote hi\rdblquote  a\tab b \\ \{x\} \u8212?done\emdash end}";
        assert_eq!(
            rtf_to_text(rtf),
            "Caf\u{e9} \u{201C}hi\u{201D} a\tb \\ {x} \u{2014}done\u{2014}end"
        );
    }

    #[test]
    fn rtf_unicode_fallback_length_follows_uc() {
        let rtf = r"{\rtf1\uc2 A\u8212\'97\'97B{\uc0 C\u8212 D}E\u8212??F}";
        assert_eq!(rtf_to_text(rtf), "A\u{2014}BC\u{2014}DE\u{2014}F");
    }

    #[test]
    fn rtf_skips_ignorable_destinations() {
        let rtf = r"{\rtf1{\*\generator Writer 1.0;}{\info{\title Draft}}Story text.}";
        assert_eq!(rtf_to_text(rtf), "Story text.");
    }

    #[test]
    fn load_path_reads_txt() {
        let tmp = TempDir::new().unwrap();
        let path = utf8_path(&tmp, "draft.txt");
        fs::write(&path, "The dog ran.").unwrap();
        assert_eq!(load_path(&path, None).unwrap(), "The dog ran.");
    }

    #[test]
    fn load_path_enforces_limit_before_reading() {
        let tmp = TempDir::new().unwrap();
        let path = utf8_path(&tmp, "big.txt");
        fs::write(&path, "x".repeat(100)).unwrap();
        let err = load_path(&path, Some(10)).unwrap_err();
        assert!(matches!(
            err,
            SourceError::TooLarge {
                size: 100,
                limit: 10,
                ..
            }
        ));
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn load_path_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let path = utf8_path(&tmp, "missing.txt");
        assert!(matches!(
            load_path(&path, None),
            Err(SourceError::Io { .. })
        ));
    }

    #[test]
    fn forced_kind_overrides_extension() {
        let tmp = TempDir::new().unwrap();
        let path = utf8_path(&tmp, "chapter.md");
        fs::write(&path, "Plain words.").unwrap();
        assert!(load_path(&path, None).is_err());
        assert_eq!(
            load_path_as(&path, SourceKind::Txt, None).unwrap(),
            "Plain words."
        );
    }

    #[test]
    fn load_paths_joins_with_newline() {
        let tmp = TempDir::new().unwrap();
        let first = utf8_path(&tmp, "one.txt");
        let second = utf8_path(&tmp, "two.docx");
        fs::write(&first, "Chapter one.").unwrap();
        fs::write(
            &second,
            docx_bytes("<w:document><w:body><w:p><w:r><w:t>Chapter two.</w:t></w:r></w:p></w:body></w:document>"),
        )
        .unwrap();
        assert_eq!(
            load_paths(&[first, second], None, None).unwrap(),
            "Chapter one.\nChapter two."
        );
    }
}
