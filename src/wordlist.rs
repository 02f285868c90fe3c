//! Word lists
//!
//! Newline-delimited text files (for example lists of jōyō or jinmeiyō
//! kanji) whose characters a font atlas must be able to show. Lines are
//! kept as raw bytes so malformed UTF-8 reaches the builder's policy
//! untouched.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ranges::{GlyphRangeBuilder, TextError};

/// How malformed UTF-8 in a word list is handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Utf8Policy {
    /// Skip malformed sequences and keep going
    #[default]
    Skip,
    /// Fail the whole line
    Strict,
}

/// Word list errors
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list '{name}' line {line}: {source}")]
    Text {
        name: String,
        line: usize,
        #[source]
        source: TextError,
    },
}

/// A loaded word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    name: String,
    lines: Vec<Vec<u8>>,
}

impl WordList {
    /// Read a word list from disk. The file name becomes the list's name.
    pub fn load(path: &Path) -> Result<Self, WordListError> {
        let bytes = std::fs::read(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let list = Self::from_bytes(name, &bytes);
        tracing::info!(name = %list.name, lines = list.len(), "loaded word list");
        Ok(list)
    }

    /// Split raw bytes into lines, accepting `\n` and `\r\n` endings
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        let mut lines: Vec<Vec<u8>> = bytes
            .split(|&b| b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
            .collect();
        // A trailing newline does not start another line
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Self {
            name: name.into(),
            lines,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw line bytes, without line terminators
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.lines.iter().map(Vec::as_slice)
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add every line to `builder`.
    ///
    /// Returns the number of skipped malformed sequences. Under
    /// [`Utf8Policy::Strict`] a malformed line is an error and nothing from
    /// the list is added.
    pub fn feed(&self, builder: &mut GlyphRangeBuilder, policy: Utf8Policy) -> Result<usize, WordListError> {
        let mut skipped = 0;
        match policy {
            Utf8Policy::Skip => {
                for line in self.lines() {
                    skipped += builder.add_text(line);
                }
            },
            Utf8Policy::Strict => {
                let mut scratch = GlyphRangeBuilder::new();
                for (index, line) in self.lines().enumerate() {
                    scratch.try_add_text(line).map_err(|source| WordListError::Text {
                        name: self.name.clone(),
                        line: index + 1,
                        source,
                    })?;
                }
                builder.union(&scratch);
            },
        }
        if skipped > 0 {
            tracing::warn!(name = %self.name, skipped, "skipped malformed UTF-8 in word list");
        }
        Ok(skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_splits_lines() {
        let list = WordList::from_bytes("kanji", "亜 哀\r\n愛 悪\n\n握\n".as_bytes());
        let lines: Vec<&[u8]> = list.lines().collect();
        assert_eq!(
            lines,
            vec!["亜 哀".as_bytes(), "愛 悪".as_bytes(), b"".as_slice(), "握".as_bytes()]
        );
        assert_eq!(list.name(), "kanji");
    }

    #[test]
    fn test_empty_input() {
        let list = WordList::from_bytes("empty", b"");
        assert!(list.is_empty());
    }

    #[test]
    fn test_feed_skip_policy() {
        let list = WordList::from_bytes("mixed", b"a\xFFb\nc");
        let mut builder = GlyphRangeBuilder::new();
        assert_eq!(list.feed(&mut builder, Utf8Policy::Skip).unwrap(), 1);
        assert_eq!(builder.len(), 3);
    }

    #[test]
    fn test_feed_strict_policy_reports_line() {
        let list = WordList::from_bytes("mixed", b"ok\na\xFFb");
        let mut builder = GlyphRangeBuilder::new();
        let err = list.feed(&mut builder, Utf8Policy::Strict).unwrap_err();
        match err {
            WordListError::Text { line, source, .. } => {
                assert_eq!(line, 2);
                assert_eq!(source.offset, 1);
            },
            other => panic!("unexpected error: {other}"),
        }
        assert!(builder.is_empty());
    }

    #[test]
    fn test_feed_strict_failure_keeps_existing_marks() {
        // Truncated 叱 on the second line
        let mut bytes = "丑 丞\n乃".as_bytes().to_vec();
        bytes.extend_from_slice(&[0xE5, 0x8F]);
        bytes.extend_from_slice("\n之".as_bytes());
        let list = WordList::from_bytes("names", &bytes);
        let mut builder = GlyphRangeBuilder::new();
        builder.add_char('叱');
        let before = builder.build_ranges();

        assert!(list.feed(&mut builder, Utf8Policy::Strict).is_err());
        assert_eq!(builder.build_ranges(), before);
        assert!(!builder.contains('丑' as u32));
    }

    #[test]
    fn test_feed_strict_policy_adds_valid_list() {
        let list = WordList::from_bytes("names", "丑 丞\n乃 之\n".as_bytes());
        let mut builder = GlyphRangeBuilder::new();
        builder.add_char('叱');
        assert_eq!(list.feed(&mut builder, Utf8Policy::Strict).unwrap(), 0);
        for c in "丑丞乃之叱 ".chars() {
            assert!(builder.contains(c as u32), "missing {c}");
        }
    }
}
