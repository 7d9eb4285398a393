//! In-memory text buffer with a selection, optionally backed by a file.

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use zeroize::Zeroize;

use super::TextTarget;
use crate::error::EditorError;

/// Text plus a byte-range selection. The cursor ends up after inserted text.
#[derive(Debug, Default)]
pub struct TextBuffer {
    text: String,
    selection: Range<usize>,
    path: Option<PathBuf>,
}

impl TextBuffer {
    /// New buffer with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            text,
            selection: end..end,
            path: None,
        }
    }

    /// Load a file; a missing file opens as an empty buffer.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(source) => {
                return Err(EditorError::Io {
                    context: format!("reading {}", path.display()),
                    source,
                });
            }
        };
        let mut buffer = Self::new(text);
        buffer.path = Some(path.to_path_buf());
        Ok(buffer)
    }

    /// Write the buffer back to the file it was opened from.
    pub fn save(&self) -> Result<(), EditorError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        fs::write(path, &self.text).map_err(|source| EditorError::Io {
            context: format!("writing {}", path.display()),
            source,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Move the cursor (`start == end`) or select a byte range.
    pub fn select(&mut self, range: Range<usize>) -> Result<(), EditorError> {
        self.check(&range)?;
        self.selection = range;
        Ok(())
    }

    fn check(&self, range: &Range<usize>) -> Result<(), EditorError> {
        if range.start > range.end || range.end > self.text.len() {
            return Err(EditorError::SelectionOutOfBounds {
                start: range.start,
                end: range.end,
                len: self.text.len(),
            });
        }
        for offset in [range.start, range.end] {
            if !self.text.is_char_boundary(offset) {
                return Err(EditorError::NotCharBoundary(offset));
            }
        }
        Ok(())
    }
}

impl TextTarget for TextBuffer {
    fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    fn insert(&mut self, at: usize, text: &str) -> Result<(), EditorError> {
        self.replace(at..at, text)
    }

    fn replace(&mut self, range: Range<usize>, text: &str) -> Result<(), EditorError> {
        self.check(&range)?;
        self.text.replace_range(range.clone(), text);
        let cursor = range.start + text.len();
        self.selection = cursor..cursor;
        Ok(())
    }
}

impl Drop for TextBuffer {
    fn drop(&mut self) {
        self.text.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_cursor_at_end() {
        let buffer = TextBuffer::new("abc");
        assert_eq!(buffer.selection(), 3..3);
    }

    #[test]
    fn cursor_follows_inserted_text() {
        let mut buffer = TextBuffer::new("ac");
        buffer.insert(1, "b").unwrap();
        assert_eq!(buffer.text(), "abc");
        assert_eq!(buffer.selection(), 2..2);
    }

    #[test]
    fn rejects_out_of_bounds() {
        let mut buffer = TextBuffer::new("abc");
        assert!(matches!(
            buffer.select(2..9),
            Err(EditorError::SelectionOutOfBounds { start: 2, end: 9, len: 3 })
        ));
        assert!(buffer.insert(4, "x").is_err());
        assert_eq!(buffer.text(), "abc");
    }

    #[test]
    fn rejects_split_characters() {
        let mut buffer = TextBuffer::new("é");
        assert!(matches!(buffer.select(1..1), Err(EditorError::NotCharBoundary(1))));
    }

    #[test]
    fn unsaved_buffer_save_is_noop() {
        assert!(TextBuffer::new("x").save().is_ok());
    }
}
