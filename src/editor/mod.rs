//! Text targets the generated batch is inserted into.
//!
//! A target exposes a cursor as a byte range. An empty range is a plain
//! cursor and the text is inserted there; a non-empty range is a selection
//! and the text replaces it.

mod buffer;
mod clipboard;
mod stdout;

use std::ops::Range;

pub use buffer::TextBuffer;
pub use clipboard::Clipboard;
pub use stdout::Stdout;

use crate::error::EditorError;

/// Something text can be placed into at a cursor.
pub trait TextTarget {
    /// Current selection. `start == end` means a bare cursor.
    fn selection(&self) -> Range<usize>;

    fn insert(&mut self, at: usize, text: &str) -> Result<(), EditorError>;

    fn replace(&mut self, range: Range<usize>, text: &str) -> Result<(), EditorError>;
}

/// What [`place_text`] did with the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Inserted,
    Replaced,
    /// No target was available.
    Discarded,
}

/// Insert at the cursor when the selection is empty, otherwise replace it.
pub fn place_text(
    target: Option<&mut dyn TextTarget>,
    text: &str,
) -> Result<Placement, EditorError> {
    let Some(target) = target else {
        return Ok(Placement::Discarded);
    };

    let selection = target.selection();
    if selection.is_empty() {
        target.insert(selection.start, text)?;
        Ok(Placement::Inserted)
    } else {
        target.replace(selection, text)?;
        Ok(Placement::Replaced)
    }
}
