//! Standard output target: a cursor that only ever appends.

use std::io::Write;
use std::ops::Range;

use super::TextTarget;
use crate::error::EditorError;

#[derive(Debug, Default)]
pub struct Stdout;

impl TextTarget for Stdout {
    fn selection(&self) -> Range<usize> {
        0..0
    }

    fn insert(&mut self, _at: usize, text: &str) -> Result<(), EditorError> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{text}")
            .and_then(|_| out.flush())
            .map_err(|source| EditorError::Io {
                context: "writing to stdout".into(),
                source,
            })
    }

    fn replace(&mut self, _range: Range<usize>, text: &str) -> Result<(), EditorError> {
        self.insert(0, text)
    }
}
