//! System clipboard target.

use std::ops::Range;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::TextTarget;
use crate::error::EditorError;

/// The clipboard's whole content counts as selected, so a batch replaces it.
pub struct Clipboard {
    ctx: ClipboardContext,
    len: usize,
}

impl Clipboard {
    pub fn new() -> Result<Self, EditorError> {
        let mut ctx = ClipboardContext::new().map_err(|e| EditorError::Clipboard(e.to_string()))?;
        let len = match ctx.get_contents() {
            Ok(mut current) => {
                let len = current.len();
                current.zeroize();
                len
            }
            Err(_) => 0,
        };
        Ok(Self { ctx, len })
    }

    fn set(&mut self, text: &str) -> Result<(), EditorError> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| EditorError::Clipboard(e.to_string()))?;
        // Read back so the provider has taken ownership before we exit.
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        self.len = text.len();
        Ok(())
    }
}

impl TextTarget for Clipboard {
    fn selection(&self) -> Range<usize> {
        0..self.len
    }

    fn insert(&mut self, _at: usize, text: &str) -> Result<(), EditorError> {
        self.set(text)
    }

    fn replace(&mut self, _range: Range<usize>, text: &str) -> Result<(), EditorError> {
        self.set(text)
    }
}
