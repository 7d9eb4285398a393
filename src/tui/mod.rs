//! Interactive prompt and help screen.

mod input;
mod text;

pub use input::*;
pub use text::*;
