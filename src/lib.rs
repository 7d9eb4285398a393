//! Batch password generation with unique results and cursor insertion.
//!
//! A raw `"<length>*<count>"` request is parsed into a [`GenerationRequest`],
//! filled by a [`BatchBuilder`] drawing from the tier's character pool, and
//! the joined batch is handed to a [`editor::TextTarget`].

pub mod editor;
pub mod error;
pub mod pass;
pub mod rng;
pub mod settings;

pub use error::{EditorError, Error, GenerateError, RequestError};
pub use pass::batch::{BatchBuilder, PasswordBatch};
pub use pass::charset::StrengthTier;
pub use pass::request::GenerationRequest;
pub use pass::generate_text;
