//! Persisted defaults.

mod file;

use std::path::Path;

use crate::pass::{DEFAULT_MAX_ATTEMPTS, StrengthTier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Tier used when none is given on the command line.
    pub tier: StrengthTier,
    /// Last request that produced a batch, offered as the prompt's initial value.
    pub last_request: String,
    pub max_attempts: usize,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(file::default_path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(file::default_path())
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path.as_ref())?;
        Ok(settings)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), std::io::Error> {
        file::save(self, path.as_ref())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tier: StrengthTier::Normal,
            last_request: String::from("16*5"),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
