use std::ops::Range;

use batchpass::StrengthTier;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub clipboard: bool,
    pub urandom: bool,
    pub tier: Option<StrengthTier>,
    /// Raw `"<length>*<count>"` text, validated later by the core.
    pub request: Option<String>,
    pub output: Option<String>,
    pub at: Option<Range<usize>>,
    pub seed: Option<u64>,
    pub max_attempts: Option<usize>,
    /// Settings file in place of `~/.config/batchpass/settings`.
    pub settings: Option<String>,
}

impl CliFlags {
    pub fn wants_info(&self) -> bool {
        self.help || self.version
    }
}
