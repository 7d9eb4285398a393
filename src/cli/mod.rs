//! Command-line mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Outcome};
pub use flags::CliFlags;
pub use parse::parse;

use crate::logging;

/// Parse arguments, run, and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let flags = match parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Try `batchpass --help`.");
            return 2;
        }
    };

    logging::init(flags.verbose);

    match Context::new(flags).run() {
        Outcome::Done => 0,
        Outcome::Failed => 1,
    }
}
