//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use batchpass::StrengthTier;

use super::quiet;
use crate::terminal::{RED, RESET, YELLOW, calculate_entropy, entropy_strength, format_number};

fn colored(color: &str, msg: &str) -> String {
    format!("{color}{msg}{RESET}")
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", colored(YELLOW, msg));
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{}", colored(RED, msg));
}

pub fn urandom_unavailable() {
    warn("Warning: /dev/urandom not available, using hardware entropy");
}

pub fn settings_failed(action: &str, err: &std::io::Error) {
    warn(&format!("Failed to {action} settings: {err}"));
}

/// Prompt user when clipboard is unavailable. Returns true to fall back to stdout, false to abort.
/// In quiet/non-interactive mode, silently falls back.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// One-line summary after a batch is placed - suppressed in quiet mode
pub fn batch_placed(tier: StrengthTier, length: usize, count: usize, pool: usize, destination: &str) {
    if quiet::enabled() {
        return;
    }
    let bits = calculate_entropy(length, pool);
    eprintln!(
        "{} {} password(s) \u{00d7} {} chars, {:.1} bits each ({}) \u{2192} {}",
        format_number(count),
        tier,
        length,
        bits,
        entropy_strength(bits),
        destination
    );
}
