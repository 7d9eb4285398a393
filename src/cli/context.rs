//! CLI context - bundles settings, flags, random source and destination.

use std::io::BufRead;
use std::path::PathBuf;

use batchpass::editor::{Clipboard, Placement, Stdout, TextBuffer, TextTarget};
use batchpass::pass::{self, charset};
use batchpass::rng::Rand;
use batchpass::settings::Settings;
use batchpass::Error;
use tracing::{debug, info};

use super::{CliFlags, prompts, quiet};
use crate::tui::{print_help, prompt_request};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Finished or cancelled, nothing went wrong.
    Done,
    /// The request was rejected or the batch could not be placed.
    Failed,
}

enum Destination {
    Stdout(Stdout),
    Clipboard(Clipboard),
    File(TextBuffer),
}

impl Destination {
    fn target(&mut self) -> &mut dyn TextTarget {
        match self {
            Destination::Stdout(t) => t,
            Destination::Clipboard(t) => t,
            Destination::File(t) => t,
        }
    }

    fn describe(&self) -> String {
        match self {
            Destination::Stdout(_) => "stdout".into(),
            Destination::Clipboard(_) => "clipboard".into(),
            Destination::File(buffer) => buffer
                .path()
                .map(|p| {
                    std::fs::canonicalize(p)
                        .unwrap_or_else(|_| p.to_path_buf())
                        .display()
                        .to_string()
                })
                .unwrap_or_else(|| "file".into()),
        }
    }
}

/// Application context for CLI mode.
pub struct Context {
    flags: CliFlags,
    settings: Settings,
    /// `--settings` override; `None` is the default location.
    settings_path: Option<PathBuf>,
    interactive: bool,
    /// Replaces stdin as the source of the request line.
    input: Option<Box<dyn BufRead>>,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        quiet::set(flags.quiet);

        let settings_path = flags.settings.as_ref().map(PathBuf::from);
        let settings = if flags.wants_info() {
            Settings::default()
        } else {
            let loaded = match &settings_path {
                Some(path) => Settings::load_from(path),
                None => Settings::load_from_file(),
            };
            loaded.unwrap_or_else(|e| {
                prompts::settings_failed("load", &e);
                Settings::default()
            })
        };

        Self {
            flags,
            settings,
            settings_path,
            interactive: quiet::is_interactive(),
            input: None,
        }
    }

    pub fn run(&mut self) -> Outcome {
        if self.handle_info_flags() {
            return Outcome::Done;
        }

        let tier = self.flags.tier.unwrap_or(self.settings.tier);

        let Some(raw) = self.read_request() else {
            debug!("Request cancelled");
            return Outcome::Done;
        };

        let mut destination = match self.destination() {
            Ok(destination) => destination,
            Err(outcome) => return outcome,
        };

        let mut rng = self.rng();
        let max_attempts = self.flags.max_attempts.unwrap_or(self.settings.max_attempts);

        let result = pass::insert(
            tier,
            &raw,
            max_attempts,
            &mut rng,
            Some(destination.target()),
        );

        let (request, placement) = match result {
            Ok(done) => done,
            Err(e) => {
                report(&e);
                return Outcome::Failed;
            }
        };

        if let Destination::File(buffer) = &destination
            && let Err(e) = buffer.save()
        {
            report(&e.into());
            return Outcome::Failed;
        }

        info!(?placement, source = rng.source_name(), "Batch placed");
        if placement != Placement::Discarded {
            prompts::batch_placed(
                request.tier,
                request.length,
                request.count,
                charset::size(request.tier),
                &destination.describe(),
            );
        }

        self.remember(&raw);
        Outcome::Done
    }

    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            print_help();
            return true;
        }
        if self.flags.version {
            println!("batchpass {}", env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    /// Request text from the command line, the interactive prompt, or one line of stdin.
    /// `None` means the user cancelled.
    fn read_request(&mut self) -> Option<String> {
        if let Some(raw) = &self.flags.request {
            return Some(raw.clone());
        }

        if self.interactive {
            return prompt_request(
                "[password length] * [create size]",
                &self.settings.last_request,
            );
        }

        let mut line = String::new();
        let read = match self.input.as_mut() {
            Some(input) => input.read_line(&mut line),
            None => std::io::stdin().lock().read_line(&mut line),
        };
        match read {
            Ok(_) => Some(line),
            Err(e) => {
                prompts::error(&format!("Failed to read request from stdin: {e}"));
                Some(String::new())
            }
        }
    }

    /// `Err` carries the outcome when no destination should be used.
    fn destination(&self) -> Result<Destination, Outcome> {
        if self.flags.clipboard {
            match Clipboard::new() {
                Ok(clipboard) => return Ok(Destination::Clipboard(clipboard)),
                Err(e) => {
                    debug!(error = %e, "Clipboard unavailable");
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(Outcome::Done);
                    }
                }
            }
        } else if let Some(path) = &self.flags.output {
            return self.open_file(path).map(Destination::File).map_err(|e| {
                report(&e.into());
                Outcome::Failed
            });
        }

        Ok(Destination::Stdout(Stdout))
    }

    fn open_file(&self, path: &str) -> Result<TextBuffer, batchpass::EditorError> {
        let mut buffer = TextBuffer::open(path)?;
        if let Some(at) = &self.flags.at {
            buffer.select(at.clone())?;
        }
        Ok(buffer)
    }

    fn rng(&self) -> Rand {
        if let Some(seed) = self.flags.seed {
            return Rand::seeded(seed);
        }
        if self.flags.urandom {
            match Rand::urandom() {
                Ok(rng) => return rng,
                Err(e) => {
                    debug!(error = %e, "Opening /dev/urandom failed");
                    prompts::urandom_unavailable();
                }
            }
        }
        Rand::new()
    }

    /// Store the request as the next prompt's initial value.
    fn remember(&mut self, raw: &str) {
        let raw = raw.trim();
        if raw == self.settings.last_request {
            return;
        }
        self.settings.last_request = raw.to_string();
        let saved = match &self.settings_path {
            Some(path) => self.settings.save_to(path),
            None => self.settings.save_to_file(),
        };
        if let Err(e) = saved {
            prompts::settings_failed("save", &e);
        }
    }
}

fn report(err: &Error) {
    prompts::error(&err.to_string());
}
