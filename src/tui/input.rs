use std::io::BufRead;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};
use tracing::debug;

use batchpass::pass::request::matches_pattern;

use crate::terminal::{CLEAR_EOL, DIM, RED, RESET, RawModeGuard, flush, reset_terminal};

const HINT: &str = "input: [password length] * [create size]";

/// Editable single-line prompt for a `"<length>*<count>"` request.
///
/// Enter is only accepted once the text matches the request shape; until
/// then a hint is shown after the input. Esc or Ctrl+Q cancels (`None`).
/// If raw mode is unavailable one plain line is read instead, and the
/// initial value is not offered.
pub fn prompt_request(prompt: &str, initial_value: &str) -> Option<String> {
    let mut input: Vec<char> = initial_value.chars().collect();
    let mut cursor_pos = input.len();
    let mut cancelled = false;

    // RawModeGuard ensures raw mode is disabled even if we panic or return early
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(e) => {
            debug!(error = %e, "Raw mode unavailable, reading a plain line");
            print!("{DIM}{prompt}:{RESET} ");
            flush();
            return read_plain(&mut std::io::stdin().lock());
        }
    };

    redraw(prompt, &input, cursor_pos);

    loop {
        match read() {
            Ok(Event::Key(key_event)) if key_event.kind != KeyEventKind::Release => {
                let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
                match key_event.code {
                    KeyCode::Char('c') if ctrl => {
                        // Reset terminal BEFORE exit since process::exit doesn't run destructors
                        reset_terminal();
                        println!();
                        std::process::exit(130);
                    }
                    KeyCode::Char('q') if ctrl => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if ctrl => {
                        input.clear();
                        cursor_pos = 0;
                    }
                    KeyCode::Enter => {
                        if matches_pattern(&input.iter().collect::<String>()) {
                            break;
                        }
                    }
                    KeyCode::Backspace => {
                        if cursor_pos > 0 {
                            cursor_pos -= 1;
                            input.remove(cursor_pos);
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_pos < input.len() {
                            input.remove(cursor_pos);
                        }
                    }
                    KeyCode::Left => cursor_pos = cursor_pos.saturating_sub(1),
                    KeyCode::Right => cursor_pos = (cursor_pos + 1).min(input.len()),
                    KeyCode::Home => cursor_pos = 0,
                    KeyCode::End => cursor_pos = input.len(),
                    KeyCode::Char(c) if !ctrl => {
                        input.insert(cursor_pos, c);
                        cursor_pos += 1;
                    }
                    _ => {}
                }

                redraw(prompt, &input, cursor_pos);
            }
            Err(_) => {
                cancelled = true;
                break;
            }
            _ => {}
        }
    }

    // Explicitly drop guard to disable raw mode BEFORE println
    drop(_guard);
    println!();
    if cancelled {
        None
    } else {
        Some(input.into_iter().collect())
    }
}

/// Redraw the prompt line, with the hint when the input does not match yet.
fn redraw(prompt: &str, input: &[char], cursor_pos: usize) {
    let text: String = input.iter().collect();
    let hint = if matches_pattern(&text) {
        String::new()
    } else {
        format!("  {RED}{DIM}{HINT}{RESET}")
    };

    print!("\r{DIM}{prompt}:{RESET} {text}{hint}{CLEAR_EOL}");
    // Columns are 1-based: prompt, ": ", then the cursor offset.
    print!("\x1b[{}G", prompt.chars().count() + 3 + cursor_pos);
    flush();
}

/// One line without its line ending. EOF or a read error cancels.
fn read_plain(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}
