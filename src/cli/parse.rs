use std::ops::Range;
use std::str::FromStr;

use batchpass::StrengthTier;
use thiserror::Error;

use super::CliFlags;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Invalid position: {0} (expected POS or START:END)")]
    InvalidPosition(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Unexpected argument: {0}")]
    UnexpectedArg(String),
    #[error("{0}")]
    Tier(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "--verbose" => flags.verbose = true,
            "-b" | "--board" => flags.clipboard = true,
            "-u" | "--urandom" => flags.urandom = true,
            "-t" | "--tier" => {
                let value = value(args, &mut i)?;
                flags.tier = Some(
                    StrengthTier::from_str(value).map_err(|e| ParseError::Tier(e.to_string()))?,
                );
            }
            "-o" | "--output" => flags.output = Some(value(args, &mut i)?.to_string()),
            "--at" => flags.at = Some(position(value(args, &mut i)?)?),
            "--seed" => flags.seed = Some(number(value(args, &mut i)?)?),
            "--max-attempts" => flags.max_attempts = Some(number(value(args, &mut i)?)?),
            "--settings" => flags.settings = Some(value(args, &mut i)?.to_string()),
            arg if arg.starts_with('-') && arg.len() > 1 => {
                return Err(ParseError::UnknownArg(arg.to_string()));
            }
            arg => positional(&mut flags, arg)?,
        }
        i += 1;
    }

    Ok(flags)
}

/// A bare word is a tier name first, then the request text.
fn positional(flags: &mut CliFlags, arg: &str) -> Result<(), ParseError> {
    if flags.tier.is_none()
        && let Ok(tier) = arg.parse::<StrengthTier>()
    {
        flags.tier = Some(tier);
        return Ok(());
    }
    if flags.request.is_none() {
        flags.request = Some(arg.to_string());
        return Ok(());
    }
    Err(ParseError::UnexpectedArg(arg.to_string()))
}

fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number<T: FromStr>(s: &str) -> Result<T, ParseError> {
    s.trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

/// `POS` is a bare cursor, `START:END` a selection (byte offsets).
fn position(s: &str) -> Result<Range<usize>, ParseError> {
    let invalid = || ParseError::InvalidPosition(s.to_string());
    match s.split_once(':') {
        Some((start, end)) => {
            let start: usize = start.trim().parse().map_err(|_| invalid())?;
            let end: usize = end.trim().parse().map_err(|_| invalid())?;
            if start > end {
                return Err(invalid());
            }
            Ok(start..end)
        }
        None => {
            let pos: usize = s.trim().parse().map_err(|_| invalid())?;
            Ok(pos..pos)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("batchpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn tier_and_request_positionals() {
        let flags = parse(&args(&["strong", "8*10"])).unwrap();
        assert_eq!(flags.tier, Some(StrengthTier::Strong));
        assert_eq!(flags.request.as_deref(), Some("8*10"));
    }

    #[test]
    fn request_without_tier() {
        let flags = parse(&args(&["8 * 10", "-q"])).unwrap();
        assert_eq!(flags.tier, None);
        assert_eq!(flags.request.as_deref(), Some("8 * 10"));
        assert!(flags.quiet);
    }

    #[test]
    fn malformed_request_is_kept_for_the_core() {
        let flags = parse(&args(&["weak", "abc"])).unwrap();
        assert_eq!(flags.request.as_deref(), Some("abc"));
    }

    #[test]
    fn tier_may_follow_request() {
        let flags = parse(&args(&["4*3", "weak"])).unwrap();
        assert_eq!(flags.tier, Some(StrengthTier::Weak));
        assert_eq!(flags.request.as_deref(), Some("4*3"));
    }

    #[test]
    fn third_positional_is_rejected() {
        assert_eq!(
            parse(&args(&["weak", "8*1", "extra"])).unwrap_err(),
            ParseError::UnexpectedArg("extra".into())
        );
    }

    #[test]
    fn valued_flags() {
        let flags = parse(&args(&[
            "-t", "weak", "-o", "notes.txt", "--at", "3:7", "--seed", "42", "--max-attempts", "9",
            "--settings", "alt.conf",
        ]))
        .unwrap();
        assert_eq!(flags.tier, Some(StrengthTier::Weak));
        assert_eq!(flags.output.as_deref(), Some("notes.txt"));
        assert_eq!(flags.at, Some(3..7));
        assert_eq!(flags.seed, Some(42));
        assert_eq!(flags.max_attempts, Some(9));
        assert_eq!(flags.settings.as_deref(), Some("alt.conf"));
    }

    #[test]
    fn bare_cursor_position() {
        assert_eq!(position("12").unwrap(), 12..12);
        assert!(position("7:3").is_err());
        assert!(position("x").is_err());
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&args(&["--seed"])).unwrap_err(),
            ParseError::MissingValue("--seed".into())
        );
        assert_eq!(
            parse(&args(&["--seed", "abc"])).unwrap_err(),
            ParseError::InvalidNumber("abc".into())
        );
        assert_eq!(
            parse(&args(&["--nope"])).unwrap_err(),
            ParseError::UnknownArg("--nope".into())
        );
        assert!(matches!(parse(&args(&["-t", "medium"])), Err(ParseError::Tier(_))));
    }
}
