//! Nom-based line lexer.
//!
//! Splits one received line into its tag block, source, command and
//! parameters without interpreting any of them. Message shapes decide what
//! the pieces mean.

use nom::{
    bytes::complete::{take_until, take_while1},
    character::complete::char,
    combinator::opt,
    error::{context, VerboseError},
    sequence::{preceded, terminated},
    IResult,
};

type LexResult<I, O> = IResult<I, O, VerboseError<I>>;

/// Remove one trailing `\r\n`, `\r` or `\n`.
pub fn strip_terminator(input: &str) -> &str {
    input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .or_else(|| input.strip_suffix('\r'))
        .unwrap_or(input)
}

/// Tag block: the part after `@` and before the first space.
fn lex_tags(input: &str) -> LexResult<&str, &str> {
    context(
        "lexing tag block",
        terminated(preceded(char('@'), take_until(" ")), char(' ')),
    )(input)
}

/// Source: the part after `:` and before the first space.
fn lex_source(input: &str) -> LexResult<&str, &str> {
    context(
        "lexing source",
        terminated(preceded(char(':'), take_while1(|c: char| c != ' ')), char(' ')),
    )(input)
}

fn lex_command(input: &str) -> LexResult<&str, &str> {
    context("lexing command", take_while1(|c: char| c.is_ascii_alphanumeric()))(input)
}

/// Split `input` into a [`Line`].
///
/// Exactly one space separates each element; the trailing parameter starts
/// with `:` and runs to the end of the line.
pub fn lex_line(input: &str) -> LexResult<&str, Line<'_>> {
    let (input, tags) = opt(lex_tags)(input)?;
    let (input, source) = opt(lex_source)(input)?;
    let (input, command) = lex_command(input)?;

    let mut params: Vec<&str> = Vec::new();
    let mut rest = input;

    while let Some(after_space) = rest.strip_prefix(' ') {
        if let Some(trailing) = after_space.strip_prefix(':') {
            params.push(trailing);
            rest = "";
            break;
        }

        let end = after_space.find(' ').unwrap_or(after_space.len());
        let param = &after_space[..end];
        if param.is_empty() {
            break;
        }
        params.push(param);
        rest = &after_space[end..];
    }

    Ok((
        rest,
        Line {
            tags,
            source,
            command,
            params,
        },
    ))
}

/// A lexed line with borrowed slices into the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// Raw tag block without the leading `@`, if present.
    pub tags: Option<&'a str>,
    /// Raw source without the leading `:`, if present.
    pub source: Option<&'a str>,
    pub command: &'a str,
    /// Parameters, the trailing one last and without its `:`.
    pub params: Vec<&'a str>,
}

impl<'a> Line<'a> {
    /// Lex a full line, tolerating one trailing line terminator.
    ///
    /// Returns `None` unless the whole line is consumed.
    pub fn lex(input: &'a str) -> Option<Self> {
        match lex_line(strip_terminator(input)) {
            Ok(("", line)) => Some(line),
            _ => None,
        }
    }

    /// The parameter at `index`.
    pub fn param(&self, index: usize) -> Option<&'a str> {
        self.params.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_ping() {
        let line = Line::lex("PING :tmi.twitch.tv").unwrap();
        assert_eq!(line.command, "PING");
        assert!(line.tags.is_none());
        assert!(line.source.is_none());
        assert_eq!(line.params, vec!["tmi.twitch.tv"]);
    }

    #[test]
    fn test_lex_with_source() {
        let line = Line::lex(":ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #dallas :Kappa Keepo Kappa")
            .unwrap();
        assert_eq!(line.source, Some("ronni!ronni@ronni.tmi.twitch.tv"));
        assert_eq!(line.command, "PRIVMSG");
        assert_eq!(line.params, vec!["#dallas", "Kappa Keepo Kappa"]);
    }

    #[test]
    fn test_lex_with_tags() {
        let line = Line::lex("@msg-id=slow_off :tmi.twitch.tv NOTICE #dallas :Slow off.").unwrap();
        assert_eq!(line.tags, Some("msg-id=slow_off"));
        assert_eq!(line.source, Some("tmi.twitch.tv"));
        assert_eq!(line.params, vec!["#dallas", "Slow off."]);
    }

    #[test]
    fn test_lex_terminators() {
        for line in [
            "PING :tmi.twitch.tv\r\n",
            "PING :tmi.twitch.tv\n",
            "PING :tmi.twitch.tv\r",
            "PING :tmi.twitch.tv",
        ] {
            assert_eq!(Line::lex(line).unwrap().params, vec!["tmi.twitch.tv"]);
        }
    }

    #[test]
    fn test_lex_numeric() {
        let line = Line::lex(":ronni.tmi.twitch.tv 353 ronni = #dallas :ronni fred wilma").unwrap();
        assert_eq!(line.command, "353");
        assert_eq!(line.params, vec!["ronni", "=", "#dallas", "ronni fred wilma"]);
    }

    #[test]
    fn test_lex_empty_trailing() {
        let line = Line::lex("PRIVMSG #dallas :").unwrap();
        assert_eq!(line.params, vec!["#dallas", ""]);
    }

    #[test]
    fn test_lex_rejects_garbage() {
        assert!(Line::lex("").is_none());
        assert!(Line::lex("@only-tags").is_none());
        assert!(Line::lex(":source-only").is_none());
        assert!(Line::lex("PRIVMSG  #double-space").is_none());
        assert!(Line::lex("PING! :x").is_none());
    }
}
