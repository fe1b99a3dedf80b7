//! Folding a classified argument list into one executable subcommand.

use super::types::{Argument, RedirectMode, Subcommand, TokenKind};
use crate::error::ParseError;

/// Fold one subcommand's classified arguments into a [`Subcommand`].
///
/// Normal words land in the argument vector in input order. Each redirect
/// operator's filename lands in the matching input/output slot; when the
/// same direction appears more than once the last occurrence wins, with the
/// output target and mode always overwritten together. Consumes the
/// argument list — nothing aliases it afterwards.
pub fn assemble(arguments: Vec<Argument>) -> Result<Subcommand, ParseError> {
    let mut args: Vec<String> = Vec::new();
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;
    let mut mode = RedirectMode::None;
    let mut pending: Option<TokenKind> = None;

    for argument in arguments {
        match argument.kind {
            TokenKind::Normal => args.push(argument.text),
            TokenKind::RedirectInput
            | TokenKind::RedirectOutputAppend
            | TokenKind::RedirectOutputTruncate => pending = Some(argument.kind),
            TokenKind::Filename => match pending.take() {
                Some(TokenKind::RedirectInput) => input = Some(argument.text),
                Some(TokenKind::RedirectOutputAppend) => {
                    output = Some(argument.text);
                    mode = RedirectMode::Append;
                }
                Some(TokenKind::RedirectOutputTruncate) => {
                    output = Some(argument.text);
                    mode = RedirectMode::Truncate;
                }
                // The tokenizer never emits an unbound filename; treat a
                // hand-built one as an ordinary word rather than lose it.
                Some(_) | None => args.push(argument.text),
            },
        }
    }

    if args.is_empty() {
        return Err(ParseError::EmptyCommand);
    }

    Ok(Subcommand {
        args,
        input,
        output,
        mode,
    })
}
