//! Pipe splitting: one raw line into per-segment owned strings.

use log::debug;

use super::types::Commandline;
use crate::error::ParseError;

/// Number of pipe-delimited segments in a raw line.
///
/// Always pipes + 1: leading, trailing, and consecutive pipes count as
/// (empty) segments. Rejecting a zero-length subcommand is a syntax-error
/// decision that belongs to the assembler, not to counting.
pub fn count_subcommands(input: &str) -> usize {
    input.bytes().filter(|&b| b == b'|').count() + 1
}

/// Copy each pipe-delimited segment into its own owned buffer.
///
/// `expected` is the caller's segment count; a disagreement with what the
/// scan actually finds is a contract violation and fails with
/// [`ParseError::IndexMismatch`]. Segments are not trimmed here — the
/// tokenizer owns whitespace handling.
pub fn copy_subcommands(input: &str, expected: usize) -> Result<Commandline, ParseError> {
    let mut segments: Vec<String> = Vec::new();
    segments.try_reserve(expected)?;

    let mut buf = String::new();
    buf.try_reserve(input.len())?;

    for c in input.chars() {
        if c == '|' {
            segments.push(std::mem::take(&mut buf));
            buf.try_reserve(input.len())?;
        } else {
            buf.push(c);
        }
    }
    segments.push(buf);

    if segments.len() != expected {
        return Err(ParseError::IndexMismatch {
            expected,
            found: segments.len(),
        });
    }

    Ok(Commandline::from_segments(segments))
}

/// Count and copy in one step: the splitter's entry point.
pub fn split_pipeline(input: &str) -> Result<Commandline, ParseError> {
    let num = count_subcommands(input);
    let commandline = copy_subcommands(input, num)?;
    debug!("split line into {} subcommand(s)", commandline.num());
    Ok(commandline)
}
