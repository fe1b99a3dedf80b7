//! Parse failure kinds and their user-facing messages.

use std::collections::TryReserveError;
use std::fmt;

/// Everything that can go wrong while parsing one input line.
///
/// `Allocation` and `IndexMismatch` are fatal: the parse of the whole line
/// aborts. `MalformedRedirect` and `EmptyCommand` are syntax errors scoped
/// to one segment; the rest of the pipeline still parses and the error is
/// carried in that segment's slot of the [`Pipeline`](crate::Pipeline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A segment buffer could not be reserved.
    Allocation,
    /// The caller-supplied segment count disagrees with the splitter's.
    IndexMismatch { expected: usize, found: usize },
    /// A redirect operator with no filename after it.
    MalformedRedirect { operator: &'static str },
    /// A segment with no executable words (empty, or redirections only).
    EmptyCommand,
}

impl ParseError {
    /// Fatal errors abort the whole line; syntax errors fail one segment.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ParseError::Allocation | ParseError::IndexMismatch { .. }
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Allocation => write!(f, "out of memory while copying a subcommand"),
            ParseError::IndexMismatch { expected, found } => write!(
                f,
                "subcommand count mismatch: caller expected {expected}, splitter found {found}"
            ),
            ParseError::MalformedRedirect { operator } => {
                write!(f, "syntax error: `{operator}` is missing a filename")
            }
            ParseError::EmptyCommand => write!(f, "syntax error: empty command"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<TryReserveError> for ParseError {
    fn from(_: TryReserveError) -> Self {
        ParseError::Allocation
    }
}
