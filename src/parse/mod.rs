pub mod assemble;
pub mod split;
pub mod tokenize;
pub mod types;

pub use assemble::assemble;
pub use split::{count_subcommands, copy_subcommands, split_pipeline};
pub use tokenize::tokenize_subcommand;
pub use types::{Argument, Commandline, Pipeline, RedirectMode, Subcommand, TokenKind};

use log::debug;

use crate::error::ParseError;

/// Run the full chain on one raw line: split, then tokenize and assemble
/// each segment.
///
/// Syntax errors (`MalformedRedirect`, `EmptyCommand`) are scoped to their
/// segment and recorded in its slot; segments before and after still parse.
/// Fatal errors abort the line.
pub fn parse_line(input: &str) -> Result<Pipeline, ParseError> {
    let commandline = split_pipeline(input)?;

    let mut segments = Vec::new();
    segments.try_reserve(commandline.num())?;

    for (index, segment) in commandline.into_segments().into_iter().enumerate() {
        let parsed = tokenize_subcommand(&segment).and_then(assemble);
        match &parsed {
            Err(e) if e.is_fatal() => return Err(e.clone()),
            Err(e) => debug!("subcommand {}: {e}", index + 1),
            Ok(_) => {}
        }
        segments.push(parsed);
    }

    Ok(Pipeline { segments })
}
