//! Read-only rendering of parse results, for humans and for `--json`.
//!
//! Everything here borrows; nothing is mutated or consumed. Traversal is
//! always sequence order, first segment to last.

use std::fmt;

use crate::parse::{Argument, Commandline, Pipeline, RedirectMode, Subcommand};

impl fmt::Display for Subcommand {
    /// Canonical form: argv joined by single spaces, then `< in`, then
    /// `> out` or `>> out` per the mode.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args.join(" "))?;
        if let Some(input) = &self.input {
            write!(f, " < {input}")?;
        }
        if let Some(output) = &self.output {
            match self.mode {
                RedirectMode::Append => write!(f, " >> {output}")?,
                _ => write!(f, " > {output}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Commandline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} subcommand(s)", self.num())?;
        for (index, segment) in self.segments().iter().enumerate() {
            writeln!(f, "  [{}] {:?}", index + 1, segment)?;
        }
        Ok(())
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} subcommand(s)", self.segments.len())?;
        for (index, segment) in self.segments.iter().enumerate() {
            match segment {
                Ok(sub) => writeln!(f, "  [{}] {sub}", index + 1)?,
                Err(e) => writeln!(f, "  [{}] error: {e}", index + 1)?,
            }
        }
        Ok(())
    }
}

/// One line per argument, with its classification label.
pub fn render_arguments(arguments: &[Argument]) -> String {
    let mut out = String::new();
    for argument in arguments {
        out.push_str(&format!("{:20} {}\n", argument.text, argument.kind.as_str()));
    }
    out
}

/// Machine-readable rendering of a parsed line.
///
/// Failed segments carry an `error` string in place of command fields, so
/// callers see exactly which stage of a partial pipeline went wrong.
pub fn to_json(pipeline: &Pipeline) -> serde_json::Value {
    let subcommands: Vec<serde_json::Value> = pipeline
        .segments
        .iter()
        .map(|segment| match segment {
            Ok(sub) => serde_json::json!({
                "args": sub.args,
                "input": sub.input,
                "output": sub.output,
                "mode": sub.mode,
            }),
            Err(e) => serde_json::json!({ "error": e.to_string() }),
        })
        .collect();

    serde_json::json!({
        "num": pipeline.segments.len(),
        "subcommands": subcommands,
    })
}
