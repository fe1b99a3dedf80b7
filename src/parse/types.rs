//! Types produced by the pipeline parser and consumed by callers.

use serde::Serialize;

use crate::error::ParseError;

/// Classification tag attached to every parsed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// `<` — redirect stdin from a file
    RedirectInput,
    /// `>>` — redirect stdout to a file, appending
    RedirectOutputAppend,
    /// `>` — redirect stdout to a file, truncating
    RedirectOutputTruncate,
    /// An ordinary word (program name or argument)
    Normal,
    /// The word immediately following a redirect operator
    Filename,
}

impl TokenKind {
    /// The operator's shell syntax, or a label for non-operator kinds.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::RedirectInput => "<",
            TokenKind::RedirectOutputAppend => ">>",
            TokenKind::RedirectOutputTruncate => ">",
            TokenKind::Normal => "normal",
            TokenKind::Filename => "filename",
        }
    }

    /// Whether this kind is one of the three redirect operators.
    pub fn is_redirect(self) -> bool {
        matches!(
            self,
            TokenKind::RedirectInput
                | TokenKind::RedirectOutputAppend
                | TokenKind::RedirectOutputTruncate
        )
    }
}

/// One classified word from a subcommand.
///
/// Invariant maintained by the tokenizer: a `Filename` argument is always
/// immediately preceded by a redirect-kind argument, and every redirect-kind
/// argument is immediately followed by exactly one `Filename`. A dangling
/// operator never produces an `Argument`; it fails the whole segment with
/// [`ParseError::MalformedRedirect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// The word's text, owned.
    pub text: String,
    pub kind: TokenKind,
}

impl Argument {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// The raw pipe-split form of one input line: each segment owns its text.
///
/// Built once by the splitter, immutable afterwards. Segments are untrimmed
/// and may be empty (`a | | b` keeps its middle segment); rejecting empties
/// is the assembler's job, not the splitter's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commandline {
    segments: Vec<String>,
}

impl Commandline {
    pub(crate) fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Number of pipe-delimited segments (pipes + 1, empties included).
    pub fn num(&self) -> usize {
        self.segments.len()
    }

    /// The raw segment strings, in pipeline order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub(crate) fn into_segments(self) -> Vec<String> {
        self.segments
    }
}

/// How a subcommand's output redirection opens its target, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RedirectMode {
    #[default]
    None,
    Truncate,
    Append,
}

impl RedirectMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RedirectMode::None => "none",
            RedirectMode::Truncate => "truncate",
            RedirectMode::Append => "append",
        }
    }
}

/// One fully assembled pipeline stage.
///
/// `args` holds the `Normal` words in input order; redirect operators and
/// their filenames never appear in it. The vector's own length marks the end
/// of the argument list, so it hands off directly to a process launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subcommand {
    /// Executable argument vector: program name first, then its arguments.
    pub args: Vec<String>,
    /// Input source path, if a `<` redirect was present.
    pub input: Option<String>,
    /// Output target path, if a `>` or `>>` redirect was present.
    pub output: Option<String>,
    /// Output mode; always `None` when `output` is `None`, and vice versa.
    pub mode: RedirectMode,
}

impl Subcommand {
    /// The program name (first argument). Assembly guarantees `args` is
    /// non-empty, so this only returns `None` on a hand-built value.
    pub fn program(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Arguments after the program name.
    pub fn arguments(&self) -> &[String] {
        self.args.get(1..).unwrap_or(&[])
    }
}

/// A fully parsed input line: one entry per pipe-delimited segment.
///
/// Recoverable syntax errors are carried per segment so that `a | | b`
/// yields two usable subcommands plus one error, rather than discarding the
/// whole line. Fatal errors (allocation, count mismatch) abort the parse
/// before a `Pipeline` exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    pub segments: Vec<Result<Subcommand, ParseError>>,
}

impl Pipeline {
    /// True when every segment parsed without error.
    pub fn is_clean(&self) -> bool {
        self.segments.iter().all(Result::is_ok)
    }

    /// The successfully parsed subcommands, in pipeline order.
    pub fn subcommands(&self) -> impl Iterator<Item = &Subcommand> {
        self.segments.iter().filter_map(|s| s.as_ref().ok())
    }

    /// Collapse to all-or-nothing: every subcommand, or the first error.
    pub fn into_result(self) -> Result<Vec<Subcommand>, ParseError> {
        self.segments.into_iter().collect()
    }
}
