//! Word splitting and classification for a single subcommand.

use log::trace;

use super::types::{Argument, TokenKind};
use crate::error::ParseError;

/// Scanner state: either looking at free-standing words, or committed to
/// reading the filename a redirect operator just promised.
enum State {
    Scanning,
    ExpectingFilename(TokenKind),
}

/// Split one subcommand on whitespace runs and classify every word.
///
/// Exactly `<`, `>>`, and `>` are operators; the word after an operator is
/// its filename, whatever it looks like; everything else is a normal word.
/// No quoting or escape handling — a quote character is just part of a word.
///
/// A redirect operator as the last word has nothing to bind to and fails
/// the segment with [`ParseError::MalformedRedirect`]. Repeated operators
/// of the same direction are fine here; the assembler decides which wins.
pub fn tokenize_subcommand(segment: &str) -> Result<Vec<Argument>, ParseError> {
    let mut arguments = Vec::new();
    let mut state = State::Scanning;

    for word in segment.split_whitespace() {
        state = match state {
            State::Scanning => {
                let kind = match word {
                    "<" => TokenKind::RedirectInput,
                    ">>" => TokenKind::RedirectOutputAppend,
                    ">" => TokenKind::RedirectOutputTruncate,
                    _ => TokenKind::Normal,
                };
                arguments.push(Argument::new(word, kind));
                if kind.is_redirect() {
                    State::ExpectingFilename(kind)
                } else {
                    State::Scanning
                }
            }
            // The operator promised a filename; take the next word as it is.
            State::ExpectingFilename(_) => {
                arguments.push(Argument::new(word, TokenKind::Filename));
                State::Scanning
            }
        };
    }

    if let State::ExpectingFilename(operator) = state {
        return Err(ParseError::MalformedRedirect {
            operator: operator.as_str(),
        });
    }

    trace!("classified {} argument(s) in segment", arguments.len());
    Ok(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(segment: &str) -> Vec<TokenKind> {
        tokenize_subcommand(segment)
            .unwrap()
            .into_iter()
            .map(|a| a.kind)
            .collect()
    }

    #[test]
    fn plain_words_are_normal() {
        assert_eq!(
            kinds("grep -n foo"),
            vec![TokenKind::Normal, TokenKind::Normal, TokenKind::Normal]
        );
    }

    #[test]
    fn input_redirect_binds_next_word() {
        let args = tokenize_subcommand("sort < in.txt").unwrap();
        assert_eq!(args[1].kind, TokenKind::RedirectInput);
        assert_eq!(args[2].kind, TokenKind::Filename);
        assert_eq!(args[2].text, "in.txt");
    }

    #[test]
    fn truncate_and_append_are_distinct() {
        assert_eq!(
            kinds("cat > out"),
            vec![
                TokenKind::Normal,
                TokenKind::RedirectOutputTruncate,
                TokenKind::Filename
            ]
        );
        assert_eq!(
            kinds("cat >> out"),
            vec![
                TokenKind::Normal,
                TokenKind::RedirectOutputAppend,
                TokenKind::Filename
            ]
        );
    }

    #[test]
    fn whitespace_runs_collapse() {
        let args = tokenize_subcommand("  echo \t  hi   ").unwrap();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].text, "echo");
        assert_eq!(args[1].text, "hi");
    }

    #[test]
    fn dangling_input_redirect_fails() {
        assert_eq!(
            tokenize_subcommand("grep <").unwrap_err(),
            ParseError::MalformedRedirect { operator: "<" }
        );
    }

    #[test]
    fn dangling_output_redirect_fails() {
        assert_eq!(
            tokenize_subcommand("ls >").unwrap_err(),
            ParseError::MalformedRedirect { operator: ">" }
        );
        assert_eq!(
            tokenize_subcommand("ls >>").unwrap_err(),
            ParseError::MalformedRedirect { operator: ">>" }
        );
    }

    #[test]
    fn operator_shaped_word_after_redirect_is_a_filename() {
        // `< >` binds `>` as the filename; only a missing word is an error.
        let args = tokenize_subcommand("sort < >").unwrap();
        assert_eq!(args[2].kind, TokenKind::Filename);
        assert_eq!(args[2].text, ">");
    }

    #[test]
    fn almost_an_operator_is_a_normal_word() {
        assert_eq!(kinds("echo >>> a.txt"), vec![
            TokenKind::Normal,
            TokenKind::Normal,
            TokenKind::Normal
        ]);
        assert_eq!(kinds("echo a>b"), vec![TokenKind::Normal, TokenKind::Normal]);
    }

    #[test]
    fn empty_segment_yields_no_arguments() {
        assert!(tokenize_subcommand("").unwrap().is_empty());
        assert!(tokenize_subcommand("   ").unwrap().is_empty());
    }

    #[test]
    fn repeated_redirects_all_classify() {
        assert_eq!(
            kinds("cmd > a > b"),
            vec![
                TokenKind::Normal,
                TokenKind::RedirectOutputTruncate,
                TokenKind::Filename,
                TokenKind::RedirectOutputTruncate,
                TokenKind::Filename
            ]
        );
    }
}
