//! Parsing of `git ...` command lines into a closed [`Command`] enum.
//!
//! Parsing only checks the shape of the line (the `git` prefix and a known verb). Missing
//! arguments are carried as `None` so that the handlers can report "not a git repository"
//! before complaining about usage, which is the order users see in real git.
//!
//! # Public API
//! - [`CommandParser`]: Tokenizer and parser with static methods
//! - [`Command`]: One variant per supported verb
//! - [`ResetMode`]: `--soft`, `--mixed` or `--hard`
//!
//! # Tokenizing
//! - Tokens are separated by whitespace
//! - `"double"` or `'single'` quotes group words into one token. A `'` only opens a quote at
//!   the start of a token
//! - An unterminated quote runs to the end of the line

use crate::core::error::{PlaygroundError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetMode {
    Soft,
    #[default]
    Mixed,
    Hard,
}

impl ResetMode {
    pub fn as_flag(&self) -> &'static str {
        match self {
            ResetMode::Soft => "--soft",
            ResetMode::Mixed => "--mixed",
            ResetMode::Hard => "--hard",
        }
    }
}

impl fmt::Display for ResetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_flag())
    }
}

/// A parsed git command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Init,
    Commit {
        message: Option<String>,
    },
    /// `branch` lists branches, `branch <name>` creates one
    Branch {
        name: Option<String>,
    },
    Checkout {
        target: Option<String>,
        create: bool,
    },
    Merge {
        branch: Option<String>,
    },
    Add {
        paths: Vec<String>,
    },
    Status,
    Log,
    Reset {
        mode: ResetMode,
        target: Option<String>,
    },
    Revert {
        target: Option<String>,
    },
}

impl Command {
    /// The git verb this command was parsed from
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Init => "init",
            Command::Commit { .. } => "commit",
            Command::Branch { .. } => "branch",
            Command::Checkout { .. } => "checkout",
            Command::Merge { .. } => "merge",
            Command::Add { .. } => "add",
            Command::Status => "status",
            Command::Log => "log",
            Command::Reset { .. } => "reset",
            Command::Revert { .. } => "revert",
        }
    }
}

pub struct CommandParser;

impl CommandParser {
    /// Parse a full command line such as `git commit -m "first commit"`
    pub fn parse(input: &str) -> Result<Command> {
        let tokens = Self::tokenize(input);
        let mut tokens = tokens.into_iter();

        match tokens.next() {
            Some(prefix) if prefix.eq_ignore_ascii_case("git") => {}
            _ => return Err(PlaygroundError::MissingGitPrefix),
        }

        let verb = tokens
            .next()
            .ok_or(PlaygroundError::MissingCommand)?
            .to_lowercase();
        let args: Vec<String> = tokens.collect();

        log::debug!("Parsed verb '{}' with {} argument(s)", verb, args.len());

        let command = match verb.as_str() {
            "init" => Command::Init,
            "commit" => Command::Commit {
                message: Self::commit_message(&args),
            },
            "branch" => Command::Branch {
                name: args.first().cloned(),
            },
            "checkout" => Self::checkout(&args),
            "merge" => Command::Merge {
                branch: args.first().cloned(),
            },
            "add" => Command::Add { paths: args },
            "status" => Command::Status,
            "log" => Command::Log,
            "reset" => Self::reset(&args),
            "revert" => Command::Revert {
                target: args.first().cloned(),
            },
            _ => return Err(PlaygroundError::unsupported_command(verb)),
        };

        Ok(command)
    }

    /// Split a line into tokens, honoring quotes
    pub fn tokenize(input: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut in_token = false;
        let mut quote: Option<char> = None;

        for ch in input.chars() {
            match quote {
                Some(q) if ch == q => quote = None,
                Some(_) => current.push(ch),
                // An apostrophe inside a word (it's) is literal
                None if ch == '"' || (ch == '\'' && !in_token) => {
                    quote = Some(ch);
                    in_token = true;
                }
                None if ch.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                None => {
                    current.push(ch);
                    in_token = true;
                }
            }
        }

        if in_token {
            tokens.push(current);
        }

        tokens
    }

    fn commit_message(args: &[String]) -> Option<String> {
        let position = args
            .iter()
            .position(|arg| arg == "-m" || arg == "--message")?;
        args.get(position + 1).map(|message| message.replace('"', ""))
    }

    fn checkout(args: &[String]) -> Command {
        match args.first().map(String::as_str) {
            Some("-b") => Command::Checkout {
                target: args.get(1).cloned(),
                create: true,
            },
            _ => Command::Checkout {
                target: args.first().cloned(),
                create: false,
            },
        }
    }

    fn reset(args: &[String]) -> Command {
        let has = |flag: &str| args.iter().any(|arg| arg == flag);
        let mode = if has("--soft") {
            ResetMode::Soft
        } else if has("--hard") {
            ResetMode::Hard
        } else {
            ResetMode::Mixed
        };

        Command::Reset {
            mode,
            target: args.iter().find(|arg| !arg.starts_with("--")).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> String {
        value.to_string()
    }

    #[test]
    fn test_tokenize_plain_words() {
        assert_eq!(
            CommandParser::tokenize("  git   status "),
            vec![s("git"), s("status")]
        );
    }

    #[test]
    fn test_tokenize_quoted_message() {
        assert_eq!(
            CommandParser::tokenize("git commit -m \"add login page\""),
            vec![s("git"), s("commit"), s("-m"), s("add login page")]
        );
        assert_eq!(
            CommandParser::tokenize("git commit -m 'single quoted'"),
            vec![s("git"), s("commit"), s("-m"), s("single quoted")]
        );
    }

    #[test]
    fn test_tokenize_apostrophe_inside_word_is_literal() {
        assert_eq!(
            CommandParser::tokenize("git commit -m it's done"),
            vec![s("git"), s("commit"), s("-m"), s("it's"), s("done")]
        );
        assert_eq!(
            CommandParser::tokenize("git commit -m \"it's done\""),
            vec![s("git"), s("commit"), s("-m"), s("it's done")]
        );
    }

    #[test]
    fn test_tokenize_unterminated_quote_runs_to_end() {
        assert_eq!(
            CommandParser::tokenize("git commit -m \"open ended"),
            vec![s("git"), s("commit"), s("-m"), s("open ended")]
        );
    }

    #[test]
    fn test_tokenize_empty_quotes_produce_empty_token() {
        assert_eq!(
            CommandParser::tokenize("git commit -m \"\""),
            vec![s("git"), s("commit"), s("-m"), s("")]
        );
    }

    #[test]
    fn test_parse_requires_git_prefix() {
        let err = CommandParser::parse("svn commit").unwrap_err();
        assert!(matches!(err, PlaygroundError::MissingGitPrefix));
        let err = CommandParser::parse("").unwrap_err();
        assert!(matches!(err, PlaygroundError::MissingGitPrefix));
    }

    #[test]
    fn test_parse_is_case_insensitive_for_prefix_and_verb() -> Result<()> {
        assert_eq!(CommandParser::parse("GIT Init")?, Command::Init);
        Ok(())
    }

    #[test]
    fn test_parse_missing_verb() {
        let err = CommandParser::parse("git").unwrap_err();
        assert!(matches!(err, PlaygroundError::MissingCommand));
    }

    #[test]
    fn test_parse_unsupported_verb() {
        let err = CommandParser::parse("git rebase main").unwrap_err();
        assert_eq!(err.to_string(), "Git command not supported: \"rebase\"");
    }

    #[test]
    fn test_parse_commit_message() -> Result<()> {
        assert_eq!(
            CommandParser::parse("git commit -m \"hello world\"")?,
            Command::Commit {
                message: Some(s("hello world"))
            }
        );
        assert_eq!(
            CommandParser::parse("git commit")?,
            Command::Commit { message: None }
        );
        assert_eq!(
            CommandParser::parse("git commit -m")?,
            Command::Commit { message: None }
        );
        Ok(())
    }

    #[test]
    fn test_parse_checkout_variants() -> Result<()> {
        assert_eq!(
            CommandParser::parse("git checkout feature")?,
            Command::Checkout {
                target: Some(s("feature")),
                create: false
            }
        );
        assert_eq!(
            CommandParser::parse("git checkout -b feature")?,
            Command::Checkout {
                target: Some(s("feature")),
                create: true
            }
        );
        assert_eq!(
            CommandParser::parse("git checkout -b")?,
            Command::Checkout {
                target: None,
                create: true
            }
        );
        Ok(())
    }

    #[test]
    fn test_parse_reset_modes() -> Result<()> {
        assert_eq!(
            CommandParser::parse("git reset --hard HEAD~1")?,
            Command::Reset {
                mode: ResetMode::Hard,
                target: Some(s("HEAD~1"))
            }
        );
        assert_eq!(
            CommandParser::parse("git reset abc1234")?,
            Command::Reset {
                mode: ResetMode::Mixed,
                target: Some(s("abc1234"))
            }
        );
        assert_eq!(
            CommandParser::parse("git reset --soft")?,
            Command::Reset {
                mode: ResetMode::Soft,
                target: None
            }
        );
        Ok(())
    }

    #[test]
    fn test_command_reports_its_verb() -> Result<()> {
        assert_eq!(CommandParser::parse("git add .")?.verb(), "add");
        assert_eq!(CommandParser::parse("git REVERT abc")?.verb(), "revert");
        assert_eq!(CommandParser::parse("git branch")?.verb(), "branch");
        Ok(())
    }
}
