//! Command line parsing.
//!
//! No options are recognised: every token must be positional. The first
//! positional is the command name, the rest are handed to the command.
//! `--` ends option scanning, so `-- -x` passes `-x` through as a positional.

use std::ffi::OsString;

use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};

use crate::error::ArgumentError;

/// Strict positional-only command line.
#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
struct RawCommandLine {
    positionals: Vec<String>,
}

/// A parsed invocation: the command token and its arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Command name, absent when no positional was supplied.
    pub command: Option<String>,
    /// Positionals after the command name.
    pub args: Vec<String>,
}

impl ParsedCommand {
    pub fn is_empty(&self) -> bool {
        self.command.is_none()
    }
}

/// Parse a command line after dropping `skip` leading host-runtime tokens.
pub fn parse<I, T>(raw: I, skip: usize) -> Result<ParsedCommand, ArgumentError>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let tokens: Vec<String> = raw.into_iter().skip(skip).map(Into::into).collect();
    parse_tokens(tokens)
}

/// Like [`parse`], for the raw process argument vector.
pub fn parse_os<I>(raw: I, skip: usize) -> Result<ParsedCommand, ArgumentError>
where
    I: IntoIterator<Item = OsString>,
{
    let tokens = raw
        .into_iter()
        .skip(skip)
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| ArgumentError::InvalidUnicode(arg.to_string_lossy().into_owned()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    parse_tokens(tokens)
}

fn parse_tokens(tokens: Vec<String>) -> Result<ParsedCommand, ArgumentError> {
    trace!("Parsing tokens: {:?}", tokens);
    let line = RawCommandLine::try_parse_from(tokens).map_err(argument_error)?;

    let mut positionals = line.positionals.into_iter();
    Ok(ParsedCommand {
        command: positionals.next(),
        args: positionals.collect(),
    })
}

fn argument_error(err: clap::Error) -> ArgumentError {
    if err.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(arg)) = err.get(ContextKind::InvalidArg) {
            return ArgumentError::UnexpectedOption(arg.clone());
        }
    }
    ArgumentError::Invalid(err.to_string().trim().to_string())
}
