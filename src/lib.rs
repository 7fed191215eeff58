//! tinycmd - a small command-line dispatcher.
//!
//! A [`Registry`] maps command names to handlers, the parser turns the
//! process arguments into a [`ParsedCommand`], and the dispatcher runs the
//! matching command or lists the available ones.

#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod user;

use std::ffi::OsString;
use std::io::Write;

pub use config::Settings;
pub use error::{ArgumentError, TinyResult};
pub use user::{Command, CommandContext, Outcome, ParsedCommand, Registry};

/// Registry holding the built-in commands.
pub fn default_registry() -> Registry {
    let mut registry = Registry::new();
    user::commands::register_builtins(&mut registry);
    registry
}

/// Parse `argv` with the configured skip count and dispatch it.
pub fn run_with<I>(
    registry: &Registry,
    argv: I,
    settings: &Settings,
    out: &mut dyn Write,
) -> TinyResult<Outcome>
where
    I: IntoIterator<Item = OsString>,
{
    let parsed = user::parse_os(argv, settings.skip)?;
    user::run(registry, &parsed, out)
}
