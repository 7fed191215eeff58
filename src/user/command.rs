//! Command trait and context definitions.

use std::io::Write;

use crate::TinyResult;
use crate::user::registry::Registry;

/// Positional arguments following the command name.
pub struct Args<'a> {
    args: &'a [String],
}

impl<'a> Args<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self { args }
    }

    /// Get argument at index (0 is first argument after command name).
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.args.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &'a [String] {
        self.args
    }
}

/// Command execution context.
pub struct CommandContext<'a> {
    /// The command name that was invoked.
    pub command: &'a str,
    /// Parsed arguments (excluding command name).
    pub args: Args<'a>,
    /// Registry the command was dispatched from.
    pub registry: &'a Registry,
    /// Sink for command output (stdout in the binary).
    pub out: &'a mut dyn Write,
}

/// Trait for implementing commands.
///
/// A command is registered under a name with [`Registry::register`]; the
/// name lives in the registry, not in the command.
pub trait Command {
    /// Execute the command with the given context.
    fn execute(&self, ctx: &mut CommandContext<'_>) -> TinyResult<()>;
}

impl<C: Command + ?Sized> Command for &C {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> TinyResult<()> {
        (**self).execute(ctx)
    }
}

/// Adapter that lets a closure act as a [`Command`].
pub struct FnCommand<F>(F);

impl<F> FnCommand<F>
where
    F: Fn(&mut CommandContext<'_>) -> TinyResult<()>,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Command for FnCommand<F>
where
    F: Fn(&mut CommandContext<'_>) -> TinyResult<()>,
{
    fn execute(&self, ctx: &mut CommandContext<'_>) -> TinyResult<()> {
        (self.0)(ctx)
    }
}
