//! Hello world command.

use std::io::Write;

use crate::TinyResult;
use crate::user::{Command, CommandContext};

/// Hello world command instance.
pub static HELLO_WORLD: HelloWorldCommand = HelloWorldCommand;

/// Prints `Hello world`; arguments are ignored.
pub struct HelloWorldCommand;

impl Command for HelloWorldCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> TinyResult<()> {
        writeln!(ctx.out, "Hello world")?;
        Ok(())
    }
}
