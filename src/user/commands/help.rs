//! Help command - lists available commands.

use crate::TinyResult;
use crate::user::dispatch::write_listing;
use crate::user::{Command, CommandContext};

/// Help command instance.
pub static HELP: HelpCommand = HelpCommand;

/// Help command implementation.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> TinyResult<()> {
        write_listing(ctx.registry, ctx.out)?;
        Ok(())
    }
}
