//! Dispatch a parsed command line to its registered command.

use std::io::Write;

use crate::TinyResult;
use crate::user::command::{Args, CommandContext};
use crate::user::parser::ParsedCommand;
use crate::user::registry::Registry;

/// Command run when no command name is given.
pub const HELP_COMMAND: &str = "help";

/// What a dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The named command ran to completion.
    Executed(String),
    /// No matching command; the available commands were listed.
    Listed,
}

/// Run `parsed` against `registry`, writing output to `out`.
///
/// Without a command name the `help` command runs with no arguments, or
/// the listing is printed when `help` is not registered. Unknown commands
/// print the listing and still succeed. Errors from the command itself are
/// returned unchanged.
pub fn run(
    registry: &Registry,
    parsed: &ParsedCommand,
    out: &mut dyn Write,
) -> TinyResult<Outcome> {
    let name = parsed.command.as_deref().unwrap_or(HELP_COMMAND);
    let args: &[String] = match parsed.command {
        Some(_) => parsed.args.as_slice(),
        None => &[],
    };

    let Some(cmd) = registry.lookup(name) else {
        if parsed.command.is_some() {
            info!("Unknown command: {}", name);
        } else {
            debug!("No command given and '{}' is not registered", HELP_COMMAND);
        }
        write_listing(registry, out)?;
        return Ok(Outcome::Listed);
    };

    debug!("Executing '{}' with {} argument(s)", name, args.len());
    let mut ctx = CommandContext {
        command: name,
        args: Args::new(args),
        registry,
        out,
    };
    cmd.execute(&mut ctx)?;
    Ok(Outcome::Executed(name.to_string()))
}

/// Print every registered command name under an "Available commands:" header.
pub fn write_listing(registry: &Registry, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Available commands:")?;
    for name in registry.names() {
        writeln!(out, "- {}", name)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::user::parser::parse;

    fn dispatch(registry: &Registry, tokens: &[&str]) -> (Outcome, String) {
        let parsed = parse(tokens.iter().copied(), 0).unwrap();
        let mut out: Vec<u8> = Vec::new();
        let outcome = run(registry, &parsed, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    /// Registry whose commands record the arguments they were called with.
    fn recording(names: &[&str]) -> (Registry, Rc<RefCell<Vec<(String, Vec<String>)>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut registry = Registry::new();
        for name in names {
            let calls = Rc::clone(&calls);
            registry.register_fn(*name, move |ctx| {
                calls
                    .borrow_mut()
                    .push((ctx.command.to_string(), ctx.args.as_slice().to_vec()));
                Ok(())
            });
        }
        (registry, calls)
    }

    #[test]
    fn runs_matching_command_with_its_args() {
        let (registry, calls) = recording(&["copy", "move"]);
        let (outcome, output) = dispatch(&registry, &["move", "a", "b"]);
        assert_eq!(outcome, Outcome::Executed("move".to_string()));
        assert!(output.is_empty());
        assert_eq!(
            *calls.borrow(),
            [("move".to_string(), vec!["a".to_string(), "b".to_string()])]
        );
    }

    #[test]
    fn unknown_command_lists_names_in_order() {
        let (registry, calls) = recording(&["hw", "copy"]);
        let (outcome, output) = dispatch(&registry, &["unknown"]);
        assert_eq!(outcome, Outcome::Listed);
        assert_eq!(output, "Available commands:\n- hw\n- copy\n");
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn no_command_runs_help_without_args() {
        let (registry, calls) = recording(&["hw", "help"]);
        let (outcome, _) = dispatch(&registry, &[]);
        assert_eq!(outcome, Outcome::Executed("help".to_string()));
        assert_eq!(*calls.borrow(), [("help".to_string(), Vec::new())]);
    }

    #[test]
    fn no_command_without_help_lists() {
        let (registry, _) = recording(&["hw"]);
        let (outcome, output) = dispatch(&registry, &[]);
        assert_eq!(outcome, Outcome::Listed);
        assert_eq!(output, "Available commands:\n- hw\n");
    }

    #[test]
    fn empty_registry_lists_header_only() {
        let (outcome, output) = dispatch(&Registry::new(), &["anything"]);
        assert_eq!(outcome, Outcome::Listed);
        assert_eq!(output, "Available commands:\n");
    }

    #[test]
    fn command_error_propagates() {
        let mut registry = Registry::new();
        registry.register_fn("fail", |_ctx| anyhow::bail!("boom"));
        let parsed = parse(["fail"], 0).unwrap();
        let err = run(&registry, &parsed, &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
