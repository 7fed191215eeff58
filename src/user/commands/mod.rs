//! Built-in command implementations.
//!
//! Each command is defined in its own module file.

pub mod hello;
pub mod help;

pub use hello::HELLO_WORLD;
pub use help::HELP;

use crate::user::Registry;

/// Register the built-in commands: `hw` and `help`.
pub fn register_builtins(registry: &mut Registry) {
    registry.register("hw", &HELLO_WORLD);
    registry.register("help", &HELP);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::dispatch::{Outcome, run};
    use crate::user::parser::parse;

    fn builtins() -> Registry {
        let mut registry = Registry::new();
        register_builtins(&mut registry);
        registry
    }

    fn output(tokens: &[&str]) -> String {
        let parsed = parse(tokens.iter().copied(), 0).unwrap();
        let mut out: Vec<u8> = Vec::new();
        run(&builtins(), &parsed, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn builtin_names() {
        let registry = builtins();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["hw", "help"]);
    }

    #[test]
    fn hello_world() {
        assert_eq!(output(&["hw"]), "Hello world\n");
        assert_eq!(output(&["hw", "ignored", "args"]), "Hello world\n");
    }

    #[test]
    fn help_lists_commands() {
        assert_eq!(output(&["help"]), "Available commands:\n- hw\n- help\n");
    }

    #[test]
    fn bare_invocation_runs_help() {
        let parsed = parse(Vec::<String>::new(), 0).unwrap();
        let mut out: Vec<u8> = Vec::new();
        let outcome = run(&builtins(), &parsed, &mut out).unwrap();
        assert_eq!(outcome, Outcome::Executed("help".to_string()));
        assert_eq!(String::from_utf8(out).unwrap(), "Available commands:\n- hw\n- help\n");
    }
}
