//! User command system.
//!
//! # Architecture
//!
//! - `command.rs` - Defines the `Command` trait and execution context
//! - `registry.rs` - Name to command mapping
//! - `parser.rs` - Strict positional command line parsing
//! - `dispatch.rs` - Lookup, execution and the "Available commands" fallback
//! - `commands/` - Built-in command implementations
//!
//! # Adding a New Command
//!
//! 1. Create a new file in `commands/` (e.g., `commands/mycommand.rs`)
//! 2. Define a struct and implement the `Command` trait
//! 3. Export a static instance: `pub static MYCOMMAND: MyCommand = MyCommand;`
//! 4. Register it in `commands::register_builtins`:
//!    `registry.register("mycommand", &MYCOMMAND);`
//!
//! Closures work too: `registry.register_fn("name", |ctx| { ... })`.

pub mod command;
pub mod commands;
pub mod dispatch;
pub mod parser;
pub mod registry;

pub use command::{Args, Command, CommandContext, FnCommand};
pub use dispatch::{Outcome, run};
pub use parser::{ParsedCommand, parse, parse_os};
pub use registry::Registry;
