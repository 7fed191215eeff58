//! Command registry - name to handler mapping.

use crate::TinyResult;
use crate::user::command::{Command, CommandContext, FnCommand};

struct Entry {
    name: String,
    handler: Box<dyn Command>,
}

/// Registered commands, kept in registration order.
///
/// Registering a name twice replaces the handler and keeps the original
/// position in [`Registry::names`].
#[derive(Default)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, replacing any previous handler.
    pub fn register(&mut self, name: impl Into<String>, handler: impl Command + 'static) {
        let name = name.into();
        if name.is_empty() {
            warn!("Ignoring command registered with an empty name");
            return;
        }

        let handler: Box<dyn Command> = Box::new(handler);
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            debug!("Replacing command '{}'", name);
            entry.handler = handler;
        } else {
            debug!("Registering command '{}'", name);
            self.entries.push(Entry { name, handler });
        }
    }

    /// Register a closure as the handler for `name`.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&mut CommandContext<'_>) -> TinyResult<()> + 'static,
    {
        self.register(name, FnCommand::new(f));
    }

    /// Find a command by name.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.handler.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Names of all registered commands, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
