//! Commands and their category views.

use std::rc::Rc;

use crate::categories::{CommandCategories, FlagCategories};
use crate::flag::{Flag, VisibleFlag};

/// A dispatchable command with optional subcommands and flags.
#[derive(Debug, Clone, Default)]
pub struct Command {
    pub name: String,
    pub usage: String,
    /// Help heading for this command under its parent; `""` when uncategorized.
    pub category: String,
    /// Hidden commands still dispatch but are left out of help.
    pub hidden: bool,
    pub aliases: Vec<String>,
    pub commands: Vec<Rc<Command>>,
    pub flags: Vec<Rc<dyn Flag>>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn subcommand(mut self, command: Command) -> Self {
        self.commands.push(Rc::new(command));
        self
    }

    pub fn flag(mut self, flag: impl Flag + 'static) -> Self {
        self.flags.push(Rc::new(flag));
        self
    }

    /// True if `name` is this command's name or one of its aliases.
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| alias == name)
    }

    /// Walk subcommands by name or alias. An empty path resolves to `self`.
    pub fn resolve(&self, path: &[&str]) -> Option<&Command> {
        path.iter().try_fold(self, |current, name| {
            current
                .commands
                .iter()
                .find(|command| command.has_name(name))
                .map(|command| command.as_ref())
        })
    }

    /// Group subcommands by their own category, in declaration order.
    pub fn command_categories(&self) -> CommandCategories {
        let mut categories = CommandCategories::new();
        for command in &self.commands {
            categories.add_command(&command.category, Rc::clone(command));
        }
        categories
    }

    /// Subcommands that are not hidden.
    pub fn visible_commands(&self) -> Vec<Rc<Command>> {
        self.commands
            .iter()
            .filter(|command| !command.hidden)
            .cloned()
            .collect()
    }

    pub fn flag_categories(&self) -> FlagCategories {
        FlagCategories::from_flags(&self.flags)
    }

    /// Flags that have the visibility capability and report themselves visible.
    pub fn visible_flags(&self) -> Vec<&dyn VisibleFlag> {
        self.flags
            .iter()
            .filter_map(|flag| flag.as_visible())
            .filter(|flag| flag.is_visible())
            .collect()
    }
}
