//! Command categories.

use std::rc::Rc;

use tracing::debug;

use super::sort::lexicographic_cmp;
use crate::command::Command;

/// Commands grouped under category names.
#[derive(Debug, Clone, Default)]
pub struct CommandCategories {
    categories: Vec<CommandCategory>,
}

impl CommandCategories {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command to a category, creating the category on first use.
    ///
    /// Any string is a valid category name, including `""`. The same command
    /// may be added more than once and keeps every occurrence.
    pub fn add_command(&mut self, category: &str, command: Rc<Command>) {
        if let Some(existing) = self.categories.iter_mut().find(|c| c.name == category) {
            existing.commands.push(command);
            return;
        }

        debug!(category, command = %command.name, "creating command category");
        self.categories.push(CommandCategory {
            name: category.to_string(),
            commands: vec![command],
        });
    }

    /// All categories, sorted by name with [`lexicographic_less`](super::lexicographic_less).
    pub fn categories(&self) -> Vec<&CommandCategory> {
        let mut sorted: Vec<&CommandCategory> = self.categories.iter().collect();
        sorted.sort_by(|a, b| lexicographic_cmp(&a.name, &b.name));
        sorted
    }

    /// Sorted categories that have at least one visible command.
    pub fn visible_categories(&self) -> Vec<&CommandCategory> {
        self.categories()
            .into_iter()
            .filter(|category| category.commands.iter().any(|command| !command.hidden))
            .collect()
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True until the first command is added.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// A named group of commands, in insertion order.
#[derive(Debug, Clone)]
pub struct CommandCategory {
    name: String,
    commands: Vec<Rc<Command>>,
}

impl CommandCategory {
    /// The category name, verbatim.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every command added under this category, hidden ones included.
    pub fn commands(&self) -> &[Rc<Command>] {
        &self.commands
    }

    /// Commands with `hidden == false`, in insertion order.
    pub fn visible_commands(&self) -> Vec<Rc<Command>> {
        self.commands
            .iter()
            .filter(|command| !command.hidden)
            .cloned()
            .collect()
    }
}
