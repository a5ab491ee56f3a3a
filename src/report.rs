//! Serializable snapshot of a command's category views.

use serde::Serialize;

use crate::command::Command;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    pub command: String,
    pub command_categories: Vec<CommandCategoryEntry>,
    /// `None` when the command has no flag categories beyond the uncategorized bucket.
    pub flag_categories: Option<Vec<FlagCategoryEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandCategoryEntry {
    pub name: String,
    pub commands: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagCategoryEntry {
    pub name: String,
    pub flags: Vec<String>,
}

impl CategoryReport {
    pub fn for_command(command: &Command) -> Self {
        let command_categories = command
            .command_categories()
            .visible_categories()
            .into_iter()
            .map(|category| CommandCategoryEntry {
                name: category.name().to_string(),
                commands: category
                    .visible_commands()
                    .iter()
                    .map(|c| c.name.clone())
                    .collect(),
            })
            .collect();

        let flag_categories = command.flag_categories().visible_categories().map(|view| {
            view.into_iter()
                .map(|category| FlagCategoryEntry {
                    name: category.name().to_string(),
                    flags: category
                        .flags()
                        .iter()
                        .filter_map(|flag| flag.names().first().map(|name| name.to_string()))
                        .collect(),
                })
                .collect()
        });

        Self {
            command: command.name.clone(),
            command_categories,
            flag_categories,
        }
    }
}
