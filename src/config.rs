use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;
use tracing::debug;

use crate::command::Command;
use crate::flag::{BoolFlag, Flag, FlagBase, IntFlag, StringFlag};

/// A command tree declared in JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppDefinition {
    pub name: String,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub commands: Vec<CommandDefinition>,
    #[serde(default)]
    pub flags: Vec<FlagDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDefinition {
    pub name: String,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub commands: Vec<CommandDefinition>,
    #[serde(default)]
    pub flags: Vec<FlagDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagDefinition {
    pub name: String,
    #[serde(default)]
    pub kind: FlagKind,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    #[default]
    Bool,
    String,
    Int,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Definition file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Invalid JSON in definition: {0}")]
    InvalidJson(String),
    #[error("IO error reading definition: {0}")]
    Io(#[from] std::io::Error),
}

impl AppDefinition {
    pub fn into_command(self) -> Command {
        Command {
            name: self.name,
            usage: self.usage,
            commands: self
                .commands
                .into_iter()
                .map(|c| Rc::new(c.into_command()))
                .collect(),
            flags: self.flags.into_iter().map(FlagDefinition::into_flag).collect(),
            ..Command::default()
        }
    }
}

impl CommandDefinition {
    pub fn into_command(self) -> Command {
        Command {
            name: self.name,
            usage: self.usage,
            category: self.category,
            hidden: self.hidden,
            aliases: self.aliases,
            commands: self
                .commands
                .into_iter()
                .map(|c| Rc::new(c.into_command()))
                .collect(),
            flags: self.flags.into_iter().map(FlagDefinition::into_flag).collect(),
        }
    }
}

impl FlagDefinition {
    pub fn into_flag(self) -> Rc<dyn Flag> {
        match self.kind {
            FlagKind::Bool => {
                let flag: BoolFlag = self.into_base();
                Rc::new(flag)
            }
            FlagKind::String => {
                let flag: StringFlag = self.into_base();
                Rc::new(flag)
            }
            FlagKind::Int => {
                let flag: IntFlag = self.into_base();
                Rc::new(flag)
            }
        }
    }

    fn into_base<T: Default>(self) -> FlagBase<T> {
        FlagBase {
            name: self.name,
            aliases: self.aliases,
            usage: self.usage,
            category: self.category,
            hidden: self.hidden,
            value: T::default(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join("cli-categories.json"))
}

pub fn load_definition(path: &Path) -> Result<AppDefinition, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    debug!(path = %path.display(), "loading command definition");
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ConfigError::InvalidJson(e.to_string()))
}

pub fn load_default_definition() -> Result<AppDefinition, ConfigError> {
    let path = config_path().ok_or_else(|| {
        ConfigError::NotFound(PathBuf::from("~/.config/cli-categories.json"))
    })?;
    load_definition(&path)
}
