pub mod categories;
pub mod command;
pub mod config;
pub mod flag;
pub mod report;

pub use categories::{
    lexicographic_less, CommandCategories, CommandCategory, FlagCategories, VisibleFlagCategory,
};
pub use command::Command;
pub use flag::{BoolFlag, CategorizableFlag, Flag, FlagBase, IntFlag, StringFlag, VisibleFlag};
pub use report::CategoryReport;
