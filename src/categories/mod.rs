//! Category grouping for commands and flags.
//!
//! Help rendering reads these registries to lay out commands and flags
//! under named headings.
//!
//! # Architecture
//!
//! - `command`: commands grouped by category, read back sorted by name
//! - `flag`: visible flags grouped by category, read back in first-seen order
//! - `sort`: the string ordering used for command categories
//!
//! Both registries are built during definition-time setup and only read
//! afterwards. Views borrow from the registry, so the compiler rejects any
//! mutation while a view is alive.

mod command;
mod flag;
mod sort;

pub use command::{CommandCategories, CommandCategory};
pub use flag::{FlagCategories, VisibleFlagCategory};
pub use sort::lexicographic_less;
