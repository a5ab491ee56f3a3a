//! Flag definitions and their optional capabilities.
//!
//! A flag only has to report its names. Visibility and category are
//! capabilities a flag may or may not offer; callers probe for them with
//! [`Flag::as_visible`] and [`Flag::as_categorizable`].

use std::fmt;

/// A command-line option.
pub trait Flag: fmt::Debug {
    /// Primary name first, then aliases.
    fn names(&self) -> Vec<&str>;

    /// The visibility capability, if this flag has one.
    fn as_visible(&self) -> Option<&dyn VisibleFlag> {
        None
    }

    /// The category capability, if this flag has one.
    fn as_categorizable(&self) -> Option<&dyn CategorizableFlag> {
        None
    }
}

/// A flag that can say whether help output should show it.
pub trait VisibleFlag: Flag {
    fn is_visible(&self) -> bool;
}

/// A flag that belongs to a named category.
pub trait CategorizableFlag: Flag {
    /// Category name; `""` means uncategorized.
    fn category(&self) -> &str;
}

/// The standard flag shape, generic over the default value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagBase<T> {
    pub name: String,
    pub aliases: Vec<String>,
    pub usage: String,
    pub category: String,
    pub hidden: bool,
    pub value: T,
}

pub type BoolFlag = FlagBase<bool>;
pub type StringFlag = FlagBase<String>;
pub type IntFlag = FlagBase<i64>;

impl<T: Default> FlagBase<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            usage: String::new(),
            category: String::new(),
            hidden: false,
            value: T::default(),
        }
    }
}

impl<T> FlagBase<T> {
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
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

    pub fn value(mut self, value: T) -> Self {
        self.value = value;
        self
    }
}

impl<T: fmt::Debug> Flag for FlagBase<T> {
    fn names(&self) -> Vec<&str> {
        std::iter::once(self.name.as_str())
            .chain(self.aliases.iter().map(String::as_str))
            .collect()
    }

    fn as_visible(&self) -> Option<&dyn VisibleFlag> {
        Some(self)
    }

    fn as_categorizable(&self) -> Option<&dyn CategorizableFlag> {
        Some(self)
    }
}

impl<T: fmt::Debug> VisibleFlag for FlagBase<T> {
    fn is_visible(&self) -> bool {
        !self.hidden
    }
}

impl<T: fmt::Debug> CategorizableFlag for FlagBase<T> {
    fn category(&self) -> &str {
        &self.category
    }
}
