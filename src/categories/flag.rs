//! Flag categories.

use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::flag::{Flag, VisibleFlag};

/// Visible flags grouped under category names.
///
/// The uncategorized bucket (`""`) always exists and always comes first.
#[derive(Debug, Clone)]
pub struct FlagCategories {
    names: Vec<String>,
    by_name: HashMap<String, VisibleFlagCategory>,
}

impl FlagCategories {
    /// Create a registry holding only the empty uncategorized bucket.
    pub fn new() -> Self {
        let mut by_name = HashMap::new();
        by_name.insert(String::new(), VisibleFlagCategory::named(""));
        Self {
            names: vec![String::new()],
            by_name,
        }
    }

    /// Build a registry from every flag that is both categorizable and visible.
    ///
    /// Flags missing either capability, or reporting themselves invisible,
    /// are skipped.
    pub fn from_flags(flags: &[Rc<dyn Flag>]) -> Self {
        let mut categories = Self::new();

        for flag in flags {
            let Some(categorizable) = flag.as_categorizable() else {
                trace!(flag = ?flag.names(), "skipping flag without a category");
                continue;
            };
            if !flag.as_visible().is_some_and(|v| v.is_visible()) {
                trace!(flag = ?flag.names(), "skipping invisible flag");
                continue;
            }
            let category = categorizable.category().to_string();
            categories.add_flag(&category, Rc::clone(flag));
        }

        categories
    }

    /// Append a flag to a category, creating the category on first use.
    ///
    /// Callers must only add flags with the visible capability; any other flag
    /// is stored but left out of [`VisibleFlagCategory::flags`].
    pub fn add_flag(&mut self, category: &str, flag: Rc<dyn Flag>) {
        if flag.as_visible().is_none() {
            warn!(category, flag = ?flag.names(), "flag without visibility added to a category");
        }

        if !self.by_name.contains_key(category) {
            debug!(category, "creating flag category");
            self.names.push(category.to_string());
            self.by_name
                .insert(category.to_string(), VisibleFlagCategory::named(category));
        }

        if let Some(entry) = self.by_name.get_mut(category) {
            entry.flags.push(flag);
        }
    }

    /// Categories in the order their names were first added.
    ///
    /// Returns `None` while only the uncategorized bucket exists, so help output
    /// can leave out the category section. Once a real category exists the
    /// uncategorized bucket is included at the front, even when empty.
    pub fn visible_categories(&self) -> Option<Vec<&VisibleFlagCategory>> {
        if self.names.len() == 1 {
            return None;
        }

        Some(self.names.iter().map(|name| &self.by_name[name]).collect())
    }
}

impl Default for FlagCategories {
    fn default() -> Self {
        Self::new()
    }
}

/// A named group of flags, in insertion order.
#[derive(Debug, Clone)]
pub struct VisibleFlagCategory {
    name: String,
    flags: Vec<Rc<dyn Flag>>,
}

impl VisibleFlagCategory {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            flags: Vec::new(),
        }
    }

    /// The category name, verbatim.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The flags of this category in insertion order (not sorted by name).
    pub fn flags(&self) -> Vec<&dyn VisibleFlag> {
        self.flags
            .iter()
            .filter_map(|flag| flag.as_visible())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag::{BoolFlag, CategorizableFlag, StringFlag};
    use proptest::prelude::*;

    fn flag(name: &str, category: &str) -> Rc<dyn Flag> {
        Rc::new(BoolFlag::new(name).category(category))
    }

    fn hidden_flag(name: &str, category: &str) -> Rc<dyn Flag> {
        Rc::new(StringFlag::new(name).category(category).hidden(true))
    }

    /// Visible, but has no category.
    #[derive(Debug)]
    struct PlainFlag(&'static str);

    impl Flag for PlainFlag {
        fn names(&self) -> Vec<&str> {
            vec![self.0]
        }

        fn as_visible(&self) -> Option<&dyn VisibleFlag> {
            Some(self)
        }
    }

    impl VisibleFlag for PlainFlag {
        fn is_visible(&self) -> bool {
            true
        }
    }

    /// Has a category, but no visibility.
    #[derive(Debug)]
    struct TaggedFlag(&'static str);

    impl Flag for TaggedFlag {
        fn names(&self) -> Vec<&str> {
            vec![self.0]
        }

        fn as_categorizable(&self) -> Option<&dyn CategorizableFlag> {
            Some(self)
        }
    }

    impl CategorizableFlag for TaggedFlag {
        fn category(&self) -> &str {
            "tagged"
        }
    }

    fn layout(categories: &FlagCategories) -> Option<Vec<(String, Vec<String>)>> {
        categories.visible_categories().map(|view| {
            view.iter()
                .map(|c| {
                    let flags = c.flags().iter().map(|f| f.names()[0].to_string()).collect();
                    (c.name().to_string(), flags)
                })
                .collect()
        })
    }

    #[test]
    fn empty_registry_reports_no_categories() {
        let categories = FlagCategories::new();
        assert!(categories.visible_categories().is_none());
        assert!(FlagCategories::default().visible_categories().is_none());
    }

    #[test]
    fn keeps_first_insertion_order() {
        let (f1, f2, f3) = (flag("f1", "net"), flag("f2", "io"), flag("f3", "net"));
        let mut categories = FlagCategories::new();
        categories.add_flag("net", f1.clone());
        categories.add_flag("io", f2.clone());
        categories.add_flag("net", f3.clone());

        let view = categories.visible_categories().unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(view[0].name(), "");
        assert!(view[0].flags().is_empty());
        assert_eq!(view[1].name(), "net");
        assert_eq!(view[1].flags().len(), 2);
        assert_eq!(view[1].flags()[0].names(), vec!["f1"]);
        assert_eq!(view[1].flags()[1].names(), vec!["f3"]);
        assert_eq!(view[2].name(), "io");
        assert_eq!(view[2].flags()[0].names(), vec!["f2"]);
    }

    #[test]
    fn flags_keep_insertion_order_not_name_order() {
        let mut categories = FlagCategories::new();
        categories.add_flag("out", flag("zeta", "out"));
        categories.add_flag("out", flag("alpha", "out"));

        let view = categories.visible_categories().unwrap();
        let flags = view[1].flags();
        let names: Vec<&str> = flags.iter().map(|f| f.names()[0]).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn uncategorized_flags_alone_still_report_no_categories() {
        let mut categories = FlagCategories::new();
        categories.add_flag("", flag("verbose", ""));
        categories.add_flag("", flag("quiet", ""));

        assert!(categories.visible_categories().is_none());
    }

    #[test]
    fn uncategorized_bucket_accumulates_without_duplicates() {
        let mut categories = FlagCategories::new();
        categories.add_flag("", flag("verbose", ""));
        categories.add_flag("net", flag("port", "net"));
        categories.add_flag("", flag("quiet", ""));

        assert_eq!(
            layout(&categories),
            Some(vec![
                (
                    "".to_string(),
                    vec!["verbose".to_string(), "quiet".to_string()],
                ),
                ("net".to_string(), vec!["port".to_string()]),
            ])
        );
    }

    #[test]
    fn from_flags_keeps_only_visible_categorized_flags() {
        let first = flag("first", "a");
        let fourth = flag("fourth", "a");
        let flags: Vec<Rc<dyn Flag>> = vec![
            first.clone(),
            hidden_flag("second", "b"),
            Rc::new(PlainFlag("third")),
            fourth.clone(),
            Rc::new(TaggedFlag("fifth")),
        ];

        let categories = FlagCategories::from_flags(&flags);
        assert_eq!(
            layout(&categories),
            Some(vec![
                ("".to_string(), vec![]),
                (
                    "a".to_string(),
                    vec!["first".to_string(), "fourth".to_string()],
                ),
            ])
        );
        assert!(Rc::ptr_eq(&categories.by_name["a"].flags[0], &first));
        assert!(Rc::ptr_eq(&categories.by_name["a"].flags[1], &fourth));
    }

    #[test]
    fn from_flags_with_empty_category_stays_uncategorized() {
        let flags = vec![flag("verbose", ""), flag("debug", "")];
        let categories = FlagCategories::from_flags(&flags);

        assert!(categories.visible_categories().is_none());
        assert_eq!(categories.by_name[""].flags.len(), 2);
    }

    #[test]
    fn flags_without_visibility_are_not_projected() {
        let mut categories = FlagCategories::new();
        categories.add_flag("tagged", Rc::new(TaggedFlag("raw")));
        categories.add_flag("tagged", flag("ok", "tagged"));

        let view = categories.visible_categories().unwrap();
        assert_eq!(view[1].flags().len(), 1);
        assert_eq!(view[1].flags()[0].names(), vec!["ok"]);
    }

    fn flag_specs() -> impl Strategy<Value = Vec<(String, bool, bool)>> {
        prop::collection::vec(("[abc]{0,1}", any::<bool>(), any::<bool>()), 0..20)
    }

    fn build(specs: &[(String, bool, bool)]) -> Vec<Rc<dyn Flag>> {
        specs
            .iter()
            .enumerate()
            .map(|(i, (category, hidden, categorized))| -> Rc<dyn Flag> {
                let name = format!("f{i}");
                if *categorized {
                    Rc::new(BoolFlag::new(&name).category(category).hidden(*hidden))
                } else {
                    Rc::new(PlainFlag(if *hidden { "plain-hidden" } else { "plain" }))
                }
            })
            .collect()
    }

    proptest! {
        #[test]
        fn from_flags_matches_manual_registration(specs in flag_specs()) {
            let flags = build(&specs);
            let bulk = FlagCategories::from_flags(&flags);

            let mut manual = FlagCategories::new();
            for flag in &flags {
                if let (Some(c), Some(v)) = (flag.as_categorizable(), flag.as_visible()) {
                    if v.is_visible() {
                        manual.add_flag(c.category(), Rc::clone(flag));
                    }
                }
            }

            prop_assert_eq!(layout(&bulk), layout(&manual));
        }

        #[test]
        fn category_names_are_distinct_and_first_seen(
            ops in prop::collection::vec("[a-e]{0,1}", 0..20)
        ) {
            let mut categories = FlagCategories::new();
            for (i, category) in ops.iter().enumerate() {
                categories.add_flag(category, flag(&format!("f{i}"), category));
            }

            let mut expected = vec![String::new()];
            for category in &ops {
                if !expected.contains(category) {
                    expected.push(category.clone());
                }
            }

            match categories.visible_categories() {
                None => {
                    prop_assert_eq!(expected.len(), 1);
                }
                Some(view) => {
                    let names: Vec<String> = view.iter().map(|c| c.name().to_string()).collect();
                    prop_assert_eq!(names, expected);
                }
            }
            prop_assert_eq!(layout(&categories), layout(&categories));
        }
    }
}
