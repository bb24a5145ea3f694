use std::collections::HashMap;

use crate::domain::sorting::{ComparatorSorter, Sorter};

/// Name-to-strategy mapping for sort criteria.
///
/// Registration keys a strategy by its own reported name; registering a
/// second strategy under an existing name silently replaces the first
/// (last write wins). Iteration order over the backing map is
/// unspecified, so callers may only rely on set membership.
#[derive(Default)]
pub struct SorterRegistry {
    strategies: HashMap<String, Box<dyn Sorter>>,
}

impl SorterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { strategies: HashMap::new() }
    }

    /// Registry pre-populated with the built-in criteria: Price, Date,
    /// and Conversion.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ComparatorSorter::price()));
        registry.register(Box::new(ComparatorSorter::date()));
        registry.register(Box::new(ComparatorSorter::conversion()));
        registry
    }

    /// Insert `strategy` under its reported name, replacing any prior
    /// entry with that name.
    pub fn register(&mut self, strategy: Box<dyn Sorter>) {
        self.strategies.insert(strategy.name().to_string(), strategy);
    }

    /// Look up a strategy by exact name. Absence is not an error.
    pub fn lookup(&self, name: &str) -> Option<&dyn Sorter> {
        self.strategies.get(name).map(|s| s.as_ref())
    }

    /// All registered strategies, in unspecified order.
    pub fn all(&self) -> Vec<&dyn Sorter> {
        self.strategies.values().map(|s| s.as_ref()).collect()
    }
}
