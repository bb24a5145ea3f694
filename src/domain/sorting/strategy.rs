use std::cmp::Ordering;

use crate::domain::Product;

/// A named, stateless comparison policy over products.
///
/// Identity is the name: the registry keys strategies by it, and two
/// sorters must not share a name within one registry. Implementations
/// reorder the given slice; they never mutate product fields.
pub trait Sorter {
    /// Stable name used as the registry key.
    fn name(&self) -> &str;

    /// Reorder `products` in place according to the policy.
    fn sort(&self, products: &mut [Product]);
}

/// Predicate deciding whether `a` comes before `b` in the output order.
pub type ComesBefore = fn(&Product, &Product) -> bool;

/// Generic comparison strategy: a name plus a comes-before predicate.
///
/// All built-in criteria share this one implementation; the predicate is
/// the only variation point. The underlying sort is stable, so products
/// with equal keys keep their input order.
pub struct ComparatorSorter {
    name: &'static str,
    comes_before: ComesBefore,
}

impl ComparatorSorter {
    /// Create a strategy from a name and a comes-before predicate.
    pub fn new(name: &'static str, comes_before: ComesBefore) -> Self {
        Self { name, comes_before }
    }

    /// Ascending by unit price.
    pub fn price() -> Self {
        Self::new("Price", |a, b| a.price < b.price)
    }

    /// Descending by creation timestamp, most recent first.
    pub fn date() -> Self {
        Self::new("Date", |a, b| a.created_at > b.created_at)
    }

    /// Descending by sales-to-views conversion rate. Products without
    /// views rank as rate 0.
    pub fn conversion() -> Self {
        Self::new("Conversion", |a, b| a.conversion_rate() > b.conversion_rate())
    }

    fn ordering(&self, a: &Product, b: &Product) -> Ordering {
        if (self.comes_before)(a, b) {
            Ordering::Less
        } else if (self.comes_before)(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl Sorter for ComparatorSorter {
    fn name(&self) -> &str {
        self.name
    }

    fn sort(&self, products: &mut [Product]) {
        products.sort_by(|a, b| self.ordering(a, b));
    }
}
