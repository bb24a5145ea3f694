use crate::domain::Product;
use crate::domain::sorting::Sorter;

/// Holder of the currently active sort strategy.
///
/// A strategy is required at construction, so a sort can never run
/// unbound. Swapping a strategy in affects subsequent sort calls only.
pub struct SortContext<'a> {
    strategy: &'a dyn Sorter,
}

impl<'a> SortContext<'a> {
    /// Bind the initial strategy.
    pub fn new(strategy: &'a dyn Sorter) -> Self {
        Self { strategy }
    }

    /// Replace the active strategy.
    pub fn set_strategy(&mut self, strategy: &'a dyn Sorter) {
        self.strategy = strategy;
    }

    /// Sort `products` in place using the active strategy.
    pub fn sort(&self, products: &mut [Product]) {
        self.strategy.sort(products);
    }
}
