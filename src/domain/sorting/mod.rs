mod context;
mod registry;
mod strategy;

pub use context::SortContext;
pub use registry::SorterRegistry;
pub use strategy::{ComesBefore, ComparatorSorter, Sorter};
