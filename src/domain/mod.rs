pub mod error;
pub mod product;
pub mod sorting;

pub use error::AppError;
pub use product::Product;
pub use sorting::{ComparatorSorter, SortContext, Sorter, SorterRegistry};
