use crate::domain::{AppError, Product};

/// Port for loading a product catalog from some source.
pub trait ProductSource {
    /// Produce the full list of products, or fail with the source's error.
    fn load(&self) -> Result<Vec<Product>, AppError>;
}
