use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use crate::domain::{AppError, Product};
use crate::ports::ProductSource;

/// Decode a product catalog from a reader holding a JSON array.
pub fn decode_products<R: Read>(reader: R) -> Result<Vec<Product>, AppError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Catalog source backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    /// Create a source reading from `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl ProductSource for JsonCatalogSource {
    fn load(&self) -> Result<Vec<Product>, AppError> {
        let file = File::open(&self.path).map_err(|source| AppError::FileOpen {
            path: self.path.display().to_string(),
            source,
        })?;
        decode_products(BufReader::new(file))
    }
}
