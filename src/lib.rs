//! shelfsort: Sort product catalogs with pluggable, name-registered
//! ranking strategies and print one tabular report per criterion.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::io;
use std::path::Path;

use app::AppContext;
use app::commands::{report, strategies};
use domain::SorterRegistry;
use services::{JsonCatalogSource, TableWriter};

pub use domain::{AppError, Product};

/// Catalog filename resolved against the working directory when no path
/// is given.
pub const DEFAULT_CATALOG: &str = "products.json";

/// Built-in criteria names, in report order.
pub const DEFAULT_CRITERIA: [&str; 3] = ["Price", "Date", "Conversion"];

/// Load a catalog and print one sorted report per requested criterion.
///
/// `file` defaults to `products.json` in the working directory; an empty
/// `criteria` slice means the built-in Price, Date, Conversion order.
pub fn report(file: Option<&Path>, criteria: &[String]) -> Result<(), AppError> {
    let path = file.unwrap_or(Path::new(DEFAULT_CATALOG));
    let source = JsonCatalogSource::new(path);
    let writer = TableWriter::new(io::stdout());
    let mut ctx = AppContext::new(source, writer);

    let criteria: Vec<&str> = if criteria.is_empty() {
        DEFAULT_CRITERIA.to_vec()
    } else {
        criteria.iter().map(String::as_str).collect()
    };

    report::execute(&mut ctx, &criteria)
}

/// Print the registered strategy names, one per line.
pub fn list_strategies() -> Result<(), AppError> {
    let registry = SorterRegistry::builtin();
    for name in strategies::names(&registry) {
        println!("{}", name);
    }
    Ok(())
}
