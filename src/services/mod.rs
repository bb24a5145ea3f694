mod catalog_json;
mod report_table;

pub use catalog_json::{JsonCatalogSource, decode_products};
pub use report_table::TableWriter;
