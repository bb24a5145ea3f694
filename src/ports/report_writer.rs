use crate::domain::{AppError, Product};

/// Port for rendering a sorted product report.
pub trait ReportWriter {
    /// Write one report for `products`, labeled with the criterion that
    /// produced the order.
    fn write_report(&mut self, sorted_by: &str, products: &[Product]) -> Result<(), AppError>;
}
