use std::io::Write;

use crate::domain::{AppError, Product};
use crate::ports::ReportWriter;

/// Tabular report renderer with a fixed column contract: id, name, price
/// (2 decimals), creation date (YYYY-MM-DD), sales, views, and conversion
/// rate (4 decimals).
pub struct TableWriter<W: Write> {
    out: W,
}

impl<W: Write> TableWriter<W> {
    /// Render reports into `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the writer and return the underlying output.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for TableWriter<W> {
    fn write_report(&mut self, sorted_by: &str, products: &[Product]) -> Result<(), AppError> {
        writeln!(self.out, "Sorted by {}", sorted_by)?;
        writeln!(self.out, "ID\tName\t\t\tPrice\tCreated\t\tSales\tViews\tConversion Rate")?;
        writeln!(self.out, "{}", "-".repeat(82))?;
        for product in products {
            writeln!(
                self.out,
                "{}\t{:<20}\t${:.2}\t{}\t{}\t{}\t{:.4}",
                product.id,
                product.name,
                product.price,
                product.created_at.format("%Y-%m-%d"),
                product.sale_count,
                product.view_count,
                product.conversion_rate(),
            )?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}
