mod product_source;
mod report_writer;

pub use product_source::ProductSource;
pub use report_writer::ReportWriter;
