use crate::ports::{ProductSource, ReportWriter};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ProductSource, W: ReportWriter> {
    source: S,
    writer: W,
}

impl<S: ProductSource, W: ReportWriter> AppContext<S, W> {
    /// Create a new application context.
    pub fn new(source: S, writer: W) -> Self {
        Self { source, writer }
    }

    /// Get a reference to the product source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the report writer.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the context and return the report writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
