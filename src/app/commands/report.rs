//! Report command: sort the catalog by each requested criterion and
//! write one table per criterion.

use crate::app::AppContext;
use crate::domain::{AppError, SortContext, SorterRegistry};
use crate::ports::{ProductSource, ReportWriter};

/// Load the catalog once, then sort and report per criterion, in the
/// requested order.
///
/// The run halts at the first criterion whose name is not registered;
/// reports already written stay written.
pub fn execute<S: ProductSource, W: ReportWriter>(
    ctx: &mut AppContext<S, W>,
    criteria: &[&str],
) -> Result<(), AppError> {
    let mut products = ctx.source().load()?;
    let registry = SorterRegistry::builtin();

    for &criterion in criteria {
        let strategy = registry
            .lookup(criterion)
            .ok_or_else(|| AppError::StrategyNotFound(criterion.to_string()))?;

        SortContext::new(strategy).sort(&mut products);
        ctx.writer_mut().write_report(strategy.name(), &products)?;
    }

    Ok(())
}
