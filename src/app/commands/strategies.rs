//! Strategy listing command.

use crate::domain::SorterRegistry;

/// Registered strategy names, sorted for display.
///
/// Registry iteration order is unspecified, so a stable display order is
/// imposed here.
pub fn names(registry: &SorterRegistry) -> Vec<String> {
    let mut names: Vec<String> =
        registry.all().into_iter().map(|s| s.name().to_string()).collect();
    names.sort();
    names
}
