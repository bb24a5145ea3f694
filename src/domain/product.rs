use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A catalog item as loaded from the JSON source.
///
/// `id`, `name`, `price`, and `created_at` are required at decode time;
/// `sale_count` and `view_count` default to 0 when absent. Unknown fields
/// are ignored. Fields are immutable after load: sorting reorders
/// products, it never rewrites them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Identifier, unique within a loaded catalog.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Unit price, non-negative.
    pub price: f64,
    /// Creation timestamp. Input may carry any offset; values are
    /// normalized to UTC and compared as instants.
    pub created_at: DateTime<Utc>,
    /// Number of completed sales.
    #[serde(default)]
    pub sale_count: u64,
    /// Number of product page views.
    #[serde(default)]
    pub view_count: u64,
}

impl Product {
    /// Sales-to-views ratio, 0.0 when the product has no views.
    ///
    /// Never stored; recomputed on every call.
    pub fn conversion_rate(&self) -> f64 {
        if self.view_count > 0 {
            self.sale_count as f64 / self.view_count as f64
        } else {
            0.0
        }
    }
}
