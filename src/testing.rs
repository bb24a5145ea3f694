//! Shared fixtures and port doubles for unit tests.

use std::io;

use chrono::{TimeZone, Utc};

use crate::domain::{AppError, Product};
use crate::ports::ProductSource;

/// JSON form of the three-product catalog used across tests.
pub(crate) const SAMPLE_CATALOG_JSON: &str = r#"[
    {
        "id": 1,
        "name": "Alabaster Table",
        "price": 12.99,
        "created_at": "2019-01-04T00:00:00Z",
        "sale_count": 32,
        "view_count": 730
    },
    {
        "id": 2,
        "name": "Zebra Table",
        "price": 44.49,
        "created_at": "2012-01-04T00:00:00Z",
        "sale_count": 301,
        "view_count": 3279
    },
    {
        "id": 3,
        "name": "Coffee Table",
        "price": 10.00,
        "created_at": "2014-05-28T00:00:00Z",
        "sale_count": 1048,
        "view_count": 20123
    }
]"#;

/// The three-product catalog, in file order.
pub(crate) fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Alabaster Table".to_string(),
            price: 12.99,
            created_at: Utc.with_ymd_and_hms(2019, 1, 4, 0, 0, 0).unwrap(),
            sale_count: 32,
            view_count: 730,
        },
        Product {
            id: 2,
            name: "Zebra Table".to_string(),
            price: 44.49,
            created_at: Utc.with_ymd_and_hms(2012, 1, 4, 0, 0, 0).unwrap(),
            sale_count: 301,
            view_count: 3279,
        },
        Product {
            id: 3,
            name: "Coffee Table".to_string(),
            price: 10.00,
            created_at: Utc.with_ymd_and_hms(2014, 5, 28, 0, 0, 0).unwrap(),
            sale_count: 1048,
            view_count: 20123,
        },
    ]
}

/// Minimal product with the given id, name, and price.
pub(crate) fn product_named(id: u64, name: &str, price: f64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        sale_count: 0,
        view_count: 0,
    }
}

/// In-memory product source double.
pub(crate) struct StaticSource {
    products: Option<Vec<Product>>,
}

impl StaticSource {
    /// Source yielding a clone of `products` on every load.
    pub(crate) fn new(products: Vec<Product>) -> Self {
        Self { products: Some(products) }
    }

    /// Source that fails every load with a `FileOpen` error.
    pub(crate) fn failing() -> Self {
        Self { products: None }
    }
}

impl ProductSource for StaticSource {
    fn load(&self) -> Result<Vec<Product>, AppError> {
        match &self.products {
            Some(products) => Ok(products.clone()),
            None => Err(AppError::FileOpen {
                path: "static".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "static source set to fail"),
            }),
        }
    }
}
