use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, ProductFilter};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Whether a store connection exists. Checked before every operation.
    fn is_available(&self) -> bool;

    /// Insert a validated product and return its id
    async fn create(&self, product: NewProduct) -> ProductResult<String>;

    /// Get a product by id. A malformed id is `ProductError::InvalidId`.
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Up to `filter.limit` products, optionally restricted to one category
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Up to `limit` in-stock products, newest first
    async fn featured(&self, limit: i64) -> ProductResult<Vec<Product>>;

    /// Total number of stored products
    async fn count(&self) -> ProductResult<u64>;
}
