//! In-memory `ProductRepository` for handler tests.

use async_trait::async_trait;
use database::mongodb::parse_object_id;
use domain_products::{NewProduct, Product, ProductError, ProductFilter, ProductRepository, ProductResult};
use mongodb::bson::oid::ObjectId;
use std::sync::{Arc, Mutex};

/// Products kept in insertion order. Clones share the same storage.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<Mutex<Vec<Product>>>,
    unavailable: bool,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Behaves like a store that was never connected
    pub fn disconnected() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.products.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    fn is_available(&self) -> bool {
        !self.unavailable
    }

    async fn create(&self, product: NewProduct) -> ProductResult<String> {
        let id = ObjectId::new().to_hex();
        self.products
            .lock()
            .unwrap()
            .push(product.into_product(id.clone()));
        Ok(id)
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        parse_object_id(id).map_err(|_| ProductError::InvalidId(id.to_string()))?;
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| filter.category().is_none_or(|c| p.category == c))
            .take(filter.limit as usize)
            .cloned()
            .collect())
    }

    async fn featured(&self, limit: i64) -> ProductResult<Vec<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|p| p.in_stock)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> ProductResult<u64> {
        Ok(self.len() as u64)
    }
}
