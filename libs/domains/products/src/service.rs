//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, FeaturedQuery, NewProduct, Product, ProductFilter};
use crate::repository::ProductRepository;

/// Product operations over any [`ProductRepository`].
///
/// Inputs are validated first, then store availability is checked, so a
/// disconnected store is never called.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub fn is_available(&self) -> bool {
        self.repository.is_available()
    }

    fn ensure_available(&self) -> ProductResult<()> {
        if self.repository.is_available() {
            Ok(())
        } else {
            Err(ProductError::StoreUnavailable)
        }
    }

    /// Validate and insert a product, returning the new id
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<String> {
        let product = NewProduct::try_from(input)?;
        self.ensure_available()?;
        self.repository.create(product).await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.ensure_available()?;
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        filter.validate()?;
        self.ensure_available()?;
        self.repository.list(filter).await
    }

    /// In-stock products, most recently created first
    #[instrument(skip(self))]
    pub async fn featured_products(&self, query: FeaturedQuery) -> ProductResult<Vec<Product>> {
        query.validate()?;
        self.ensure_available()?;
        self.repository.featured(query.limit).await
    }

    #[instrument(skip(self))]
    pub async fn count_products(&self) -> ProductResult<u64> {
        self.ensure_available()?;
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;

    fn lamp() -> CreateProduct {
        CreateProduct {
            title: "Lumen Desk Lamp".to_string(),
            description: None,
            price: 89.0,
            category: "home".to_string(),
            in_stock: true,
        }
    }

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            title: "Lumen Desk Lamp".to_string(),
            description: None,
            price: 89.0,
            category: "home".to_string(),
            in_stock: true,
        }
    }

    #[tokio::test]
    async fn test_create_product_returns_id() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_is_available().return_const(true);
        mock_repo
            .expect_create()
            .withf(|p| p.title() == "Lumen Desk Lamp" && p.in_stock())
            .times(1)
            .returning(|_| Ok("65f1c2d3e4a5b6c7d8e9f0a1".to_string()));

        let service = ProductService::new(mock_repo);
        let id = service.create_product(lamp()).await.unwrap();

        assert_eq!(id, "65f1c2d3e4a5b6c7d8e9f0a1");
    }

    #[tokio::test]
    async fn test_create_product_validates_before_touching_store() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_is_available().never();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let input = CreateProduct {
            price: -5.0,
            ..lamp()
        };

        let err = service.create_product(input).await.unwrap_err();
        assert!(matches!(err, ProductError::Validation(msg) if msg.contains("price")));
    }

    #[tokio::test]
    async fn test_unavailable_store_is_never_called() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_is_available().return_const(false);
        mock_repo.expect_create().never();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_list().never();
        mock_repo.expect_featured().never();
        mock_repo.expect_count().never();

        let service = ProductService::new(mock_repo);

        assert!(matches!(
            service.create_product(lamp()).await,
            Err(ProductError::StoreUnavailable)
        ));
        assert!(matches!(
            service.get_product("not-an-id").await,
            Err(ProductError::StoreUnavailable)
        ));
        assert!(matches!(
            service.list_products(ProductFilter::default()).await,
            Err(ProductError::StoreUnavailable)
        ));
        assert!(matches!(
            service.featured_products(FeaturedQuery::default()).await,
            Err(ProductError::StoreUnavailable)
        ));
        assert!(matches!(
            service.count_products().await,
            Err(ProductError::StoreUnavailable)
        ));
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_is_available().return_const(true);
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service
            .get_product("65f1c2d3e4a5b6c7d8e9f0a1")
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::NotFound(id) if id == "65f1c2d3e4a5b6c7d8e9f0a1"));
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_is_available().return_const(true);
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Some(product(id))));

        let service = ProductService::new(mock_repo);
        let found = service.get_product("65f1c2d3e4a5b6c7d8e9f0a1").await.unwrap();

        assert_eq!(found.id, "65f1c2d3e4a5b6c7d8e9f0a1");
    }

    #[tokio::test]
    async fn test_list_products_rejects_out_of_range_limit() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_list().never();

        let service = ProductService::new(mock_repo);
        for limit in [0, 101] {
            let filter = ProductFilter {
                category: None,
                limit,
            };
            let err = service.list_products(filter).await.unwrap_err();
            assert!(matches!(err, ProductError::Validation(msg) if msg.starts_with("limit")));
        }
    }

    #[tokio::test]
    async fn test_featured_passes_limit() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_is_available().return_const(true);
        mock_repo
            .expect_featured()
            .with(mockall::predicate::eq(3))
            .returning(|_| Ok(vec![product("65f1c2d3e4a5b6c7d8e9f0a1")]));

        let service = ProductService::new(mock_repo);
        let featured = service
            .featured_products(FeaturedQuery { limit: 3 })
            .await
            .unwrap();

        assert_eq!(featured.len(), 1);
    }
}
