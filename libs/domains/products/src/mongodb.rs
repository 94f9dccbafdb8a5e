//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use database::mongodb::{DocumentStore, StoreError};
use mongodb::bson::{self, doc, Document};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, ProductDocument, ProductFilter};
use crate::repository::ProductRepository;

/// Collection holding product documents
pub const PRODUCT_COLLECTION: &str = "product";

/// Products stored through the shared [`DocumentStore`]
#[derive(Clone)]
pub struct MongoProductRepository {
    store: DocumentStore,
}

impl MongoProductRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Newest first. `created_at` has millisecond precision, so documents
    /// inserted in the same millisecond fall back to `_id`, which increases
    /// with every insert from this process.
    fn featured_sort() -> Document {
        doc! { "created_at": -1, "_id": -1 }
    }

    fn build_filter(filter: &ProductFilter) -> Document {
        let mut doc = doc! {};
        if let Some(category) = filter.category() {
            doc.insert("category", category);
        }
        doc
    }

    fn decode_all(documents: Vec<Document>) -> ProductResult<Vec<Product>> {
        documents
            .into_iter()
            .map(|d| -> ProductResult<Product> {
                Ok(bson::from_document::<ProductDocument>(d)?.into())
            })
            .collect()
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    fn is_available(&self) -> bool {
        self.store.is_available()
    }

    #[instrument(skip(self, product), fields(title = %product.title()))]
    async fn create(&self, product: NewProduct) -> ProductResult<String> {
        let id = self.store.create_document(PRODUCT_COLLECTION, &product).await?;

        tracing::info!(product_id = %id, "Product created successfully");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        match self.store.get_document_by_id(PRODUCT_COLLECTION, id).await {
            Ok(document) => Ok(Some(bson::from_document::<ProductDocument>(document)?.into())),
            Err(StoreError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let documents = self
            .store
            .get_documents(PRODUCT_COLLECTION, Self::build_filter(&filter), filter.limit)
            .await?;

        Self::decode_all(documents)
    }

    #[instrument(skip(self))]
    async fn featured(&self, limit: i64) -> ProductResult<Vec<Product>> {
        let documents = self
            .store
            .find_documents(
                PRODUCT_COLLECTION,
                doc! { "in_stock": true },
                Some(Self::featured_sort()),
                limit,
            )
            .await?;

        Self::decode_all(documents)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> ProductResult<u64> {
        Ok(self.store.count_documents(PRODUCT_COLLECTION, doc! {}).await?)
    }
}
