//! Collection-agnostic document access over an optional MongoDB connection.

use futures_util::TryStreamExt;
use mongodb::{
    Database,
    bson::{self, Bson, DateTime, Document, doc, oid::ObjectId},
    options::FindOptions,
};
use serde::Serialize;
use tracing::{debug, instrument};

/// Errors surfaced by [`DocumentStore`]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database not available")]
    Unavailable,

    #[error("Invalid document id: {0}")]
    InvalidId(String),

    #[error("No document with id {id} in collection {collection}")]
    NotFound { collection: String, id: String },

    #[error("Failed to serialize document: {0}")]
    Serialization(#[from] bson::ser::Error),

    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Parse a 24 character hex string into an [`ObjectId`].
pub fn parse_object_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

/// Handle to the application database.
///
/// Built once at startup and shared by reference. A store created with
/// [`DocumentStore::disconnected`] fails every operation with
/// [`StoreError::Unavailable`] without doing any I/O.
#[derive(Clone, Debug)]
pub struct DocumentStore {
    db: Option<Database>,
}

impl DocumentStore {
    pub fn new(db: Database) -> Self {
        Self { db: Some(db) }
    }

    pub fn disconnected() -> Self {
        Self { db: None }
    }

    pub fn is_available(&self) -> bool {
        self.db.is_some()
    }

    pub fn database(&self) -> StoreResult<&Database> {
        self.db.as_ref().ok_or(StoreError::Unavailable)
    }

    pub fn database_name(&self) -> Option<&str> {
        self.db.as_ref().map(Database::name)
    }

    /// Insert `record` into `collection`, stamping `created_at` and
    /// `updated_at`. Returns the new id as a string.
    #[instrument(skip(self, record))]
    pub async fn create_document<T>(&self, collection: &str, record: &T) -> StoreResult<String>
    where
        T: Serialize + ?Sized,
    {
        let db = self.database()?;

        let mut document = bson::to_document(record)?;
        let now = DateTime::now();
        document.insert("created_at", now);
        document.insert("updated_at", now);

        let result = db
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        };

        debug!(%id, "Document inserted");
        Ok(id)
    }

    /// Up to `limit` documents matching `filter`, in natural order.
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> StoreResult<Vec<Document>> {
        self.find_documents(collection, filter, None, limit).await
    }

    /// Up to `limit` documents matching `filter`, optionally sorted.
    #[instrument(skip(self))]
    pub async fn find_documents(
        &self,
        collection: &str,
        filter: Document,
        sort: Option<Document>,
        limit: i64,
    ) -> StoreResult<Vec<Document>> {
        let db = self.database()?;

        let options = FindOptions::builder().limit(limit).sort(sort).build();

        let cursor = db
            .collection::<Document>(collection)
            .find(filter)
            .with_options(options)
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        debug!(count = documents.len(), "Documents fetched");
        Ok(documents)
    }

    /// Fetch one document by its hex id.
    ///
    /// Availability is checked before the id is parsed.
    #[instrument(skip(self))]
    pub async fn get_document_by_id(&self, collection: &str, id: &str) -> StoreResult<Document> {
        let db = self.database()?;
        let oid = parse_object_id(id)?;

        db.collection::<Document>(collection)
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })
    }

    #[instrument(skip(self))]
    pub async fn count_documents(&self, collection: &str, filter: Document) -> StoreResult<u64> {
        let db = self.database()?;
        let count = db
            .collection::<Document>(collection)
            .count_documents(filter)
            .await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    pub async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        let db = self.database()?;
        Ok(db.list_collection_names().await?)
    }
}
