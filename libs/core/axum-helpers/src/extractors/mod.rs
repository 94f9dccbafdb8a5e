//! Extractors that validate their payload and reject with an [`AppError`](crate::AppError).

pub mod validated_json;
pub mod validated_query;

pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
