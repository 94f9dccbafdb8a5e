use mongodb::bson::{oid::ObjectId, Bson};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::ProductError;

pub const DEFAULT_LIST_LIMIT: i64 = 24;
pub const MAX_LIST_LIMIT: i64 = 100;
pub const DEFAULT_FEATURED_LIMIT: i64 = 6;
pub const MAX_FEATURED_LIMIT: i64 = 24;

/// Product as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// 24 character hex ObjectId
    #[schema(example = "65f1c2d3e4a5b6c7d8e9f0a1")]
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Request body for creating a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(example = "Aurora Pro Headphones")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "must be a non-negative number"))]
    #[schema(example = 199.99)]
    pub price: f64,
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(example = "audio")]
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

/// A product that passed validation and is ready to be stored.
///
/// Only obtainable through `NewProduct::try_from(CreateProduct)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    title: String,
    description: Option<String>,
    price: f64,
    category: String,
    in_stock: bool,
}

impl NewProduct {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    /// API view of this record once the store has assigned `id`.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            in_stock: self.in_stock,
        }
    }
}

impl TryFrom<CreateProduct> for NewProduct {
    type Error = ProductError;

    fn try_from(input: CreateProduct) -> Result<Self, Self::Error> {
        input.validate()?;

        // NaN slips through range checks.
        if !input.price.is_finite() {
            return Err(ProductError::Validation(
                "price: must be a non-negative number".to_string(),
            ));
        }

        Ok(Self {
            title: input.title,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
        })
    }
}

/// Product as stored in the `product` collection.
///
/// Decoding is lenient: a missing or integer `price` becomes a float, a
/// missing `in_stock` is `true` and an integer `in_stock` is `!= 0`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,
    pub category: String,
    #[serde(default = "default_in_stock", deserialize_with = "lenient_in_stock")]
    pub in_stock: bool,
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            title: doc.title,
            description: doc.description,
            price: doc.price,
            category: doc.category,
            in_stock: doc.in_stock,
        }
    }
}

fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Bson>::deserialize(deserializer)? {
        None | Some(Bson::Null) => Ok(0.0),
        Some(Bson::Double(v)) => Ok(v),
        Some(Bson::Int32(v)) => Ok(f64::from(v)),
        Some(Bson::Int64(v)) => Ok(v as f64),
        Some(Bson::String(s)) => s.trim().parse().map_err(D::Error::custom),
        Some(other) => Err(D::Error::custom(format!(
            "price must be numeric, found {:?}",
            other.element_type()
        ))),
    }
}

fn lenient_in_stock<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Bson>::deserialize(deserializer)? {
        None | Some(Bson::Null) => Ok(true),
        Some(Bson::Boolean(v)) => Ok(v),
        Some(Bson::Int32(v)) => Ok(v != 0),
        Some(Bson::Int64(v)) => Ok(v != 0),
        Some(other) => Err(D::Error::custom(format!(
            "in_stock must be a boolean, found {:?}",
            other.element_type()
        ))),
    }
}

fn default_in_stock() -> bool {
    true
}

/// Query parameters for `GET /api/products`
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Exact-match category filter
    pub category: Option<String>,
    /// Maximum number of results (1-100)
    #[serde(default = "default_list_limit")]
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100)]
    pub limit: i64,
}

impl ProductFilter {
    /// Category to filter on; an empty value means no filter.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category: None,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

/// Query parameters for `GET /api/products/featured`
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeaturedQuery {
    /// Maximum number of results (1-24)
    #[serde(default = "default_featured_limit")]
    #[validate(range(min = 1, max = 24, message = "must be between 1 and 24"))]
    #[param(minimum = 1, maximum = 24)]
    pub limit: i64,
}

impl Default for FeaturedQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_FEATURED_LIMIT,
        }
    }
}

fn default_list_limit() -> i64 {
    DEFAULT_LIST_LIMIT
}

fn default_featured_limit() -> i64 {
    DEFAULT_FEATURED_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    fn create(title: &str, price: f64, category: &str) -> CreateProduct {
        CreateProduct {
            title: title.to_string(),
            description: None,
            price,
            category: category.to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn test_new_product_from_valid_input() {
        let product = NewProduct::try_from(create("Lamp", 0.0, "home")).unwrap();
        assert_eq!(product.title(), "Lamp");
        assert_eq!(product.price(), 0.0);
        assert!(product.in_stock());
        assert!(product.description().is_none());
    }

    #[test]
    fn test_new_product_names_every_bad_field() {
        let err = NewProduct::try_from(create("", -1.0, "")).unwrap_err();
        match err {
            ProductError::Validation(msg) => assert_eq!(
                msg,
                "category: must not be empty; price: must be a non-negative number; title: must not be empty"
            ),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_new_product_rejects_nan_price() {
        let err = NewProduct::try_from(create("Lamp", f64::NAN, "home")).unwrap_err();
        assert!(matches!(err, ProductError::Validation(msg) if msg.starts_with("price")));
    }

    #[test]
    fn test_create_product_defaults() {
        let input: CreateProduct =
            serde_json::from_str(r#"{"title":"Lamp","price":10,"category":"home"}"#).unwrap();
        assert!(input.in_stock);
        assert!(input.description.is_none());
        assert_eq!(input.price, 10.0);
    }

    #[test]
    fn test_new_product_serializes_description_as_null() {
        let product = NewProduct::try_from(create("Lamp", 5.0, "home")).unwrap();
        let document = bson::to_document(&product).unwrap();
        assert_eq!(document.get("description"), Some(&Bson::Null));
        assert_eq!(document.get_f64("price").unwrap(), 5.0);
        assert!(document.get_bool("in_stock").unwrap());
    }

    #[test]
    fn test_product_document_lenient_decoding() {
        let oid = ObjectId::new();
        let document = doc! { "_id": oid, "title": "Old", "category": "legacy", "price": 12 };

        let decoded: ProductDocument = bson::from_document(document).unwrap();
        assert_eq!(decoded.price, 12.0);
        assert!(decoded.in_stock);
        assert!(decoded.description.is_none());

        let product = Product::from(decoded);
        assert_eq!(product.id, oid.to_hex());
    }

    #[test]
    fn test_product_document_integer_in_stock() {
        for (stored, expected) in [(Bson::Int32(1), true), (Bson::Int32(0), false), (Bson::Int64(2), true)] {
            let document = doc! {
                "_id": ObjectId::new(),
                "title": "Legacy",
                "category": "misc",
                "price": 1.0,
                "in_stock": stored,
            };
            let decoded: ProductDocument = bson::from_document(document).unwrap();
            assert_eq!(decoded.in_stock, expected);
        }
    }

    #[test]
    fn test_product_document_null_in_stock_is_true() {
        let document = doc! {
            "_id": ObjectId::new(),
            "title": "Legacy",
            "category": "misc",
            "in_stock": Bson::Null,
        };
        let decoded: ProductDocument = bson::from_document(document).unwrap();
        assert!(decoded.in_stock);
    }

    #[test]
    fn test_product_document_text_in_stock_fails() {
        let document = doc! {
            "_id": ObjectId::new(),
            "title": "Legacy",
            "category": "misc",
            "in_stock": "yes",
        };
        let result: Result<ProductDocument, _> = bson::from_document(document);
        assert!(result.is_err());
    }

    #[test]
    fn test_product_document_missing_price_is_zero() {
        let document = doc! { "_id": ObjectId::new(), "title": "Free", "category": "misc" };
        let decoded: ProductDocument = bson::from_document(document).unwrap();
        assert_eq!(decoded.price, 0.0);
    }

    #[test]
    fn test_product_document_missing_title_fails() {
        let document = doc! { "_id": ObjectId::new(), "category": "misc", "price": 1.0 };
        let result: Result<ProductDocument, _> = bson::from_document(document);
        assert!(result.is_err());
    }

    #[test]
    fn test_filter_defaults_and_bounds() {
        assert_eq!(ProductFilter::default().limit, 24);
        assert_eq!(FeaturedQuery::default().limit, 6);

        let too_big = ProductFilter {
            category: None,
            limit: 101,
        };
        assert!(too_big.validate().is_err());

        let featured_too_big = FeaturedQuery { limit: 25 };
        assert!(featured_too_big.validate().is_err());
    }

    #[test]
    fn test_filter_empty_category_is_no_filter() {
        let filter = ProductFilter {
            category: Some(String::new()),
            limit: 24,
        };
        assert!(filter.category().is_none());
    }
}
