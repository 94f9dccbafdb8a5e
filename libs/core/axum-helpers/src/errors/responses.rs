//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "detail": "price: must be a non-negative number",
        "error": "VALIDATION_ERROR",
        "errors": { "price": ["must be a non-negative number"] }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid id",
    content_type = "application/json",
    example = json!({
        "detail": "Invalid product id",
        "error": "INVALID_ID"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "detail": "Product not found",
        "error": "NOT_FOUND"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "detail": "Database not available",
        "error": "DATABASE_UNAVAILABLE"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
