use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// CORS layer restricted to `allowed_origins`.
///
/// Allows GET, POST and OPTIONS with the `Content-Type` and `Accept`
/// headers, and caches preflight results for an hour.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Allows any origin, method and header.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Build the CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// The variable holds comma-separated origins, for example
/// `http://localhost:3000,https://shop.example.com`. When it is unset or
/// blank every origin is allowed. An unparsable origin is an error.
pub fn cors_layer_from_env() -> io::Result<CorsLayer> {
    let raw = std::env::var("CORS_ALLOWED_ORIGIN").unwrap_or_default();

    let allowed_origins = parse_origins(&raw)?;
    if allowed_origins.is_empty() {
        info!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
        return Ok(create_permissive_cors_layer());
    }

    info!("CORS configured with allowed origins: {}", raw);
    Ok(create_cors_layer(allowed_origins))
}

fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_splits_and_trims() {
        let origins = parse_origins(" http://localhost:3000 , https://shop.example.com,").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "http://localhost:3000");
        assert_eq!(origins[1], "https://shop.example.com");
    }

    #[test]
    fn test_parse_origins_rejects_invalid_header_value() {
        assert!(parse_origins("http://bad\norigin").is_err());
    }

    #[test]
    fn test_cors_layer_from_env_unset_is_permissive() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            assert!(cors_layer_from_env().is_ok());
        });
    }

    #[test]
    fn test_cors_layer_from_env_invalid_fails() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("http://ok.example.com,\u{7f}"), || {
            assert!(cors_layer_from_env().is_err());
        });
    }
}
