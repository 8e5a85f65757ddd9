use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::Config;

/// Restrict cross-origin callers to the configured origins
pub fn create_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.trim().parse::<HeaderValue>().ok())
        .collect();

    let origins = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-request-id"),
        ])
        .expose_headers([HeaderName::from_static("x-request-id")])
        .allow_credentials(false)
        .max_age(std::time::Duration::from_secs(86400))
}

/// CORS configuration for development (more permissive)
pub fn create_development_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
}

/// Select appropriate CORS layer based on environment
pub fn create_cors_layer_for_config(config: &Config) -> CorsLayer {
    if config.is_development() {
        create_development_cors_layer()
    } else {
        create_cors_layer(&config.allowed_origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    async fn preflight(layer: CorsLayer, origin: &str) -> Option<String> {
        let app = Router::new().route("/", get(|| async { "ok" })).layer(layer);
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/")
                    .header("origin", origin)
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_listed_origin_allowed() {
        let layer = create_cors_layer(&["https://app.example.com".to_string()]);
        assert_eq!(
            preflight(layer, "https://app.example.com").await.as_deref(),
            Some("https://app.example.com")
        );
    }

    #[tokio::test]
    async fn test_unlisted_origin_rejected() {
        let layer = create_cors_layer(&["https://app.example.com".to_string()]);
        assert_eq!(preflight(layer, "https://evil.example.com").await, None);
    }

    #[tokio::test]
    async fn test_no_valid_origins_allows_any() {
        let layer = create_cors_layer(&["bad\nvalue".to_string()]);
        assert_eq!(
            preflight(layer, "https://anywhere.example").await.as_deref(),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_development_config_is_permissive() {
        let config = Config::default();
        let layer = create_cors_layer_for_config(&config);
        assert_eq!(
            preflight(layer, "https://anywhere.example").await.as_deref(),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_production_config_uses_allow_list() {
        let config = Config {
            environment: "production".to_string(),
            allowed_origins: vec!["https://app.example.com".to_string()],
            ..Default::default()
        };
        let layer = create_cors_layer_for_config(&config);
        assert_eq!(preflight(layer, "https://other.example").await, None);
    }
}
