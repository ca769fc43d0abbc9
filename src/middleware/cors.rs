use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::Config;

/// Builds the CORS layer from the configured allow-lists. A `"*"` entry
/// mirrors the request instead of sending a literal wildcard, which keeps
/// the layer valid when credentials are allowed.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let origins = if is_wildcard(&config.cors_origins) {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(
            config
                .cors_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        )
    };

    let methods = if is_wildcard(&config.cors_allow_methods) {
        AllowMethods::mirror_request()
    } else {
        AllowMethods::list(
            config
                .cors_allow_methods
                .iter()
                .filter_map(|method| method.parse::<Method>().ok()),
        )
    };

    let headers = if is_wildcard(&config.cors_allow_headers) {
        AllowHeaders::mirror_request()
    } else {
        AllowHeaders::list(
            config
                .cors_allow_headers
                .iter()
                .filter_map(|header| header.parse::<HeaderName>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(config.cors_allow_credentials)
}

fn is_wildcard(list: &[String]) -> bool {
    list.iter().any(|entry| entry == "*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_detection() {
        assert!(is_wildcard(&["*".to_string()]));
        assert!(!is_wildcard(&["http://a.example".to_string()]));
        assert!(!is_wildcard(&[]));
    }
}
