use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Builds the CORS layer from the configured allow-list.
///
/// `https://*.vercel.app` accepts any single subdomain label of `vercel.app`
/// over https; every other entry must match exactly.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let patterns = allowed_origins.to_vec();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            origin
                .to_str()
                .map(|origin| patterns.iter().any(|p| origin_matches(p, origin)))
                .unwrap_or(false)
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

fn origin_matches(pattern: &str, origin: &str) -> bool {
    let Some((scheme, host_pattern)) = pattern.split_once("://") else {
        return pattern == origin;
    };

    match host_pattern.strip_prefix("*.") {
        Some(suffix) => {
            let Some(host) = origin.strip_prefix(scheme).and_then(|o| o.strip_prefix("://")) else {
                return false;
            };
            match host.strip_suffix(suffix).and_then(|h| h.strip_suffix('.')) {
                Some(label) => !label.is_empty() && !label.contains('.') && !label.contains('/'),
                None => false,
            }
        }
        None => pattern == origin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_origin() {
        assert!(origin_matches("http://localhost:5173", "http://localhost:5173"));
        assert!(!origin_matches("http://localhost:5173", "http://localhost:3000"));
    }

    #[test]
    fn test_wildcard_subdomain() {
        assert!(origin_matches("https://*.vercel.app", "https://moda.vercel.app"));
        assert!(!origin_matches("https://*.vercel.app", "http://moda.vercel.app"));
        assert!(!origin_matches("https://*.vercel.app", "https://vercel.app"));
        assert!(!origin_matches("https://*.vercel.app", "https://a.b.vercel.app"));
        assert!(!origin_matches("https://*.vercel.app", "https://evilvercel.app"));
    }
}
