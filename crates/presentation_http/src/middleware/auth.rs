//! API key authentication middleware
//!
//! Every `/api` route requires the `X-API-Key` header to carry the single
//! configured shared secret. The comparison is constant-time; a missing or
//! wrong key is rejected before any handler logic runs. When no key is
//! configured the gate rejects everything rather than running open.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use tower::{Layer, Service};
use tracing::{debug, warn};

use crate::error::ApiError;

/// The header name carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Layer that applies API key authentication
#[derive(Clone, Debug)]
pub struct ApiKeyAuthLayer {
    /// The configured shared secret, if any
    api_key: Arc<Option<SecretString>>,
    /// Paths that should be excluded from authentication, matched exactly
    excluded_paths: Vec<String>,
}

impl ApiKeyAuthLayer {
    /// Create an auth layer guarding everything except `/health`
    #[must_use]
    pub fn new(api_key: Option<SecretString>) -> Self {
        if api_key.is_none() {
            warn!("No API key configured; all protected requests will be rejected");
        }
        Self {
            api_key: Arc::new(api_key),
            excluded_paths: vec!["/health".to_string()],
        }
    }
}

impl<S> Layer<S> for ApiKeyAuthLayer {
    type Service = ApiKeyAuth<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ApiKeyAuth {
            inner,
            api_key: Arc::clone(&self.api_key),
            excluded_paths: self.excluded_paths.clone(),
        }
    }
}

/// Middleware service for API key authentication
#[derive(Clone, Debug)]
pub struct ApiKeyAuth<S> {
    inner: S,
    api_key: Arc<Option<SecretString>>,
    excluded_paths: Vec<String>,
}

impl<S> Service<Request> for ApiKeyAuth<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let api_key = Arc::clone(&self.api_key);
        let excluded_paths = self.excluded_paths.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let path = req.uri().path();
            if excluded_paths.iter().any(|p| p == path) {
                return inner.call(req).await;
            }

            let Some(expected) = api_key.as_ref() else {
                return Ok(unauthorized_response());
            };

            let presented = req
                .headers()
                .get(API_KEY_HEADER)
                .and_then(|v| v.to_str().ok());

            match presented {
                Some(key) if key_matches(key, expected) => {
                    debug!("API key verified");
                    inner.call(req).await
                }
                Some(_) => {
                    warn!(path = %req.uri().path(), "Rejected request with wrong API key");
                    Ok(unauthorized_response())
                }
                None => {
                    debug!(path = %req.uri().path(), "Rejected request without API key");
                    Ok(unauthorized_response())
                }
            }
        })
    }
}

/// Constant-time comparison of the presented key against the secret
fn key_matches(presented: &str, expected: &SecretString) -> bool {
    presented
        .as_bytes()
        .ct_eq(expected.expose_secret().as_bytes())
        .into()
}

fn unauthorized_response() -> Response {
    ApiError::Unauthorized("Unauthorized access".to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, http::StatusCode, routing::get};
    use tower::ServiceExt;

    use super::*;

    async fn test_handler() -> &'static str {
        "ok"
    }

    fn create_test_router(api_key: Option<&str>) -> Router {
        Router::new()
            .route("/api/quotes", get(test_handler))
            .route("/health", get(test_handler))
            .route("/healthy", get(test_handler))
            .layer(ApiKeyAuthLayer::new(
                api_key.map(|k| SecretString::from(k.to_string())),
            ))
    }

    #[tokio::test]
    async fn valid_key_passes() {
        let app = create_test_router(Some("wall-secret"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/quotes")
                    .header(API_KEY_HEADER, "wall-secret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn wrong_key_rejected() {
        let app = create_test_router(Some("wall-secret"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/quotes")
                    .header(API_KEY_HEADER, "wrong-key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_header_rejected_with_contract_body() {
        let app = create_test_router(Some("wall-secret"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/quotes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(
            String::from_utf8_lossy(&body),
            r#"{"error":"Unauthorized access"}"#
        );
    }

    #[tokio::test]
    async fn health_endpoint_excluded_from_auth() {
        let app = create_test_router(Some("wall-secret"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_prefixed_paths_are_not_excluded() {
        let app = create_test_router(Some("wall-secret"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthy")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unconfigured_key_rejects_everything_protected() {
        let app = create_test_router(None);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/quotes")
                    .header(API_KEY_HEADER, "anything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn key_comparison_rejects_prefix() {
        let expected = SecretString::from("wall-secret".to_string());
        assert!(!key_matches("wall", &expected));
        assert!(!key_matches("wall-secret-longer", &expected));
        assert!(key_matches("wall-secret", &expected));
    }
}
