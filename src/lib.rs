pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use services::IpInfoClient;

/// Build the HTTP surface around an injected upstream client.
pub fn app(client: IpInfoClient) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/locate", get(handlers::locate))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn offline_app() -> Router {
        // Routes that never reach the upstream
        app(IpInfoClient::new(reqwest::Client::new(), "http://127.0.0.1:9"))
    }

    #[tokio::test]
    async fn test_index_links_example_lookup() {
        let response = offline_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("/locate?ip=5.135.186.41"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = offline_app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_only_index_and_locate_are_routed() {
        for path in ["/health", "/locate/8.8.8.8", "/index.html"] {
            let response = offline_app()
                .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", path);
        }
    }

    #[tokio::test]
    async fn test_locate_rejects_other_methods() {
        let response = offline_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/locate?ip=8.8.8.8")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
