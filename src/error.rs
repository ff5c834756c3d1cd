use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Internal failures of a lookup. All of them surface as a 500 whose body is
/// the raw error text.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error(transparent)]
    Request(reqwest::Error),

    #[error(transparent)]
    Upstream(reqwest::Error),

    #[error(transparent)]
    Decode(reqwest::Error),

    #[error(transparent)]
    Encode(#[from] serde_json::Error),
}

impl IntoResponse for LocateError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_encode_error_renders_raw_text() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let text = json_err.to_string();
        let response = LocateError::from(json_err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(bytes.to_vec()).unwrap(), text);
    }

    #[tokio::test]
    async fn test_transport_error_renders_raw_text() {
        let err = reqwest::Client::new().get("not a url").build().unwrap_err();
        let text = err.to_string();
        let response = LocateError::Request(err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(bytes.to_vec()).unwrap(), text);
    }
}
