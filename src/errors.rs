use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Error bodies are plain text; the decoder diagnostic passes
        // through verbatim.
        match self {
            Self::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response()
            }
            Self::MalformedRequest(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_not_allowed_maps_to_405() {
        let response = AppError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn malformed_request_maps_to_400() {
        let response = AppError::MalformedRequest("expected value".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
