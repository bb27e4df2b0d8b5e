use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;

pub fn build_app() -> Router {
    Router::new()
        .route(
            "/calculate",
            post(http::handlers::calculate).fallback(http::handlers::method_not_allowed),
        )
        .route("/health", get(http::handlers::health))
        .layer(middleware::from_fn(logging::request_logging_middleware))
}
