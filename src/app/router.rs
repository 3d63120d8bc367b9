use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::{ServeDir, ServeFile},
};

use crate::{
    app::errors::DefaultApiError, feedbacks, transactions, webhooks, AppState,
};

pub fn build(state: AppState) -> Router {
    let envy = state.envy.clone();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        // feed
        .route("/", get(super::controller::get_root))
        .route("/supporters", get(transactions::controller::get_supporters))
        // pages
        .route_service("/admin", ServeFile::new(envy.pages_dir.join("admin.html")))
        .route_service("/guide", ServeFile::new(envy.pages_dir.join("guide.html")))
        .route_service(
            "/feedback",
            ServeFile::new(envy.pages_dir.join("feedback.html")),
        )
        .nest_service("/static", ServeDir::new(&envy.static_dir))
        // api
        .route(
            "/api/send_feedback",
            post(feedbacks::controller::send_feedback),
        )
        .route(
            "/api/add_expense",
            post(transactions::controller::add_expense),
        )
        .route(
            "/api/sepay-webhook",
            post(webhooks::sepay::controller::receive_webhook),
        )
        .with_state(state)
        // layers
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(envy.max_upload_bytes))
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!(%err);
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(
                    envy.rate_limit_per_sec,
                    Duration::from_secs(1),
                )),
        )
}
