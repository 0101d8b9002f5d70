//! HTTP API over the question store.
//!
//! - `GET /api/questions`
//! - `POST /api/questions`
//! - `DELETE /api/questions/{id}`
//! - `GET /status/ping`
use std::time::Duration;

use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::{
    LatencyUnit,
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod config;
pub mod error;
pub mod routes;

use config::AppState;

pub fn app(app_state: AppState) -> Router {
    let request_timeout_in_ms = app_state.env_vars.request_timeout_in_ms;
    let request_body_size_limit = app_state.env_vars.request_body_size_limit;

    Router::new()
        .route("/status/ping", get(routes::get_status_ping))
        .route(
            "/api/questions",
            get(routes::get_questions).post(routes::post_question),
        )
        .route("/api/questions/{id}", delete(routes::delete_question))
        .layer(TimeoutLayer::new(Duration::from_millis(
            request_timeout_in_ms,
        )))
        .layer(RequestBodyLimitLayer::new(request_body_size_limit))
        // The exam front-end is served from another origin.
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Micros),
                ),
        )
        .with_state(app_state)
}
