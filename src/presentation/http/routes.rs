// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{posts, preview};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, Router, http::Method, routing::get};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/", get(posts::list_posts))
        .route("/api/posts", get(posts::list_posts))
        .route("/post/{slug}", get(posts::get_post))
        .route("/api/preview", get(preview::enter_preview))
        .route("/api/exit-preview", get(preview::exit_preview))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
