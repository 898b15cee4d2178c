use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::AppState;

mod exercises;
mod users;

pub fn router(state: AppState) -> Router {
    let static_dir = state.args.static_dir.clone();

    Router::new()
        .route("/api/users", post(users::create_user).get(users::list_users))
        .route("/api/users/:id/exercises", post(exercises::add_exercise))
        .route("/api/users/:id/logs", get(exercises::get_logs))
        .route("/api/health", get(health))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
