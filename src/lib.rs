pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

pub fn build_router(state: AppState) -> Router {
    let question_api = Router::new()
        .route("/api/question-kinds", get(routes::questions::list_kinds))
        .route("/api/questions/encode", post(routes::questions::encode_question))
        .route("/api/questions/decode", post(routes::questions::decode_question))
        .route("/api/questions/reset", post(routes::questions::reset_question))
        .route("/api/questions/edit", post(routes::questions::edit_question))
        .route("/api/questions/check", post(routes::questions::check_question))
        .route("/api/answers/format", post(routes::questions::format_answer));

    Router::new()
        .route("/health", get(routes::health::health))
        .merge(question_api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
