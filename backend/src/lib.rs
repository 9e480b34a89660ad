use std::sync::Arc;

use axum::{
    http::Method,
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

use config::Config;
use store::JournalStore;

#[derive(Clone)]
pub struct AppState {
    pub store: JournalStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: JournalStore, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route(
            "/journal",
            get(handlers::journal::list_entries).post(handlers::journal::create_entry),
        )
        .route(
            "/journal/:id",
            put(handlers::journal::update_entry).delete(handlers::journal::delete_entry),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
