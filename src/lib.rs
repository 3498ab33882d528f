use axum::routing::get;
use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;

use crate::endpoint_handlers::{create_band, get_band, get_bands};

pub mod band_filter;
pub mod config;
pub mod endpoint_handlers;
pub mod error;
pub mod responses;

#[derive(Clone)]
pub struct DatabaseState {
    pub connection: DatabaseConnection,
}

pub fn build_router(state: DatabaseState) -> Router {
    Router::new()
        .route("/bands", get(get_bands).post(create_band))
        .route("/bands/:id", get(get_band))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
