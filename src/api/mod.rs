//! HTTP surface: routes under `/api`.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post};

use crate::model::AppState;

pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/cards",
            get(handlers::list_cards).post(handlers::add_card),
        )
        .route("/api/cards/{id}", delete(handlers::delete_card))
        .route(
            "/api/settings",
            get(handlers::get_settings).post(handlers::update_settings),
        )
        .route("/api/start_drawing", post(handlers::start_drawing))
        .route("/api/draw", post(handlers::draw_number))
        // Path used by the admin page.
        .route("/api/draw_number", post(handlers::draw_number))
        .with_state(app_state)
}
