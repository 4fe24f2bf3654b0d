//! JSON handlers. Each one maps a request onto a single store call.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

use super::error::ApiError;
use crate::database::models::{Card, DrawOutcome, NewCard, Settings, SettingsPatch};
use crate::error::BingoError;
use crate::model::AppState;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn success() -> Json<Value> {
    Json(json!({ "success": true }))
}

/// Unreadable bodies answer with the same 400 `{error}` shape as failed validation.
fn read_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError(BingoError::Validation(rejection.body_text())))
}

pub async fn list_cards(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<Card>>, ApiError> {
    Ok(Json(app_state.store.list_cards().await?))
}

pub async fn add_card(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<NewCard>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let request = read_body(payload)?;
    let card = app_state.store.add_card(request).await?;
    info!(target: "api.cards", id = card.id, card_id = %card.card_id, "card registered");
    Ok((StatusCode::CREATED, success()))
}

pub async fn delete_card(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    app_state.store.delete_card(id).await?;
    info!(target: "api.cards", id, "card deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_settings(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Settings>, ApiError> {
    Ok(Json(app_state.store.get_settings().await?))
}

pub async fn update_settings(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<SettingsPatch>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let patch = read_body(payload)?;
    app_state.store.update_settings(patch).await?;
    Ok(success())
}

pub async fn start_drawing(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>, ApiError> {
    app_state.store.start_drawing().await?;
    Ok(Json(MessageResponse {
        message: "Drawing started".to_string(),
    }))
}

pub async fn draw_number(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<DrawOutcome>, ApiError> {
    Ok(Json(app_state.store.draw_number().await?))
}
