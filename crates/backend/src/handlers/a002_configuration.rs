use axum::extract::rejection::JsonRejection;
use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a002_configuration::aggregate::InspectitConfiguration;

use crate::domain::a002_configuration::service;
use crate::shared::error::{AppError, PathError};
use crate::AppState;

/// GET /api/v1/agent-configuration/:agent_id
///
/// 204 while no configuration has been stored yet.
pub async fn get_for_agent(
    State(state): State<AppState>,
    Path(agent_id): Path<String>,
) -> Response {
    match service::get_for_agent(&state.configuration, &agent_id).await {
        Some(configuration) => Json(configuration).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// PUT /api/v1/agent-configuration
pub async fn update(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<InspectitConfiguration>, JsonRejection>,
) -> Result<Json<InspectitConfiguration>, PathError> {
    let Json(configuration) = payload.map_err(|e| AppError::from(e).at(uri.path()))?;
    service::update(&state.configuration, configuration)
        .await
        .map(Json)
        .map_err(|e| e.at(uri.path()))
}
