use axum::extract::rejection::JsonRejection;
use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_connection::aggregate::Connection;
use contracts::domain::a001_connection::request::CreateConnectionRequest;

use crate::domain::a001_connection::service;
use crate::shared::error::{AppError, PathError};
use crate::AppState;

/// GET /api/v1/connections
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Connection>> {
    Json(service::list_all(&state.connections).await)
}

/// GET /api/v1/connections/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<Json<Connection>, PathError> {
    service::get_by_id(&state.connections, &id)
        .await
        .map(Json)
        .map_err(|e| e.at(uri.path()))
}

/// POST /api/v1/connections
pub async fn create(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<CreateConnectionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Connection>), PathError> {
    let Json(request) = payload.map_err(|e| AppError::from(e).at(uri.path()))?;
    service::create(&state.connections, request)
        .await
        .map(|c| (StatusCode::CREATED, Json(c)))
        .map_err(|e| e.at(uri.path()))
}
