use super::repository::ConnectionRepository;
use crate::shared::error::AppError;
use contracts::domain::a001_connection::aggregate::{Connection, ConnectionId};
use contracts::domain::a001_connection::request::CreateConnectionRequest;
use contracts::domain::common::AggregateId;

/// Регистрация нового подключения агента
pub async fn create(
    repo: &ConnectionRepository,
    request: CreateConnectionRequest,
) -> Result<Connection, AppError> {
    let connection = request.into_connection().map_err(AppError::Validation)?;

    repo.insert(connection.clone()).await;
    tracing::info!(
        id = %connection.id.as_string(),
        service = %connection.agent.service_name,
        agent = %connection.agent.agent_id,
        "connection registered"
    );
    Ok(connection)
}

/// Получение подключения по строковому ID
pub async fn get_by_id(repo: &ConnectionRepository, id: &str) -> Result<Connection, AppError> {
    let id = ConnectionId::from_string(id).map_err(AppError::BadRequest)?;
    repo.get_by_id(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No connection with id {}", id.as_string())))
}

pub async fn list_all(repo: &ConnectionRepository) -> Vec<Connection> {
    repo.list_all().await
}
