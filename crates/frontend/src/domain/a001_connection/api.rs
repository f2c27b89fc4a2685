use crate::shared::api_utils::api_url;
use crate::shared::fetch_state::{use_fetch, FetchError, FetchHandle};
use contracts::domain::a001_connection::aggregate::Connection;
use contracts::shared::api_error::ApiError;
use gloo_net::http::Request;

/// Загрузка списка подключений агентов
pub async fn fetch_connections() -> Result<Vec<Connection>, FetchError> {
    let response = Request::get(&api_url("/api/v1/connections"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::new(format!("Request failed: {}", e)))?;

    if !response.ok() {
        let status = response.status();
        let message = match response.json::<ApiError>().await {
            Ok(body) if !body.errors.is_empty() => body.summary(),
            _ => format!("HTTP {}", status),
        };
        return Err(FetchError::new(message));
    }

    let connections: Vec<Connection> = response
        .json()
        .await
        .map_err(|e| FetchError::new(format!("Failed to parse response: {}", e)))?;
    log::debug!("loaded {} connections", connections.len());
    Ok(connections)
}

pub fn use_connections_query() -> FetchHandle<Vec<Connection>> {
    use_fetch(fetch_connections)
}
