use contracts::domain::a001_connection::aggregate::{Connection, ConnectionId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory registry of agent connections.
///
/// Cloning shares the underlying store.
#[derive(Clone, Default)]
pub struct ConnectionRepository {
    inner: Arc<RwLock<HashMap<ConnectionId, Connection>>>,
}

impl ConnectionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, connection: Connection) -> ConnectionId {
        let id = connection.id;
        self.inner.write().await.insert(id, connection);
        id
    }

    pub async fn get_by_id(&self, id: ConnectionId) -> Option<Connection> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Все подключения в порядке регистрации
    pub async fn list_all(&self) -> Vec<Connection> {
        let mut items: Vec<Connection> = self.inner.read().await.values().cloned().collect();
        items.sort_by(|a, b| {
            a.registration_time
                .cmp(&b.registration_time)
                .then_with(|| a.id.0.cmp(&b.id.0))
        });
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use contracts::domain::a001_connection::aggregate::Agent;
    use std::collections::BTreeMap;

    fn connection(service: &str, offset_secs: i64) -> Connection {
        let mut c = Connection::new(Agent {
            service_name: service.into(),
            vm_id: "vm".into(),
            agent_id: "agent".into(),
            gepard_version: "0.0.1".into(),
            otel_version: "1.26".into(),
            start_time: Utc::now(),
            java_version: "17".into(),
            attributes: BTreeMap::new(),
        });
        c.registration_time = Utc::now() + Duration::seconds(offset_secs);
        c
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let repo = ConnectionRepository::new();
        let c = connection("a", 0);
        let id = repo.insert(c.clone()).await;

        assert_eq!(repo.get_by_id(id).await, Some(c));
        assert_eq!(repo.get_by_id(ConnectionId::new_v4()).await, None);
    }

    #[tokio::test]
    async fn test_list_all_is_ordered_by_registration_time() {
        let repo = ConnectionRepository::new();
        repo.insert(connection("late", 60)).await;
        repo.insert(connection("early", -60)).await;
        repo.insert(connection("now", 0)).await;

        let names: Vec<String> = repo
            .list_all()
            .await
            .into_iter()
            .map(|c| c.agent.service_name)
            .collect();
        assert_eq!(names, vec!["early", "now", "late"]);
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let repo = ConnectionRepository::new();
        let other = repo.clone();
        other.insert(connection("a", 0)).await;
        assert_eq!(repo.list_all().await.len(), 1);
    }
}
