use crate::domain::common::AggregateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор подключения агента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(pub Uuid);

impl ConnectionId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ConnectionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ConnectionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Agent
// ============================================================================

/// Instrumented JVM agent that opened a connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub service_name: String,
    pub vm_id: String,
    pub agent_id: String,
    pub gepard_version: String,
    pub otel_version: String,
    pub start_time: DateTime<Utc>,
    pub java_version: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

// ============================================================================
// Aggregate
// ============================================================================

/// Зарегистрированное подключение агента
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: ConnectionId,
    pub registration_time: DateTime<Utc>,
    pub agent: Agent,
}

impl Connection {
    pub fn new(agent: Agent) -> Self {
        Self {
            id: ConnectionId::new_v4(),
            registration_time: Utc::now(),
            agent,
        }
    }
}
