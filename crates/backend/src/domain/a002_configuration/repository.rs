use contracts::domain::a002_configuration::aggregate::InspectitConfiguration;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Хранилище текущей конфигурации агентов.
///
/// Empty until the first update. Cloning shares the underlying store.
#[derive(Clone, Default)]
pub struct ConfigurationRepository {
    inner: Arc<RwLock<Option<InspectitConfiguration>>>,
}

impl ConfigurationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<InspectitConfiguration> {
        self.inner.read().await.clone()
    }

    pub async fn replace(&self, configuration: InspectitConfiguration) {
        *self.inner.write().await = Some(configuration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_until_replaced() {
        let repo = ConfigurationRepository::new();
        assert_eq!(repo.get().await, None);

        repo.replace(InspectitConfiguration::default()).await;
        assert_eq!(repo.get().await, Some(InspectitConfiguration::default()));
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let repo = ConfigurationRepository::new();
        repo.clone().replace(InspectitConfiguration::default()).await;
        assert!(repo.get().await.is_some());
    }
}
