use super::repository::ConfigurationRepository;
use crate::shared::error::AppError;
use contracts::domain::a002_configuration::aggregate::InspectitConfiguration;
use regex::Regex;

/// Конфигурация для агента, если она уже задана
pub async fn get_for_agent(
    repo: &ConfigurationRepository,
    agent_id: &str,
) -> Option<InspectitConfiguration> {
    let configuration = repo.get().await;
    tracing::debug!(
        agent = %agent_id,
        found = configuration.is_some(),
        "configuration requested"
    );
    configuration
}

/// Checks every regex-valued field, reporting all broken patterns at once.
pub fn validate(configuration: &InspectitConfiguration) -> Result<(), AppError> {
    let errors: Vec<String> = configuration
        .patterns()
        .into_iter()
        .filter(|field| Regex::new(field.pattern).is_err())
        .map(|field| format!("Invalid regex pattern at {}: '{}'", field.location, field.pattern))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Замена конфигурации после проверки шаблонов
pub async fn update(
    repo: &ConfigurationRepository,
    configuration: InspectitConfiguration,
) -> Result<InspectitConfiguration, AppError> {
    validate(&configuration)?;

    repo.replace(configuration.clone()).await;
    tracing::info!(
        scopes = configuration.instrumentation.scopes.len(),
        "agent configuration updated"
    );
    Ok(configuration)
}
