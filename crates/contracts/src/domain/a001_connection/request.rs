use super::aggregate::{Agent, Connection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Запрос на регистрацию подключения от агента.
///
/// Every field is optional on the wire so that a request with several gaps
/// reports all of them at once instead of failing on the first one.
/// Unknown fields are an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateConnectionRequest {
    pub service_name: Option<String>,
    pub gepard_version: Option<String>,
    pub otel_version: Option<String>,
    pub vm_id: Option<String>,
    pub agent_id: Option<String>,
    /// Agent start time, epoch milliseconds.
    pub start_time: Option<i64>,
    pub java_version: Option<String>,
    #[serde(default)]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl CreateConnectionRequest {
    /// Returns one message per missing required field, in declaration order.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let mut require = |present: bool, message: &str| {
            if !present {
                errors.push(message.to_string());
            }
        };

        require(self.service_name.is_some(), "Service Name missing.");
        require(self.gepard_version.is_some(), "Gepard Version missing.");
        require(self.otel_version.is_some(), "OpenTelemetry Version missing.");
        require(self.vm_id.is_some(), "VM-ID is missing.");
        require(self.agent_id.is_some(), "Agent-ID is missing");
        require(self.start_time.is_some(), "Start-Time missing.");
        require(self.java_version.is_some(), "Java Version missing.");

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Builds a fresh connection with a new id and the current registration time.
    pub fn into_connection(self) -> Result<Connection, Vec<String>> {
        self.validate()?;

        let start_millis = self.start_time.unwrap_or_default();
        let start_time = DateTime::<Utc>::from_timestamp_millis(start_millis)
            .ok_or_else(|| vec![format!("Start-Time out of range: {}", start_millis)])?;

        let agent = Agent {
            service_name: self.service_name.unwrap_or_default(),
            vm_id: self.vm_id.unwrap_or_default(),
            agent_id: self.agent_id.unwrap_or_default(),
            gepard_version: self.gepard_version.unwrap_or_default(),
            otel_version: self.otel_version.unwrap_or_default(),
            start_time,
            java_version: self.java_version.unwrap_or_default(),
            attributes: self.attributes.unwrap_or_default(),
        };

        Ok(Connection::new(agent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateConnectionRequest {
        CreateConnectionRequest {
            service_name: Some("checkout".into()),
            gepard_version: Some("0.0.1".into()),
            otel_version: Some("1.26".into()),
            vm_id: Some("1234@host".into()),
            agent_id: Some("agent-1".into()),
            start_time: Some(1_700_000_000_000),
            java_version: Some("17".into()),
            attributes: None,
        }
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        assert_eq!(full_request().validate(), Ok(()));
    }

    #[test]
    fn test_validate_lists_every_missing_field() {
        let errors = CreateConnectionRequest::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Service Name missing.",
                "Gepard Version missing.",
                "OpenTelemetry Version missing.",
                "VM-ID is missing.",
                "Agent-ID is missing",
                "Start-Time missing.",
                "Java Version missing.",
            ]
        );
    }

    #[test]
    fn test_into_connection_maps_fields() {
        let before = Utc::now();
        let connection = full_request().into_connection().unwrap();

        assert_eq!(connection.agent.service_name, "checkout");
        assert_eq!(connection.agent.vm_id, "1234@host");
        assert_eq!(connection.agent.start_time.timestamp_millis(), 1_700_000_000_000);
        assert!(connection.agent.attributes.is_empty());
        assert!(connection.registration_time >= before);
    }

    #[test]
    fn test_into_connection_keeps_attributes() {
        let mut request = full_request();
        request.attributes = Some(BTreeMap::from([("env".to_string(), "prod".to_string())]));

        let connection = request.into_connection().unwrap();
        assert_eq!(connection.agent.attributes.get("env").map(String::as_str), Some("prod"));
    }

    #[test]
    fn test_into_connection_rejects_partial_request() {
        let mut request = full_request();
        request.java_version = None;
        assert_eq!(
            request.into_connection().unwrap_err(),
            vec!["Java Version missing."]
        );
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let json = r#"{"serviceName": "checkout", "hostName": "box"}"#;
        let err = serde_json::from_str::<CreateConnectionRequest>(json).unwrap_err();
        assert!(err.to_string().contains("hostName"));
    }

    #[test]
    fn test_each_conversion_gets_new_id() {
        let a = full_request().into_connection().unwrap();
        let b = full_request().into_connection().unwrap();
        assert_ne!(a.id, b.id);
    }
}
