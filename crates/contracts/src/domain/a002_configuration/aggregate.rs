use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Aggregate
// ============================================================================

/// Конфигурация инструментирования, которую забирают агенты.
///
/// A single configuration is shared by every agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InspectitConfiguration {
    #[serde(default)]
    pub instrumentation: InstrumentationConfiguration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InstrumentationConfiguration {
    /// Scopes by name
    #[serde(default)]
    pub scopes: BTreeMap<String, Scope>,
}

/// Набор классов и методов для инструментирования
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Scope {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Regex over fully qualified class names
    pub fqn: String,
    /// Regexes over method names; empty means every method
    #[serde(default)]
    pub methods: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

/// A regex-valued field and where it sits in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternField<'a> {
    pub location: String,
    pub pattern: &'a str,
}

impl InspectitConfiguration {
    /// Every regex-valued field, scopes in name order.
    pub fn patterns(&self) -> Vec<PatternField<'_>> {
        let mut fields = Vec::new();
        for (name, scope) in &self.instrumentation.scopes {
            let base = format!("instrumentation.scopes.{}", name);
            fields.push(PatternField {
                location: format!("{}.fqn", base),
                pattern: &scope.fqn,
            });
            for (i, method) in scope.methods.iter().enumerate() {
                fields.push(PatternField {
                    location: format!("{}.methods[{}]", base, i),
                    pattern: method,
                });
            }
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configuration() -> InspectitConfiguration {
        let scope = Scope {
            enabled: true,
            fqn: "com\\.example\\..*".into(),
            methods: vec!["get.*".into(), "set.*".into()],
        };
        InspectitConfiguration {
            instrumentation: InstrumentationConfiguration {
                scopes: BTreeMap::from([("s_example".to_string(), scope)]),
            },
        }
    }

    #[test]
    fn test_empty_document_is_default() {
        let parsed: InspectitConfiguration = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, InspectitConfiguration::default());
    }

    #[test]
    fn test_scope_defaults() {
        let json = r#"{"instrumentation": {"scopes": {"s": {"fqn": "a.B"}}}}"#;
        let parsed: InspectitConfiguration = serde_json::from_str(json).unwrap();
        let scope = &parsed.instrumentation.scopes["s"];

        assert!(scope.enabled);
        assert!(scope.methods.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let json = r#"{"instrumentation": {"scopes": {}, "rules": {}}}"#;
        assert!(serde_json::from_str::<InspectitConfiguration>(json).is_err());
    }

    #[test]
    fn test_patterns_lists_fqn_then_methods() {
        let config = configuration();
        let locations: Vec<String> = config.patterns().into_iter().map(|f| f.location).collect();

        assert_eq!(
            locations,
            vec![
                "instrumentation.scopes.s_example.fqn",
                "instrumentation.scopes.s_example.methods[0]",
                "instrumentation.scopes.s_example.methods[1]",
            ]
        );
        assert_eq!(config.patterns()[1].pattern, "get.*");
    }
}
