use crate::shared::table::{ColumnDef, HeaderContent};
use contracts::domain::a001_connection::aggregate::Connection;

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn format_attributes(c: &Connection) -> String {
    if c.agent.attributes.is_empty() {
        return "-".to_string();
    }
    c.agent
        .attributes
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Колонки таблицы подключений
pub fn connection_columns() -> Vec<ColumnDef<Connection>> {
    vec![
        ColumnDef::accessor(
            "serviceName",
            HeaderContent::computed(|ctx| format!("Service Name ({})", ctx.row_count)),
            |c: &Connection| c.agent.service_name.clone(),
        ),
        ColumnDef::accessor("agentId", "Agent ID", |c: &Connection| {
            c.agent.agent_id.clone()
        }),
        ColumnDef::accessor("vmId", "VM ID", |c: &Connection| c.agent.vm_id.clone()),
        ColumnDef::group(
            "versions",
            "Versions",
            vec![
                ColumnDef::accessor("gepardVersion", "Gepard", |c: &Connection| {
                    c.agent.gepard_version.clone()
                }),
                ColumnDef::accessor("otelVersion", "OpenTelemetry", |c: &Connection| {
                    c.agent.otel_version.clone()
                }),
                ColumnDef::accessor("javaVersion", "Java", |c: &Connection| {
                    c.agent.java_version.clone()
                }),
            ],
        ),
        ColumnDef::accessor("startTime", "Start Time", |c: &Connection| {
            format_timestamp(c.agent.start_time)
        }),
        ColumnDef::accessor("registrationTime", "Registration Time", |c: &Connection| {
            format_timestamp(c.registration_time)
        }),
        ColumnDef::accessor("attributes", "Attributes", format_attributes),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::{header_rows, TableModel};
    use chrono::TimeZone;
    use contracts::domain::a001_connection::aggregate::Agent;
    use std::collections::BTreeMap;

    fn connection() -> Connection {
        let mut c = Connection::new(Agent {
            service_name: "checkout".into(),
            vm_id: "1234@host".into(),
            agent_id: "agent-1".into(),
            gepard_version: "0.0.1".into(),
            otel_version: "1.26".into(),
            start_time: chrono::Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            java_version: "17".into(),
            attributes: BTreeMap::from([
                ("env".to_string(), "prod".to_string()),
                ("zone".to_string(), "eu".to_string()),
            ]),
        });
        c.registration_time = chrono::Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 5).unwrap();
        c
    }

    #[test]
    fn test_header_layout() {
        let model = TableModel::new(connection_columns(), vec![connection(), connection()]);
        let rows = header_rows(&model);

        assert_eq!(rows.len(), 2);
        let top: Vec<Option<&str>> = rows[0].cells.iter().map(|c| c.text.as_deref()).collect();
        assert_eq!(
            top,
            vec![None, None, None, Some("Versions"), None, None, None]
        );
        assert_eq!(rows[1].cells[0].text.as_deref(), Some("Service Name (2)"));
        assert_eq!(rows[1].cells.len(), 9);
        assert_eq!(rows[1].cells[7].text.as_deref(), Some("Registration Time"));
        assert_eq!(rows[1].cells[8].text.as_deref(), Some("Attributes"));
    }

    #[test]
    fn test_cells() {
        let model = TableModel::new(connection_columns(), vec![connection()]);
        let cells = model.page_cells();

        assert_eq!(
            cells[0],
            vec![
                "checkout",
                "agent-1",
                "1234@host",
                "0.0.1",
                "1.26",
                "17",
                "2024-05-01 12:00:00",
                "2024-05-01 12:00:05",
                "env=prod, zone=eu",
            ]
        );
    }
}
