pub mod columns;

use self::columns::connection_columns;
use crate::shared::components::PaginationControl;
use crate::shared::table::{TableHeaderView, TableModel};
use contracts::domain::a001_connection::aggregate::Connection;
use leptos::prelude::*;
use thaw::*;

const TABLE_ID: &str = "a001-connection-table";
const PAGE_SIZE: usize = 10;

/// Builds the paginated table model the view renders.
pub fn connections_table(connections: Vec<Connection>) -> TableModel<Connection> {
    TableModel::new(connection_columns(), connections).with_page_size(PAGE_SIZE)
}

/// Таблица подключений агентов с пагинацией
#[component]
#[allow(non_snake_case)]
pub fn ConnectionsView(
    connections: Vec<Connection>,
    /// Callback for the refresh button; the button is hidden without it
    #[prop(optional)]
    on_refresh: Option<Callback<()>>,
    /// Disables the refresh button while a request is in flight
    #[prop(optional, into)]
    refreshing: Signal<bool>,
) -> impl IntoView {
    let total = connections.len();
    let model = connections_table(connections);
    let column_count = model.leaf_columns().len();

    let header_model = model.clone();
    let body_model = model.clone();
    let page_info_model = model.clone();

    view! {
        <div class="connections">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Connections"</h1>
                    <span class="page__subtitle">{format!("{} registered", total)}</span>
                </div>
                <div class="page__header-right">
                    {on_refresh.map(|on_refresh| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=refreshing
                            on_click=move |_| on_refresh.run(())
                        >
                            "Refresh"
                        </Button>
                    })}
                </div>
            </div>

            <div class="table-wrapper">
                <Table attr:id=TABLE_ID attr:style="width: 100%;">
                    <TableHeaderView table=header_model />
                    <TableBody>
                        {move || {
                            let rows = body_model.page_cells();
                            if rows.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan=column_count.to_string()>
                                            <TableCellLayout>"No connections registered"</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|cells| {
                                    view! {
                                        <TableRow>
                                            {cells
                                                .into_iter()
                                                .map(|text| view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{text}</TableCellLayout>
                                                    </TableCell>
                                                })
                                                .collect_view()}
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            <div class="page__footer">
                <span class="pagination-info">
                    {move || {
                        let pages = page_info_model.page_count().max(1);
                        format!("Page {} / {}", page_info_model.page_index() + 1, pages)
                    }}
                </span>
                <PaginationControl table=model />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::header_rows;
    use chrono::Utc;
    use contracts::domain::a001_connection::aggregate::Agent;
    use std::collections::BTreeMap;

    fn connections(n: usize) -> Vec<Connection> {
        (0..n)
            .map(|i| {
                Connection::new(Agent {
                    service_name: format!("service-{}", i),
                    vm_id: "vm".into(),
                    agent_id: format!("agent-{}", i),
                    gepard_version: "0.0.1".into(),
                    otel_version: "1.26".into(),
                    start_time: Utc::now(),
                    java_version: "17".into(),
                    attributes: BTreeMap::new(),
                })
            })
            .collect()
    }

    #[test]
    fn test_view_parts_share_pagination() {
        let owner = Owner::new();
        owner.set();

        let model = connections_table(connections(25));
        let header_model = model.clone();
        let body_model = model.clone();

        model.next_page();

        assert_eq!(body_model.page_index(), 1);
        assert_eq!(body_model.page_cells().len(), PAGE_SIZE);
        assert_eq!(body_model.page_cells()[0][0], "service-10");
        let headers = header_rows(&header_model);
        assert_eq!(headers[1].cells[0].text.as_deref(), Some("Service Name (25)"));
    }

    #[test]
    fn test_last_page_is_partial() {
        let owner = Owner::new();
        owner.set();

        let model = connections_table(connections(25));
        model.next_page();
        model.next_page();

        assert_eq!(model.page_cells().len(), 5);
        assert!(!model.can_next_page());
    }
}
