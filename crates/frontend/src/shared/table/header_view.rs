//! Заголовок таблицы, построенный по [`TableModel`]
//!
//! ```ignore
//! <Table>
//!     <TableHeaderView table=model.clone() />
//!     <TableBody>...</TableBody>
//! </Table>
//! ```

use super::model::TableModel;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub id: String,
    pub col_span: usize,
    /// `None` for placeholders
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRow {
    pub id: String,
    pub cells: Vec<HeaderCell>,
}

/// Projects the model's header groups into rows of resolved cell texts.
pub fn header_rows<T: Send + Sync + 'static>(table: &TableModel<T>) -> Vec<HeaderRow> {
    table
        .header_groups()
        .into_iter()
        .map(|group| HeaderRow {
            id: group.id,
            cells: group
                .headers
                .iter()
                .map(|header| HeaderCell {
                    id: header.id.clone(),
                    col_span: header.col_span,
                    text: if header.is_placeholder {
                        None
                    } else {
                        Some(header.content.resolve(header.context()))
                    },
                })
                .collect(),
        })
        .collect()
}

#[component]
pub fn TableHeaderView<T>(table: TableModel<T>) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    let rows = header_rows(&table);

    view! {
        <TableHeader class="table__header--sticky">
            {rows
                .into_iter()
                .map(|row| {
                    view! {
                        <TableRow>
                            {row
                                .cells
                                .into_iter()
                                .map(|cell| {
                                    view! {
                                        <TableHeaderCell
                                            class="table__header-cell--bordered"
                                            attr:colspan=cell.col_span.to_string()
                                        >
                                            {cell.text}
                                        </TableHeaderCell>
                                    }
                                })
                                .collect_view()}
                        </TableRow>
                    }
                })
                .collect_view()}
        </TableHeader>
    }
}
