//! Headless table model: column tree, header groups and client-side pagination.
//!
//! The model owns no DOM. [`super::header_view::TableHeaderView`] and
//! [`crate::shared::components::pagination_control::PaginationControl`]
//! render it; the page that owns the data builds it.

use leptos::prelude::*;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Everything a header may look at when resolving its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderContext {
    pub header_id: String,
    pub column_id: String,
    /// Header row the cell sits in, 0 is the top row
    pub depth: usize,
    pub col_span: usize,
    /// Number of data rows in the table (all pages)
    pub row_count: usize,
}

/// Содержимое заголовка колонки: статический текст или функция от контекста
#[derive(Clone)]
pub enum HeaderContent {
    Static(String),
    Computed(Arc<dyn Fn(&HeaderContext) -> String + Send + Sync>),
}

impl HeaderContent {
    pub fn computed(f: impl Fn(&HeaderContext) -> String + Send + Sync + 'static) -> Self {
        Self::Computed(Arc::new(f))
    }

    pub fn resolve(&self, ctx: &HeaderContext) -> String {
        match self {
            Self::Static(text) => text.clone(),
            Self::Computed(f) => f(ctx),
        }
    }
}

impl fmt::Debug for HeaderContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for HeaderContent {
    fn from(text: &str) -> Self {
        Self::Static(text.to_string())
    }
}

impl From<String> for HeaderContent {
    fn from(text: String) -> Self {
        Self::Static(text)
    }
}

type CellFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Column definition. Leaves carry a cell accessor, groups carry children.
pub struct ColumnDef<T> {
    pub id: String,
    pub header: HeaderContent,
    cell: Option<CellFn<T>>,
    pub columns: Vec<ColumnDef<T>>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            cell: self.cell.clone(),
            columns: self.columns.clone(),
        }
    }
}

impl<T> ColumnDef<T> {
    pub fn accessor(
        id: impl Into<String>,
        header: impl Into<HeaderContent>,
        cell: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            cell: Some(Arc::new(cell)),
            columns: Vec::new(),
        }
    }

    pub fn group(
        id: impl Into<String>,
        header: impl Into<HeaderContent>,
        columns: Vec<ColumnDef<T>>,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            cell: None,
            columns,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.columns.is_empty()
    }

    /// Cell text for a row; empty for group columns.
    pub fn render_cell(&self, row: &T) -> String {
        self.cell.as_ref().map(|f| f(row)).unwrap_or_default()
    }

    /// Number of header rows this column occupies, counting itself
    fn height(&self) -> usize {
        1 + self.columns.iter().map(ColumnDef::height).max().unwrap_or(0)
    }

    fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.columns.iter().map(ColumnDef::leaf_count).sum()
        }
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a ColumnDef<T>>) {
        if self.is_leaf() {
            out.push(self);
        } else {
            for child in &self.columns {
                child.collect_leaves(out);
            }
        }
    }
}

/// Одна ячейка строки заголовка
#[derive(Debug, Clone)]
pub struct Header {
    pub id: String,
    pub column_id: String,
    pub depth: usize,
    pub col_span: usize,
    pub is_placeholder: bool,
    pub content: HeaderContent,
    context: HeaderContext,
}

impl Header {
    pub fn context(&self) -> &HeaderContext {
        &self.context
    }
}

/// Одна строка заголовка таблицы
#[derive(Debug, Clone)]
pub struct HeaderGroup {
    pub id: String,
    pub depth: usize,
    pub headers: Vec<Header>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    fn size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Zero rows means zero pages.
    pub fn page_count(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.size())
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, total_rows: usize) -> bool {
        self.page_index + 1 < self.page_count(total_rows)
    }

    /// Row range of the current page, clamped to the data.
    pub fn range(&self, total_rows: usize) -> Range<usize> {
        let start = (self.page_index * self.size()).min(total_rows);
        let end = (start + self.size()).min(total_rows);
        start..end
    }
}

/// Модель таблицы: колонки, данные и состояние пагинации
pub struct TableModel<T: Send + Sync + 'static> {
    columns: Arc<Vec<ColumnDef<T>>>,
    data: Arc<Vec<T>>,
    pagination: RwSignal<PaginationState>,
}

impl<T: Send + Sync + 'static> Clone for TableModel<T> {
    fn clone(&self) -> Self {
        Self {
            columns: Arc::clone(&self.columns),
            data: Arc::clone(&self.data),
            pagination: self.pagination,
        }
    }
}

impl<T: Send + Sync + 'static> TableModel<T> {
    pub fn new(columns: Vec<ColumnDef<T>>, data: Vec<T>) -> Self {
        Self {
            columns: Arc::new(columns),
            data: Arc::new(data),
            pagination: RwSignal::new(PaginationState::default()),
        }
    }

    pub fn with_page_size(self, page_size: usize) -> Self {
        self.pagination.update(|p| {
            p.page_size = page_size;
            p.page_index = 0;
        });
        self
    }

    pub fn columns(&self) -> &[ColumnDef<T>] {
        &self.columns
    }

    pub fn leaf_columns(&self) -> Vec<&ColumnDef<T>> {
        let mut leaves = Vec::new();
        for column in self.columns.iter() {
            column.collect_leaves(&mut leaves);
        }
        leaves
    }

    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Строки заголовка, сверху вниз.
    ///
    /// Each column's own header sits as low as its subtree allows; the rows
    /// above it, down from its parent, are filled with placeholders spanning
    /// the same leaves, so every row covers the full table width.
    pub fn header_groups(&self) -> Vec<HeaderGroup> {
        let height = self.columns.iter().map(ColumnDef::height).max().unwrap_or(0);
        let mut rows: Vec<Vec<Header>> = vec![Vec::new(); height];

        for column in self.columns.iter() {
            self.place_header(column, 0, height, &mut rows);
        }

        rows.into_iter()
            .enumerate()
            .map(|(depth, headers)| HeaderGroup {
                id: depth.to_string(),
                depth,
                headers,
            })
            .collect()
    }

    fn place_header(
        &self,
        column: &ColumnDef<T>,
        first_row: usize,
        height: usize,
        rows: &mut [Vec<Header>],
    ) {
        let own_row = height - column.height();
        let col_span = column.leaf_count();

        for depth in first_row..own_row {
            rows[depth].push(self.make_header(
                column,
                format!("{}_{}_placeholder", depth, column.id),
                depth,
                col_span,
                true,
            ));
        }
        rows[own_row].push(self.make_header(
            column,
            format!("{}_{}", own_row, column.id),
            own_row,
            col_span,
            false,
        ));

        for child in &column.columns {
            self.place_header(child, own_row + 1, height, rows);
        }
    }

    fn make_header(
        &self,
        column: &ColumnDef<T>,
        id: String,
        depth: usize,
        col_span: usize,
        is_placeholder: bool,
    ) -> Header {
        Header {
            context: HeaderContext {
                header_id: id.clone(),
                column_id: column.id.clone(),
                depth,
                col_span,
                row_count: self.row_count(),
            },
            id,
            column_id: column.id.clone(),
            depth,
            col_span,
            is_placeholder,
            content: column.header.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    pub fn pagination(&self) -> PaginationState {
        self.pagination.get()
    }

    pub fn page_index(&self) -> usize {
        self.pagination.with(|p| p.page_index)
    }

    pub fn page_count(&self) -> usize {
        self.pagination.with(|p| p.page_count(self.row_count()))
    }

    pub fn can_previous_page(&self) -> bool {
        self.pagination.with(PaginationState::can_previous)
    }

    pub fn can_next_page(&self) -> bool {
        self.pagination.with(|p| p.can_next(self.row_count()))
    }

    /// No-op on the first page.
    pub fn previous_page(&self) {
        if self.pagination.with_untracked(PaginationState::can_previous) {
            self.pagination.update(|p| p.page_index -= 1);
        }
    }

    /// No-op on the last page.
    pub fn next_page(&self) {
        let total = self.row_count();
        if self.pagination.with_untracked(|p| p.can_next(total)) {
            self.pagination.update(|p| p.page_index += 1);
        }
    }

    pub fn page_rows(&self) -> &[T] {
        let range = self.pagination.with(|p| p.range(self.row_count()));
        &self.data[range]
    }

    /// Cell texts of the current page, one inner vec per row in leaf column order.
    pub fn page_cells(&self) -> Vec<Vec<String>> {
        let leaves = self.leaf_columns();
        self.page_rows()
            .iter()
            .map(|row| leaves.iter().map(|c| c.render_cell(row)).collect())
            .collect()
    }
}
