pub mod header_view;
pub mod model;

pub use header_view::{header_rows, TableHeaderView};
pub use model::{ColumnDef, HeaderContent, HeaderContext, TableModel};
