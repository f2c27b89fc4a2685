pub mod pagination_control;

pub use pagination_control::PaginationControl;
