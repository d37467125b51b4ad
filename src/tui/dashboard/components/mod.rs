//! Dashboard components

pub mod detail_modal;
pub mod header;
pub mod pagination_bar;
pub mod record_table;
pub mod status_picker;
pub mod tab_bar;

pub use detail_modal::{DetailModal, DetailModalProps};
pub use header::{DashboardHeader, DashboardHeaderProps};
pub use pagination_bar::{PaginationBar, PaginationBarProps};
pub use record_table::{RecordTable, RecordTableProps};
pub use status_picker::{StatusPickerModal, StatusPickerModalProps};
pub use tab_bar::{TabBar, TabBarProps};
