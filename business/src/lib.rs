//! Rental contract listing: the contract model, display formatters and the
//! column factory the contracts table is built from.

mod badge;
mod columns;
mod config;
mod contract;
mod format;
mod loader;
mod sort;

pub use badge::{BadgeTone, BadgeVariant, StatusBadge};
pub use columns::{
    ACTIONS_MENU_TITLE, ACTIONS_MENU_TRIGGER, ActionMenu, Align, Cell, ColumnHeader, ColumnId,
    ColumnsConfig, ContractAction, ContractColumn, ContractHandler, MenuEntry, MenuItem, columns,
};
pub use config::ViewerConfig;
pub use contract::{Contract, ContractField, ContractStatus, Counterparty, UserRole};
pub use format::{DateFormatError, INVALID_DATE, format_currency, format_date, try_format_date};
pub use loader::{LoadError, load_contracts, parse_contracts, sample_contracts};
pub use sort::{SortDirection, SortState};
