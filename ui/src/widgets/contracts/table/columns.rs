//! Column widths for the contracts table.

use contracts_business::{ColumnId, ContractColumn, ContractField};
use egui_extras::Column;

/// Fixed column widths for consistent table layout
pub const NAME_WIDTH: f32 = 160.0;
pub const DATE_WIDTH: f32 = 100.0;
pub const AMOUNT_WIDTH: f32 = 110.0;
pub const STATUS_WIDTH: f32 = 100.0;
pub const ACTIONS_WIDTH: f32 = 48.0;
pub const ROW_HEIGHT: f32 = 32.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Layout of a single contracts column.
///
/// The property address takes whatever width is left.
#[inline]
pub fn table_column(column: &ContractColumn) -> Column {
    match column.id() {
        ColumnId::Field(ContractField::PropertyAddress) => Column::remainder().at_least(180.0),
        ColumnId::Field(ContractField::StartDate | ContractField::EndDate) => {
            Column::exact(DATE_WIDTH)
        }
        ColumnId::Field(ContractField::RentAmount) => Column::exact(AMOUNT_WIDTH),
        ColumnId::Field(ContractField::Status) => Column::exact(STATUS_WIDTH),
        ColumnId::Field(ContractField::TenantName | ContractField::LandlordName) => {
            Column::initial(NAME_WIDTH).at_least(120.0)
        }
        ColumnId::Actions => Column::exact(ACTIONS_WIDTH),
    }
}

#[inline]
pub fn table_columns(columns: &[ContractColumn]) -> Vec<Column> {
    columns.iter().map(table_column).collect()
}
