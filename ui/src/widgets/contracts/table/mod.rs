//! Table components for the contracts list.
//!
//! The column list comes from the business column factory; this module
//! only lays it out:
//! - `columns`: Column widths
//! - `header`: Header row, including the sortable counterparty header
//! - `row`: One row per contract
//! - `cells`: Text, badge and action menu cells

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Layout, Ui};
use egui_extras::TableBuilder;

use crate::state::State;
use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_contract_row;

/// Renders the contracts table for the current role and sort order.
///
/// The columns are rebuilt every frame, so a role change shows up on the
/// next repaint.
pub fn contracts_table(ui: &mut Ui, state: &mut State) {
    let columns = state.columns();
    let sort = state.sort();
    let mut sort_clicked = None;

    {
        let rows = state.visible_rows();

        let mut table = TableBuilder::new(ui)
            .id_salt("contracts_table")
            .striped(true)
            .resizable(false)
            .cell_layout(Layout::left_to_right(egui::Align::Center));
        for column in table_columns(&columns) {
            table = table.column(column);
        }

        table
            .header(HEADER_HEIGHT, |mut header| {
                sort_clicked = render_table_header(&mut header, &columns, sort);
            })
            .body(|mut body| {
                for contract in &rows {
                    body.row(ROW_HEIGHT, |mut row| {
                        render_contract_row(&mut row, &columns, contract);
                    });
                }
            });

        if rows.is_empty() {
            ui.add_space(8.0);
            ui.weak("No hay contratos para mostrar.");
        }
    }

    if let Some(field) = sort_clicked {
        state.toggle_sort(field);
    }
}
