//! Row rendering for the contracts table.

use contracts_business::{Cell, Contract, ContractColumn};
use egui::{Stroke, Ui};
use egui_extras::TableRow;

use super::cells::{render_actions_menu, render_status_badge, render_text_cell};

/// Renders every cell of `contract`, one per column.
///
/// Actions picked from the row menu run their handler right away, with
/// the row's contract.
#[inline]
pub fn render_contract_row(
    row: &mut TableRow<'_, '_>,
    columns: &[ContractColumn],
    contract: &Contract,
) {
    for column in columns {
        let cell = column.cell(contract);

        row.col(|ui| {
            match &cell {
                Cell::Text {
                    text,
                    align,
                    emphasized,
                } => render_text_cell(ui, text, *align, *emphasized),
                Cell::Badge { label, badge } => render_status_badge(ui, label, *badge),
                Cell::Actions(menu) => {
                    if let Some(action) = render_actions_menu(ui, menu)
                        && !menu.activate(action, contract)
                    {
                        log::debug!(
                            "{} has no handler for contract {}",
                            action.label(),
                            contract.id
                        );
                    }
                }
            }
            draw_cell_bottom_border(ui);
        });
    }
}

/// Draws a bottom border line for a table cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let stroke = Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color);
    ui.painter().hline(rect.x_range(), rect.bottom(), stroke);
}
