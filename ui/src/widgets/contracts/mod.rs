//! Contracts listing: table, role selector and action dialogs.

mod dialogs;
pub mod table;

use contracts_business::UserRole;
use egui::{ComboBox, Ui};

use crate::state::State;

pub use dialogs::show_contract_dialog;
pub use table::contracts_table;

/// Renders the contracts panel: heading, table and any open dialog.
///
/// Handler events raised during the previous frame are applied first.
pub fn contracts_panel(ui: &mut Ui, state: &mut State) {
    state.poll_events();

    ui.heading("Contratos");
    ui.separator();

    contracts_table(ui, state);
    show_contract_dialog(ui.ctx(), state);
}

/// Role picker; switching role rebuilds the table columns.
pub fn role_selector(ui: &mut Ui, state: &mut State) {
    let mut role = state.role();

    ComboBox::from_label("Rol")
        .selected_text(role.label())
        .show_ui(ui, |ui| {
            for option in UserRole::ALL {
                ui.selectable_value(&mut role, option, option.label());
            }
        });

    state.set_role(role);
}
