//! Dialogs opened from the row action menu.

use contracts_business::{Contract, format_currency, format_date};
use egui::{Context, Grid, RichText, Window};

use crate::state::{ContractDialog, State};

/// Shows the dialog requested by the last row action, if any.
pub fn show_contract_dialog(ctx: &Context, state: &mut State) {
    match state.dialog().clone() {
        ContractDialog::None => {}
        ContractDialog::Edit(contract) => show_edit_dialog(ctx, state, &contract),
        ContractDialog::ConfirmDelete(contract) => show_delete_dialog(ctx, state, &contract),
    }
}

fn show_edit_dialog(ctx: &Context, state: &mut State, contract: &Contract) {
    let mut open = true;
    let mut close = false;

    Window::new("Editar contrato")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            Grid::new("contract_details")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    detail_row(ui, "Propiedad", &contract.property_address);
                    detail_row(ui, "Arrendatario", &contract.tenant_name);
                    detail_row(ui, "Arrendador", &contract.landlord_name);
                    detail_row(ui, "Inicio", &format_date(&contract.start_date));
                    detail_row(ui, "Fin", &format_date(&contract.end_date));
                    detail_row(ui, "Monto (CLP)", &format_currency(contract.rent_amount));
                    detail_row(ui, "Estado", contract.status.label());
                });

            ui.add_space(8.0);
            if ui.button("Cerrar").clicked() {
                close = true;
            }
        });

    if !open || close {
        state.close_dialog();
    }
}

fn show_delete_dialog(ctx: &Context, state: &mut State, contract: &Contract) {
    let mut open = true;
    let mut confirmed = false;
    let mut cancelled = false;

    Window::new("¿Eliminar contrato?")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!(
                "Se eliminará el contrato de {}.",
                contract.property_address
            ));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let delete = RichText::new("Eliminar").color(ui.visuals().error_fg_color);
                if ui.button(delete).clicked() {
                    confirmed = true;
                }
                if ui.button("Cancelar").clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        state.confirm_delete();
    } else if !open || cancelled {
        state.close_dialog();
    }
}

#[inline]
fn detail_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.strong(label);
    ui.label(value);
    ui.end_row();
}
