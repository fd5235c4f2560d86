//! Table header rendering for the contracts table.

use contracts_business::{
    Align, ColumnHeader, ContractColumn, ContractField, SortDirection, SortState,
};
use egui::{Button, Layout, RichText, Ui};
use egui_extras::TableRow;

/// Renders the header row.
///
/// Returns the field whose sortable header was clicked, if any.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    columns: &[ContractColumn],
    sort: Option<SortState>,
) -> Option<ContractField> {
    let mut clicked = None;

    for column in columns {
        header.col(|ui| match column.header() {
            ColumnHeader::Empty => {}
            ColumnHeader::Label { text, align } => render_header_label(ui, text, align),
            ColumnHeader::Sortable { text } => {
                let direction = column
                    .field()
                    .and_then(|field| SortState::direction_of(sort, field));
                if render_sortable_header(ui, text, direction) {
                    clicked = column.field();
                }
            }
        });
    }

    clicked
}

#[inline]
fn render_header_label(ui: &mut Ui, text: &str, align: Align) {
    match align {
        Align::Left => {
            ui.strong(text);
        }
        Align::Right => {
            ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                ui.strong(text);
            });
        }
    }
}

/// Renders a frameless header button with a sort indicator.
///
/// Returns `true` if it was clicked.
#[inline]
fn render_sortable_header(ui: &mut Ui, text: &str, direction: Option<SortDirection>) -> bool {
    let label = format!("{text} {}", sort_indicator(direction));
    ui.add(Button::new(RichText::new(label).strong()).frame(false))
        .on_hover_text("Ordenar")
        .clicked()
}

#[inline]
fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        None => "⬍",
        Some(SortDirection::Ascending) => "⬆",
        Some(SortDirection::Descending) => "⬇",
    }
}
