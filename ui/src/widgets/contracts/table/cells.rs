//! Cell rendering functions for the contracts table.

use contracts_business::{
    ACTIONS_MENU_TRIGGER, ActionMenu, Align, BadgeTone, BadgeVariant, ContractAction, MenuEntry,
    StatusBadge,
};
use egui::{
    Color32, Frame, Layout, Margin, RichText, Stroke, Ui, Visuals, WidgetInfo, WidgetType,
};

use crate::utils::colors::{COLOR_GREEN, COLOR_RED, COLOR_YELLOW, COLOR_YELLOW_TEXT};

/// Renders a plain text cell.
#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str, align: Align, emphasized: bool) {
    let text = if emphasized {
        RichText::new(text).strong()
    } else {
        RichText::new(text)
    };

    match align {
        Align::Left => {
            ui.label(text);
        }
        Align::Right => {
            ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(text);
            });
        }
    }
}

/// Fill, border and text colors of a badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeColors {
    pub fill: Color32,
    pub stroke: Color32,
    pub text: Color32,
}

/// Resolves badge colors against the current theme.
///
/// The tone, when present, overrides the variant's colors.
pub fn badge_colors(visuals: &Visuals, badge: StatusBadge) -> BadgeColors {
    match badge.tone {
        Some(BadgeTone::Success) => {
            return BadgeColors {
                fill: COLOR_GREEN,
                stroke: COLOR_GREEN,
                text: Color32::WHITE,
            };
        }
        Some(BadgeTone::Warning) => {
            return BadgeColors {
                fill: Color32::TRANSPARENT,
                stroke: COLOR_YELLOW,
                text: COLOR_YELLOW_TEXT,
            };
        }
        None => {}
    }

    match badge.variant {
        BadgeVariant::Default => BadgeColors {
            fill: visuals.selection.bg_fill,
            stroke: visuals.selection.bg_fill,
            text: visuals.strong_text_color(),
        },
        BadgeVariant::Secondary => BadgeColors {
            fill: visuals.widgets.inactive.weak_bg_fill,
            stroke: visuals.widgets.inactive.weak_bg_fill,
            text: visuals.text_color(),
        },
        BadgeVariant::Destructive => BadgeColors {
            fill: COLOR_RED,
            stroke: COLOR_RED,
            text: Color32::WHITE,
        },
        BadgeVariant::Outline => BadgeColors {
            fill: Color32::TRANSPARENT,
            stroke: visuals.widgets.noninteractive.bg_stroke.color,
            text: visuals.text_color(),
        },
    }
}

/// Renders the status badge with the label shown verbatim.
#[inline]
pub fn render_status_badge(ui: &mut Ui, label: &str, badge: StatusBadge) {
    let colors = badge_colors(ui.visuals(), badge);

    Frame::NONE
        .fill(colors.fill)
        .stroke(Stroke::new(1.0, colors.stroke))
        .corner_radius(8.0)
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(label).small().strong().color(colors.text));
        });
}

/// Renders the row action menu.
///
/// The trigger shows `⋯` but is announced to screen readers as
/// [`ACTIONS_MENU_TRIGGER`]. Returns the action picked this frame, if any.
#[inline]
pub fn render_actions_menu(ui: &mut Ui, menu: &ActionMenu) -> Option<ContractAction> {
    let mut picked = None;
    let enabled = ui.is_enabled();

    let response = ui.menu_button("⋯", |ui| {
        ui.label(RichText::new(menu.title()).strong());

        for entry in menu.entries() {
            match entry {
                MenuEntry::Separator => {
                    ui.separator();
                }
                MenuEntry::Item(item) => {
                    let mut text = RichText::new(item.label());
                    if item.is_destructive() {
                        text = text.color(ui.visuals().error_fg_color);
                    }
                    if ui.button(text).clicked() {
                        picked = Some(item.action());
                    }
                }
            }
        }
    });
    response
        .response
        .on_hover_text(ACTIONS_MENU_TRIGGER)
        .widget_info(|| WidgetInfo::labeled(WidgetType::Button, enabled, ACTIONS_MENU_TRIGGER));

    picked
}
