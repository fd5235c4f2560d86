//! Shared color constants for the UI.

use egui::Color32;

/// Fill of the badge for active contracts.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 197, 94);

/// Fill of destructive badges.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Border of the badge for draft contracts.
pub const COLOR_YELLOW: Color32 = Color32::from_rgb(234, 179, 8);

/// Text of the badge for draft contracts, darker than the border for contrast.
pub const COLOR_YELLOW_TEXT: Color32 = Color32::from_rgb(202, 138, 4);
