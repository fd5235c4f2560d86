//! Visual treatment of the contract status badge.

use crate::ContractStatus;

/// Base look of a badge, mirroring the design-system badge variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Filled with the primary color.
    Default,
    Secondary,
    Destructive,
    /// Border only, no fill.
    Outline,
}

/// Extra color treatment layered over the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    /// Green fill with white text.
    Success,
    /// Yellow border and text.
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub variant: BadgeVariant,
    pub tone: Option<BadgeTone>,
}

impl StatusBadge {
    const fn new(variant: BadgeVariant, tone: Option<BadgeTone>) -> Self {
        Self { variant, tone }
    }

    /// Used for any status without a dedicated treatment.
    pub const FALLBACK: Self = Self::new(BadgeVariant::Secondary, None);
}

impl ContractStatus {
    pub fn badge(&self) -> StatusBadge {
        match self {
            Self::Active => StatusBadge::new(BadgeVariant::Default, Some(BadgeTone::Success)),
            Self::Draft => StatusBadge::new(BadgeVariant::Outline, Some(BadgeTone::Warning)),
            Self::Finished => StatusBadge::new(BadgeVariant::Secondary, None),
            Self::Cancelled => StatusBadge::new(BadgeVariant::Destructive, None),
            Self::Other(_) => StatusBadge::FALLBACK,
        }
    }
}
