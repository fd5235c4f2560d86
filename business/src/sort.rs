//! Row ordering owned by the table.

use std::cmp::Ordering;

use crate::{Contract, ContractField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: ContractField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(field: ContractField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Next state after clicking the header of `field`.
    ///
    /// A column sorted ascending flips to descending; anything else
    /// (unsorted, descending, or sorted by another column) becomes ascending.
    pub fn toggle(current: Option<Self>, field: ContractField) -> Self {
        match current {
            Some(Self {
                field: current_field,
                direction: SortDirection::Ascending,
            }) if current_field == field => Self {
                field,
                direction: SortDirection::Descending,
            },
            _ => Self::ascending(field),
        }
    }

    /// Direction `field` is sorted in, if it is the sort column.
    pub fn direction_of(current: Option<Self>, field: ContractField) -> Option<SortDirection> {
        current
            .filter(|state| state.field == field)
            .map(|state| state.direction)
    }

    pub fn compare(&self, a: &Contract, b: &Contract) -> Ordering {
        let ordering = match self.field {
            ContractField::RentAmount => a.rent_amount.total_cmp(&b.rent_amount),
            field => a
                .text(field)
                .to_lowercase()
                .cmp(&b.text(field).to_lowercase()),
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Stable sort of `rows`; equal keys keep their relative order.
    pub fn apply(&self, rows: &mut [&Contract]) {
        rows.sort_by(|a, b| self.compare(a, b));
    }
}
