pub mod contracts;

pub use contracts::{contracts_panel, role_selector};
