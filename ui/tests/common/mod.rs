use contracts_business::{Cell, ContractAction, UserRole, sample_contracts};
use contracts_ui::state::State;
use contracts_ui::widgets::contracts_panel;
use egui_kittest::Harness;

/// Frames to run after an interaction so windows finish their sizing pass.
const SETTLE_FRAMES: usize = 4;

pub struct TestCtx<'a> {
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// Harness rendering the contracts panel over the sample contracts.
    pub fn new(role: UserRole) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let state = State::new(sample_contracts(), role);
        let mut harness = Harness::new_ui_state(contracts_panel, state);
        harness.step();

        Self { harness }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, State> {
        &self.harness
    }

    /// Runs enough frames for events and dialogs to show up.
    pub fn settle(&mut self) {
        for _ in 0..SETTLE_FRAMES {
            self.harness.step();
        }
    }

    /// Picks `action` from the row menu of contract number `row`, the way
    /// a click on the menu item would.
    #[allow(unused)]
    pub fn pick_action(&mut self, row: usize, action: ContractAction) -> bool {
        let state = self.harness.state();
        let contract = state.contracts()[row].clone();
        let columns = state.columns();

        let ran = match columns.last().map(|column| column.cell(&contract)) {
            Some(Cell::Actions(menu)) => menu.activate(action, &contract),
            other => panic!("expected actions cell, got {other:?}"),
        };
        self.settle();
        ran
    }
}
