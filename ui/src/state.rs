use contracts_business::{
    ColumnsConfig, Contract, ContractColumn, ContractField, LoadError, SortState, UserRole,
    ViewerConfig, columns, load_contracts, sample_contracts,
};

/// Requests raised by the row action handlers, drained once per frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ContractEvent {
    Edit(Contract),
    Delete(Contract),
}

/// Dialog currently shown over the contracts table.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContractDialog {
    #[default]
    None,
    Edit(Contract),
    ConfirmDelete(Contract),
}

/// The viewer state.
///
/// Edit/delete handlers handed to the column factory only send a
/// [`ContractEvent`]; the state applies them in [`State::poll_events`] so
/// handlers never need a borrow of the state itself.
pub struct State {
    contracts: Vec<Contract>,
    role: UserRole,
    sort: Option<SortState>,
    dialog: ContractDialog,
    event_sender: flume::Sender<ContractEvent>,
    event_receiver: flume::Receiver<ContractEvent>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(sample_contracts(), UserRole::default())
    }
}

impl State {
    pub fn new(contracts: Vec<Contract>, role: UserRole) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();

        Self {
            contracts,
            role,
            sort: None,
            dialog: ContractDialog::None,
            event_sender,
            event_receiver,
        }
    }

    /// Builds the state from the configured contracts file, or sample data.
    pub fn from_config(config: &ViewerConfig) -> Result<Self, LoadError> {
        let contracts = match config.contracts_file() {
            Some(path) => load_contracts(path)?,
            None => {
                log::info!("No contracts file configured, showing sample contracts");
                sample_contracts()
            }
        };
        Ok(Self::new(contracts, config.role()))
    }

    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Switches the viewing role.
    ///
    /// The counterparty column changes with the role, so a sort on the old
    /// counterparty field is dropped.
    pub fn set_role(&mut self, role: UserRole) {
        if role == self.role {
            return;
        }
        log::debug!("Switching role from {} to {role}", self.role);
        self.role = role;
        if self
            .sort
            .is_some_and(|sort| sort.field != role.counterparty().field)
        {
            self.sort = None;
        }
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn toggle_sort(&mut self, field: ContractField) {
        let sort = SortState::toggle(self.sort, field);
        log::debug!("Sorting contracts by {} {:?}", sort.field, sort.direction);
        self.sort = Some(sort);
    }

    /// Contracts in display order.
    pub fn visible_rows(&self) -> Vec<&Contract> {
        let mut rows: Vec<&Contract> = self.contracts.iter().collect();
        if let Some(sort) = self.sort {
            sort.apply(&mut rows);
        }
        rows
    }

    /// Factory inputs for the current role, wired to this state's events.
    pub fn columns_config(&self) -> ColumnsConfig {
        let edit_sender = self.event_sender.clone();
        let delete_sender = self.event_sender.clone();

        ColumnsConfig::new(
            move |contract| send_event(&edit_sender, ContractEvent::Edit(contract.clone())),
            move |contract| send_event(&delete_sender, ContractEvent::Delete(contract.clone())),
            self.role,
        )
    }

    pub fn columns(&self) -> Vec<ContractColumn> {
        columns(&self.columns_config())
    }

    /// Applies pending handler events. The last event of a frame wins.
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dialog = match event {
                ContractEvent::Edit(contract) => {
                    log::info!("Editing contract {}", contract.id);
                    ContractDialog::Edit(contract)
                }
                ContractEvent::Delete(contract) => {
                    log::info!("Asking to delete contract {}", contract.id);
                    ContractDialog::ConfirmDelete(contract)
                }
            };
        }
    }

    pub fn dialog(&self) -> &ContractDialog {
        &self.dialog
    }

    pub fn close_dialog(&mut self) {
        self.dialog = ContractDialog::None;
    }

    /// Removes the contract awaiting delete confirmation. Only one row is
    /// removed, even if another row shares its id.
    pub fn confirm_delete(&mut self) {
        if !matches!(self.dialog, ContractDialog::ConfirmDelete(_)) {
            return;
        }
        let ContractDialog::ConfirmDelete(contract) = std::mem::take(&mut self.dialog) else {
            return;
        };
        let position = self
            .contracts
            .iter()
            .position(|c| *c == contract)
            .or_else(|| self.contracts.iter().position(|c| c.id == contract.id));
        match position {
            Some(index) => {
                self.contracts.remove(index);
                log::info!("Deleted contract {}", contract.id);
            }
            None => log::warn!("Contract {} was already gone", contract.id),
        }
    }
}

fn send_event(sender: &flume::Sender<ContractEvent>, event: ContractEvent) {
    if let Err(err) = sender.send(event) {
        log::warn!("Dropping contract event, viewer is gone: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts_business::{Cell, ContractAction, SortDirection};

    fn activate(state: &State, row: usize, action: ContractAction) -> bool {
        let columns = state.columns();
        let contract = &state.contracts()[row];
        match columns.last().map(|c| c.cell(contract)) {
            Some(Cell::Actions(menu)) => menu.activate(action, contract),
            other => panic!("expected actions cell, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_handler_opens_edit_dialog() {
        let mut state = State::default();
        assert!(activate(&state, 1, ContractAction::Edit), "edit should run");
        assert_eq!(state.dialog(), &ContractDialog::None, "events apply on poll");

        state.poll_events();
        assert_eq!(
            state.dialog(),
            &ContractDialog::Edit(state.contracts()[1].clone())
        );
    }

    #[test]
    fn test_delete_flow_removes_contract() {
        let mut state = State::default();
        let target = state.contracts()[0].id.clone();

        assert!(activate(&state, 0, ContractAction::Delete), "delete should run");
        state.poll_events();
        assert!(
            matches!(state.dialog(), ContractDialog::ConfirmDelete(c) if c.id == target),
            "delete should ask for confirmation"
        );

        state.confirm_delete();
        assert_eq!(state.dialog(), &ContractDialog::None);
        assert!(
            state.contracts().iter().all(|c| c.id != target),
            "contract should be removed"
        );
        assert_eq!(state.contracts().len(), sample_contracts().len() - 1);
    }

    #[test]
    fn test_delete_removes_only_the_picked_row() {
        let mut contracts = sample_contracts();
        contracts[1].id = contracts[0].id.clone();
        let mut state = State::new(contracts, UserRole::Landlord);

        assert!(activate(&state, 1, ContractAction::Delete), "delete should run");
        state.poll_events();
        state.confirm_delete();

        let tenants: Vec<_> = state
            .contracts()
            .iter()
            .map(|c| c.tenant_name.as_str())
            .collect();
        assert_eq!(tenants, ["Camila Fuentes", "Josefa Muñoz", "Benjamín Torres"]);
    }

    #[test]
    fn test_confirm_without_pending_delete_is_noop() {
        let mut state = State::default();
        state.confirm_delete();
        assert_eq!(state.contracts().len(), sample_contracts().len());
    }

    #[test]
    fn test_tenant_cannot_raise_events() {
        let mut state = State::new(sample_contracts(), UserRole::Tenant);
        assert!(!activate(&state, 0, ContractAction::Edit), "no edit for tenant");
        assert!(
            !activate(&state, 0, ContractAction::Delete),
            "no delete for tenant"
        );
        state.poll_events();
        assert_eq!(state.dialog(), &ContractDialog::None);
    }

    #[test]
    fn test_role_change_drops_stale_sort() {
        let mut state = State::default();
        state.toggle_sort(ContractField::TenantName);
        assert_eq!(
            state.sort().map(|s| s.direction),
            Some(SortDirection::Ascending)
        );

        state.set_role(UserRole::Tenant);
        assert_eq!(state.sort(), None);
    }

    #[test]
    fn test_visible_rows_follow_sort() {
        let mut state = State::default();
        state.toggle_sort(ContractField::TenantName);
        let tenants: Vec<_> = state
            .visible_rows()
            .iter()
            .map(|c| c.tenant_name.as_str())
            .collect();
        assert_eq!(
            tenants,
            ["Benjamín Torres", "Camila Fuentes", "Josefa Muñoz", "Matías Araya"]
        );

        state.toggle_sort(ContractField::TenantName);
        let first = state.visible_rows()[0].tenant_name.clone();
        assert_eq!(first, "Matías Araya");
    }
}
