//! Column factory for the contracts table.
//!
//! [`columns`] turns the edit/delete handlers and the current [`UserRole`]
//! into an ordered list of [`ContractColumn`]s. The table widget only has to
//! lay them out: every column knows its header and how to turn a row into a
//! [`Cell`]. The list depends on the role alone, never on row data.

use std::fmt;
use std::sync::Arc;

use crate::{Contract, ContractField, StatusBadge, UserRole, format_currency, format_date};

/// Callback invoked with the contract of the row an action was picked on.
pub type ContractHandler = Arc<dyn Fn(&Contract) + Send + Sync>;

/// Title shown at the top of the row action menu.
pub const ACTIONS_MENU_TITLE: &str = "Acciones";

/// Accessible name of the button opening the row action menu.
pub const ACTIONS_MENU_TRIGGER: &str = "Abrir menú";

/// Inputs of the column factory.
#[derive(Clone)]
pub struct ColumnsConfig {
    pub on_edit: ContractHandler,
    pub on_delete: ContractHandler,
    pub user_role: UserRole,
}

impl ColumnsConfig {
    pub fn new(
        on_edit: impl Fn(&Contract) + Send + Sync + 'static,
        on_delete: impl Fn(&Contract) + Send + Sync + 'static,
        user_role: UserRole,
    ) -> Self {
        Self {
            on_edit: Arc::new(on_edit),
            on_delete: Arc::new(on_delete),
            user_role,
        }
    }
}

impl fmt::Debug for ColumnsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnsConfig")
            .field("user_role", &self.user_role)
            .finish_non_exhaustive()
    }
}

/// Identity of a column: a contract field or a synthetic id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    Field(ContractField),
    Actions,
}

impl ColumnId {
    pub fn key(self) -> &'static str {
        match self {
            Self::Field(field) => field.key(),
            Self::Actions => "actions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnHeader {
    Empty,
    Label { text: &'static str, align: Align },
    /// Clickable label toggling the sort order of its column.
    Sortable { text: &'static str },
}

impl ColumnHeader {
    const fn label(text: &'static str) -> Self {
        Self::Label {
            text,
            align: Align::Left,
        }
    }

    pub fn text(self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Label { text, .. } | Self::Sortable { text } => Some(text),
        }
    }
}

/// Rendered content of one table cell.
#[derive(Debug)]
pub enum Cell {
    Text {
        text: String,
        align: Align,
        emphasized: bool,
    },
    Badge {
        label: String,
        badge: StatusBadge,
    },
    Actions(ActionMenu),
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            align: Align::Left,
            emphasized: false,
        }
    }

    /// Visible text of a text or badge cell.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            Self::Badge { label, .. } => Some(label),
            Self::Actions(_) => None,
        }
    }
}

#[derive(Clone)]
enum CellRenderer {
    Text,
    Date,
    Currency,
    StatusBadge,
    Actions(ActionsTemplate),
}

/// One column of the contracts table.
#[derive(Clone)]
pub struct ContractColumn {
    id: ColumnId,
    header: ColumnHeader,
    renderer: CellRenderer,
}

impl ContractColumn {
    pub fn id(&self) -> ColumnId {
        self.id
    }

    pub fn header(&self) -> ColumnHeader {
        self.header
    }

    /// The contract field this column reads, if any.
    pub fn field(&self) -> Option<ContractField> {
        match self.id {
            ColumnId::Field(field) => Some(field),
            ColumnId::Actions => None,
        }
    }

    pub fn is_sortable(&self) -> bool {
        matches!(self.header, ColumnHeader::Sortable { .. })
    }

    /// Renders the cell of this column for `contract`.
    pub fn cell(&self, contract: &Contract) -> Cell {
        match (&self.renderer, self.id) {
            (CellRenderer::Actions(template), _) => Cell::Actions(template.menu()),
            (_, ColumnId::Actions) => Cell::plain(""),
            (CellRenderer::Text, ColumnId::Field(field)) => Cell::plain(contract.text(field)),
            (CellRenderer::Date, ColumnId::Field(field)) => {
                Cell::plain(format_date(&contract.text(field)))
            }
            (CellRenderer::Currency, ColumnId::Field(_)) => Cell::Text {
                text: format_currency(contract.rent_amount),
                align: Align::Right,
                emphasized: true,
            },
            (CellRenderer::StatusBadge, ColumnId::Field(_)) => Cell::Badge {
                label: contract.status.label().to_owned(),
                badge: contract.status.badge(),
            },
        }
    }
}

impl fmt::Debug for ContractColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractColumn")
            .field("id", &self.id)
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

/// Builds the contracts table columns, in display order.
pub fn columns(config: &ColumnsConfig) -> Vec<ContractColumn> {
    let counterparty = config.user_role.counterparty();

    vec![
        ContractColumn {
            id: ColumnId::Field(ContractField::PropertyAddress),
            header: ColumnHeader::label("Propiedad"),
            renderer: CellRenderer::Text,
        },
        ContractColumn {
            id: ColumnId::Field(counterparty.field),
            header: ColumnHeader::Sortable {
                text: counterparty.label,
            },
            renderer: CellRenderer::Text,
        },
        ContractColumn {
            id: ColumnId::Field(ContractField::StartDate),
            header: ColumnHeader::label("Inicio"),
            renderer: CellRenderer::Date,
        },
        ContractColumn {
            id: ColumnId::Field(ContractField::EndDate),
            header: ColumnHeader::label("Fin"),
            renderer: CellRenderer::Date,
        },
        ContractColumn {
            id: ColumnId::Field(ContractField::RentAmount),
            header: ColumnHeader::Label {
                text: "Monto (CLP)",
                align: Align::Right,
            },
            renderer: CellRenderer::Currency,
        },
        ContractColumn {
            id: ColumnId::Field(ContractField::Status),
            header: ColumnHeader::label("Estado"),
            renderer: CellRenderer::StatusBadge,
        },
        ContractColumn {
            id: ColumnId::Actions,
            header: ColumnHeader::Empty,
            renderer: CellRenderer::Actions(ActionsTemplate::from(config)),
        },
    ]
}

/// Actions offered in a row menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractAction {
    View,
    Edit,
    Delete,
}

impl ContractAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::View => "Ver Contrato",
            Self::Edit => "Editar",
            Self::Delete => "Eliminar",
        }
    }
}

/// Role-dependent part of the actions column, shared by every row.
#[derive(Clone)]
struct ActionsTemplate {
    manage: Option<(ContractHandler, ContractHandler)>,
}

impl From<&ColumnsConfig> for ActionsTemplate {
    fn from(config: &ColumnsConfig) -> Self {
        let manage = config
            .user_role
            .is_landlord()
            .then(|| (config.on_edit.clone(), config.on_delete.clone()));
        Self { manage }
    }
}

impl ActionsTemplate {
    fn menu(&self) -> ActionMenu {
        // Viewing has no handler yet; the entry is shown regardless.
        let mut entries = vec![MenuEntry::Item(MenuItem {
            action: ContractAction::View,
            destructive: false,
            handler: None,
        })];

        if let Some((on_edit, on_delete)) = &self.manage {
            entries.push(MenuEntry::Item(MenuItem {
                action: ContractAction::Edit,
                destructive: false,
                handler: Some(on_edit.clone()),
            }));
            entries.push(MenuEntry::Separator);
            entries.push(MenuEntry::Item(MenuItem {
                action: ContractAction::Delete,
                destructive: true,
                handler: Some(on_delete.clone()),
            }));
        }

        ActionMenu { entries }
    }
}

#[derive(Debug)]
pub enum MenuEntry {
    Item(MenuItem),
    Separator,
}

pub struct MenuItem {
    action: ContractAction,
    destructive: bool,
    handler: Option<ContractHandler>,
}

impl MenuItem {
    pub fn action(&self) -> ContractAction {
        self.action
    }

    pub fn label(&self) -> &'static str {
        self.action.label()
    }

    pub fn is_destructive(&self) -> bool {
        self.destructive
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Runs the item's handler with `contract`. Returns `false` for items
    /// without one.
    pub fn activate(&self, contract: &Contract) -> bool {
        match &self.handler {
            Some(handler) => {
                handler(contract);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("action", &self.action)
            .field("destructive", &self.destructive)
            .field("has_handler", &self.has_handler())
            .finish()
    }
}

/// Row action menu content.
#[derive(Debug)]
pub struct ActionMenu {
    entries: Vec<MenuEntry>,
}

impl ActionMenu {
    pub fn title(&self) -> &'static str {
        ACTIONS_MENU_TITLE
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Separator => None,
        })
    }

    pub fn item(&self, action: ContractAction) -> Option<&MenuItem> {
        self.items().find(|item| item.action == action)
    }

    /// Activates `action` for `contract`. Returns whether a handler ran.
    pub fn activate(&self, action: ContractAction, contract: &Contract) -> bool {
        self.item(action).is_some_and(|item| item.activate(contract))
    }
}
