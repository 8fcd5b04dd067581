//! View model types representing renderable checklist state.
//!
//! View models are computed by [`project`](crate::ui::projection::project)
//! and contain no business logic, only display-ready data.

use crate::app::modes::Mode;
use crate::domain::{Item, ItemId, DEFAULT_QUANTITY};

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub mode: Mode,

    /// Rows in display order. A single row while editing.
    pub rows: Vec<DisplayItem>,

    /// Highlighted item: the edited item, or the first match of a non-empty
    /// search.
    pub highlighted: Option<ItemId>,

    /// Text buffer line, present whenever a search state exists.
    pub status: Option<StatusLine>,
}

/// One row of the checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub id: ItemId,
    pub name: String,

    /// Name plus ` (n)` when the quantity is not the default.
    pub label: String,

    pub completed: bool,
    pub quantity: u32,
    pub priority: u32,
    pub is_highlighted: bool,
}

impl DisplayItem {
    #[must_use]
    pub fn from_item(item: &Item, is_highlighted: bool) -> Self {
        let label = if item.quantity == DEFAULT_QUANTITY {
            item.name.clone()
        } else {
            format!("{} ({})", item.name, item.quantity)
        };

        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            label,
            completed: item.completed,
            quantity: item.quantity,
            priority: item.priority,
            is_highlighted,
        }
    }
}

/// Text buffer display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// `true` when the buffer belongs to an edited item.
    pub editing: bool,
    pub text: String,
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = if self.editing { "Editing" } else { "Searching" };
        write!(f, "{prefix}: {}", self.text)
    }
}
