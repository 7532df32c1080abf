//! UI Components
//!
//! Reusable Leptos components for the closet views.

mod account_panel;
mod add_item_form;
mod checklist;
mod header;
mod selection_display;

pub use account_panel::AccountPanel;
pub use add_item_form::AddItemForm;
pub use checklist::Checklist;
pub use header::Header;
pub use selection_display::SelectionDisplay;

/// Which modal overlay is currently shown.
///
/// A single enum rather than independent booleans: the add-item form and
/// the account panel can never be open at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    AddItem,
    Account,
}
