use crate::content::ContentKind;
use uuid::Uuid;

/// State transitions emitted by components and consumed by the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    SelectTab(ContentKind),
    NextItem,
    PreviousItem,

    // Item operations
    AddItem { title: String, description: String },
    BeginEdit(Uuid),
    SaveEdit { id: Uuid, title: String, description: String },
    CancelEdit,
    DeleteItem(Uuid),

    // Form focus
    FocusForm,
    BlurForm,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

/// Overlays rendered on top of the main layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
