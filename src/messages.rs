//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;
use std::time::Instant;

use crate::import::{ImportKind, ImportSource};
use crate::model::{Document, MaskId, Selection};

/// Document editing messages (selection, typing)
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// Set the current selection (from the host's caret/selection)
    SetSelection(Selection),
    /// Drop the selection
    ClearSelection,
    /// Type text at the selection, replacing it if non-empty
    InsertText(String),
    /// Delete the selected range
    DeleteSelection,
    /// Remove all content
    Clear,
}

/// Masking messages
#[derive(Debug, Clone)]
pub enum MaskMsg {
    /// Hide the selected text behind the heart glyph
    HideSelection,
    /// Restore one concealed mask as plain text (click on the heart)
    RestoreMask(MaskId),
    /// Reveal all or conceal all, depending on the last direction
    ToggleAll,
}

/// UI-specific messages (status bar)
#[derive(Debug, Clone)]
pub enum UiMsg {
    /// Set a transient message that auto-expires
    SetTransientMessage { text: String, duration_ms: u64 },
    /// Clear the transient message
    ClearTransientMessage,
}

/// Clipboard operations on the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardAction {
    Copy,
    Cut,
    Paste,
}

impl ClipboardAction {
    /// Past-tense label for status messages
    pub fn label(self) -> &'static str {
        match self {
            ClipboardAction::Copy => "Copied",
            ClipboardAction::Cut => "Cut",
            ClipboardAction::Paste => "Pasted",
        }
    }
}

/// Application-level messages (timers, persistence, file I/O)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Timer tick: expires status messages and drives autosave
    Tick(Instant),
    /// Save immediately
    SaveNow,
    /// Store write completed (saved-at time or error)
    SaveCompleted(Result<String, String>),
    /// Import a document, replacing the current one
    Import {
        kind: ImportKind,
        source: ImportSource,
    },
    /// Import conversion completed (async result)
    ImportCompleted {
        kind: ImportKind,
        result: Result<Document, String>,
    },
    /// Export to Word; `None` uses the configured file name
    Export { path: Option<PathBuf> },
    /// Export packing completed (async result)
    ExportCompleted {
        path: PathBuf,
        result: Result<(), String>,
    },
    /// Copy/cut/paste via the host clipboard
    Clipboard(ClipboardAction),
    /// Clipboard text arrived for a paste (async result)
    ClipboardRead(Result<String, String>),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Document messages (selection, typing)
    Document(DocumentMsg),
    /// Mask messages (hide, restore, toggle)
    Mask(MaskMsg),
    /// UI messages (status)
    Ui(UiMsg),
    /// App messages (timers, persistence, file I/O)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn select(selection: Selection) -> Self {
        Msg::Document(DocumentMsg::SetSelection(selection))
    }

    pub fn insert_text(text: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::InsertText(text.into()))
    }

    pub fn hide_selection() -> Self {
        Msg::Mask(MaskMsg::HideSelection)
    }

    pub fn restore_mask(id: MaskId) -> Self {
        Msg::Mask(MaskMsg::RestoreMask(id))
    }

    pub fn toggle_all() -> Self {
        Msg::Mask(MaskMsg::ToggleAll)
    }

    pub fn tick(now: Instant) -> Self {
        Msg::App(AppMsg::Tick(now))
    }
}
