//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub(crate) mod range;
pub mod selection;
pub mod status_bar;
pub mod ui;

pub use document::{Document, Element, Mask, MaskId, MaskState, Node, Tag, MASK_GLYPH};
pub use selection::{Position, Selection};
pub use status_bar::{
    sync_status_bar, SegmentContent, SegmentId, SegmentPosition, StatusBar, StatusSegment,
    TransientMessage,
};
pub use ui::UiState;

use std::time::Instant;

use crate::config::EditorConfig;
use crate::mask::Visibility;
use crate::persistence::{AutosaveTimer, LoadedDocument};

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The single mutable document tree
    pub document: Document,
    /// Current selection, if any
    pub selection: Option<Selection>,
    /// Direction of the last bulk mask toggle
    pub visibility: Visibility,
    /// UI state (status bar, transient messages, derived flags)
    pub ui: UiState,
    /// Autosave schedule
    pub autosave: AutosaveTimer,
    /// Persisted editor configuration
    pub config: EditorConfig,
}

impl AppModel {
    /// Create an empty model with the given configuration
    pub fn new(config: EditorConfig) -> Self {
        let mut ui = UiState::new();
        ui.status_duration = config.status_duration();
        Self {
            document: Document::new(),
            selection: None,
            visibility: Visibility::default(),
            ui,
            autosave: AutosaveTimer::new(config.autosave_interval(), Instant::now()),
            config,
        }
    }

    /// Create a model around an existing document
    pub fn with_document(document: Document, config: EditorConfig) -> Self {
        let mut model = Self::new(config);
        model.document = document;
        model.refresh_empty();
        model
    }

    /// Hydrate from a stored autosave record
    pub fn restore(&mut self, loaded: LoadedDocument) {
        self.replace_document(loaded.document);
        self.ui.last_saved = loaded.saved_at;
    }

    /// Swap in a whole new document (import, restore)
    pub fn replace_document(&mut self, document: Document) {
        self.document.replace_with(document);
        self.selection = None;
        self.visibility = Visibility::default();
        self.refresh_empty();
    }

    /// Recompute the derived emptiness flag
    pub fn refresh_empty(&mut self) {
        self.ui.is_empty = self.document.is_empty();
    }

    pub fn is_empty(&self) -> bool {
        self.ui.is_empty
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
