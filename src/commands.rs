//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

use crate::import::{ImportKind, ImportSource};

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the UI
    Redraw,
    /// Write an autosave record to the key-value store
    Persist { content: String, saved_at: String },
    /// Read and convert a document in the background
    Import {
        kind: ImportKind,
        source: ImportSource,
    },
    /// Pack paragraphs as `.docx` and write them in the background
    Export {
        path: PathBuf,
        paragraphs: Vec<String>,
    },
    /// Put text on the host clipboard
    WriteClipboard(String),
    /// Fetch the host clipboard text for a paste
    ReadClipboard,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Persist { .. } => true,
            Cmd::Import { .. } => true,
            Cmd::Export { .. } => true,
            Cmd::WriteClipboard(_) => false,
            Cmd::ReadClipboard => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }
}
