//! Import adapters - external formats to the document tree
//!
//! Both adapters build a fresh [`Document`]; the caller swaps it in wholesale.
//! A failed conversion returns an error and the caller keeps its tree.

mod docx;
mod plain;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::Document;

pub use docx::rich_document;
pub use plain::plain_text;

/// Supported import formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// Line-oriented UTF-8 text
    PlainText,
    /// Word `.docx`
    RichDocument,
}

impl ImportKind {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" | "text" | "md" => Some(ImportKind::PlainText),
            "docx" => Some(ImportKind::RichDocument),
            _ => None,
        }
    }

    pub fn convert(self, bytes: &[u8]) -> Result<Document> {
        match self {
            ImportKind::PlainText => plain_text(bytes),
            ImportKind::RichDocument => rich_document(bytes),
        }
    }

    /// Human-readable format name for status messages
    pub fn label(self) -> &'static str {
        match self {
            ImportKind::PlainText => "Text",
            ImportKind::RichDocument => "Word document",
        }
    }
}

/// Where the bytes to import come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource {
    /// Read from disk by the runtime
    Path(PathBuf),
    /// Already in memory (e.g. handed over by a file picker)
    Bytes(Vec<u8>),
}
