//! Error types for the editor core

use thiserror::Error;

use crate::model::MaskId;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Nothing is selected")]
    EmptySelection,

    #[error("Selection is outside the document")]
    InvalidPosition,

    #[error("Nothing to toggle")]
    NothingToToggle,

    #[error("No hidden text with id {0}")]
    MaskNotFound(MaskId),

    #[error("Could not read document: {0}")]
    ImportDecode(String),

    #[error("Could not export document: {0}")]
    ExportFailure(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = EditorError> = std::result::Result<T, E>;
