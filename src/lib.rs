//! Heartpad - Elm-style rich-text editor core
//!
//! A document tree that can hide selected text behind a heart glyph and
//! bring it back, plus plain text and Word import, Word export and
//! autosave to a local key-value store. The host drives the editor by
//! sending [`Msg`]s through [`update`](update::update) and executing the
//! resulting [`Cmd`]s, usually via [`runtime::Runtime`].

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod export;
pub mod import;
pub mod mask;
pub mod messages;
pub mod model;
pub mod persistence;
pub mod runtime;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use error::EditorError;
pub use messages::Msg;
pub use model::{AppModel, Document};
