//! Runtime - executes commands and feeds their results back as messages
//!
//! The host owns the event loop. It calls [`Runtime::dispatch`] for user
//! intents and [`Runtime::pump`] (or [`Runtime::wait`]) to apply results from
//! background workers. Store writes happen inline; import and export run on
//! worker threads and report back over an mpsc channel.

mod clipboard;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};

use std::path::Path;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use anyhow::Context;

use crate::commands::Cmd;
use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::export::to_docx;
use crate::import::{ImportKind, ImportSource};
use crate::messages::{AppMsg, Msg, UiMsg};
use crate::model::{AppModel, Document};
use crate::persistence::{self, AutosaveRecord, FileStore, KeyValueStore};
use crate::update::update;

/// Command executor bound to a key-value store and a host clipboard
pub struct Runtime<S: KeyValueStore> {
    store: S,
    clipboard: Box<dyn Clipboard>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    status_duration_ms: u64,
}

impl<S: KeyValueStore> Runtime<S> {
    pub fn new(store: S) -> Self {
        Self::with_clipboard(store, Box::new(SystemClipboard))
    }

    pub fn with_clipboard(store: S, clipboard: Box<dyn Clipboard>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            store,
            clipboard,
            msg_tx,
            msg_rx,
            status_duration_ms: 3000,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Hydrate the model from the store at startup.
    ///
    /// Unreadable content is logged and the model keeps its empty tree.
    pub fn boot(&mut self, model: &mut AppModel) {
        self.status_duration_ms = model.config.status_duration_ms;
        match persistence::load(&self.store) {
            Ok(Some(loaded)) => {
                tracing::info!(blocks = loaded.document.children.len(), "restored saved document");
                model.restore(loaded);
            }
            Ok(None) => tracing::debug!("no saved document"),
            Err(e) => tracing::warn!(error = %e, "could not restore saved document"),
        }
        model.refresh_empty();
    }

    /// Run one message through `update` and execute the resulting command.
    /// Returns true if the host should redraw.
    pub fn dispatch(&mut self, model: &mut AppModel, msg: Msg) -> bool {
        match update(model, msg) {
            Some(cmd) => {
                let redraw = cmd.needs_redraw();
                self.process_cmd(cmd);
                redraw
            }
            None => false,
        }
    }

    /// Apply every message already waiting on the channel
    pub fn pump(&mut self, model: &mut AppModel) -> bool {
        let mut redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            redraw |= self.dispatch(model, msg);
        }
        redraw
    }

    /// Block until a worker reports back (or `timeout` passes), then pump.
    /// Returns false if nothing arrived in time.
    pub fn wait(&mut self, model: &mut AppModel, timeout: Duration) -> bool {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(model, msg);
                self.pump(model);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::Persist { content, saved_at } => {
                let record = AutosaveRecord { content, saved_at };
                let result = record
                    .write_to(&mut self.store)
                    .map(|()| record.saved_at.clone())
                    .map_err(|e| e.to_string());
                let _ = self.msg_tx.send(Msg::App(AppMsg::SaveCompleted(result)));
            }
            Cmd::Import { kind, source } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = read_import(kind, source).map_err(|e| format!("{:#}", e));
                    let _ = tx.send(Msg::App(AppMsg::ImportCompleted { kind, result }));
                });
            }
            Cmd::Export { path, paragraphs } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result =
                        write_export(&path, &paragraphs).map_err(|e| format!("{:#}", e));
                    let _ = tx.send(Msg::App(AppMsg::ExportCompleted { path, result }));
                });
            }
            Cmd::WriteClipboard(text) => {
                if let Err(e) = self.clipboard.set_text(&text) {
                    tracing::warn!(error = %e, "clipboard write failed");
                    let _ = self.msg_tx.send(Msg::Ui(UiMsg::SetTransientMessage {
                        text: format!("Clipboard unavailable: {}", e),
                        duration_ms: self.status_duration_ms,
                    }));
                }
            }
            Cmd::ReadClipboard => {
                let result = self.clipboard.get_text();
                let _ = self.msg_tx.send(Msg::App(AppMsg::ClipboardRead(result)));
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}

fn read_import(kind: ImportKind, source: ImportSource) -> anyhow::Result<Document> {
    let bytes = match source {
        ImportSource::Path(path) => {
            std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?
        }
        ImportSource::Bytes(bytes) => bytes,
    };
    let document = kind
        .convert(&bytes)
        .with_context(|| format!("converting {}", kind.label()))?;
    Ok(document)
}

fn write_export(path: &Path, paragraphs: &[String]) -> anyhow::Result<()> {
    let bytes = to_docx(paragraphs)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), paragraphs = paragraphs.len(), "exported");
    Ok(())
}

impl Runtime<FileStore> {
    /// Open the file store named by the configuration
    pub fn open(config: &EditorConfig) -> Result<Self> {
        let path = config.storage_path().ok_or_else(|| {
            EditorError::Storage("no config directory for the store".to_string())
        })?;
        tracing::debug!(path = %path.display(), "opening store");
        Ok(Self::new(FileStore::open(path)?))
    }
}
