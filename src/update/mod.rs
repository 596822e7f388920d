//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod mask;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::sync_status_bar;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::DocumentSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use document::update_document;
pub use mask::update_mask;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Document(m) => document::update_document(model, m),
        Msg::Mask(m) => mask::update_mask(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    };

    sync_status_bar(model);
    result
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after document shape and logs diffs for debugging.
/// Filters out noisy messages like Tick from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::AppMsg;

    // Skip logging for noisy periodic messages
    let is_noisy = matches!(&msg, Msg::App(AppMsg::Tick(_)));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = DocumentSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = DocumentSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "document", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Imported documents and clipboard text are summarized rather than dumped.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::AppMsg;

    match msg {
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Mask(m) => format!("Mask::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(AppMsg::ImportCompleted { kind, result }) => format!(
            "App::ImportCompleted({:?}, {})",
            kind,
            if result.is_ok() { "ok" } else { "err" }
        ),
        Msg::App(AppMsg::Import { kind, .. }) => format!("App::Import({:?})", kind),
        Msg::App(AppMsg::ClipboardRead(result)) => format!(
            "App::ClipboardRead({})",
            match result {
                Ok(text) => format!("{} chars", text.chars().count()),
                Err(_) => "err".to_string(),
            }
        ),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
