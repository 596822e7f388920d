//! App message handlers (timers, autosave, import/export, clipboard)

use std::path::PathBuf;
use std::time::Instant;

use crate::commands::Cmd;
use crate::export::extract_paragraphs;
use crate::messages::{AppMsg, ClipboardAction};
use crate::model::AppModel;
use crate::persistence::AutosaveRecord;

use super::document::{delete_selection, insert_at_selection, selected_text};

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Tick(now) => {
            let expired = model.ui.expire_status(now);
            if model.autosave.is_due(now) {
                return persist(model, now);
            }
            expired.then_some(Cmd::Redraw)
        }

        AppMsg::SaveNow => persist(model, Instant::now()),

        AppMsg::SaveCompleted(result) => {
            match result {
                Ok(saved_at) => {
                    model.ui.set_status("Saved automatically \u{2728}");
                    model.ui.last_saved = Some(saved_at);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "autosave failed");
                    model.ui.set_status(format!("Save failed: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Import { kind, source } => {
            model.ui.is_importing = true;
            model.ui.set_status(format!("Importing {}...", kind.label()));
            Some(Cmd::Import { kind, source })
        }

        AppMsg::ImportCompleted { kind, result } => {
            model.ui.is_importing = false;
            match result {
                Ok(document) => {
                    model.replace_document(document);
                    model.ui.set_status(format!("{} imported!", kind.label()));
                }
                Err(e) => {
                    tracing::warn!(?kind, error = %e, "import failed");
                    model.ui.set_status("Import failed, please try again");
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Export { path } => {
            let path = path.unwrap_or_else(|| PathBuf::from(&model.config.export_file_name));
            let paragraphs = extract_paragraphs(&model.document);
            model.ui.is_exporting = true;
            model.ui.set_status("Exporting...");
            Some(Cmd::Export { path, paragraphs })
        }

        AppMsg::ExportCompleted { path, result } => {
            model.ui.is_exporting = false;
            match result {
                Ok(()) => model.ui.set_status(format!("Exported: {}", path.display())),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "export failed");
                    model.ui.set_status(format!("Export failed: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Clipboard(ClipboardAction::Paste) => Some(Cmd::ReadClipboard),

        AppMsg::Clipboard(action) => {
            let text = match selected_text(model) {
                Ok(text) => text,
                Err(e) => {
                    model.ui.set_status(e.to_string());
                    return Some(Cmd::Redraw);
                }
            };
            if action == ClipboardAction::Cut {
                if let Err(e) = delete_selection(model) {
                    model.ui.set_status(e.to_string());
                    return Some(Cmd::Redraw);
                }
                model.refresh_empty();
            }
            model.ui.set_status(action.label());
            Some(Cmd::batch(vec![Cmd::WriteClipboard(text), Cmd::Redraw]))
        }

        AppMsg::ClipboardRead(result) => {
            match result {
                Ok(text) if text.is_empty() => model.ui.set_status("Clipboard is empty"),
                Ok(text) => match insert_at_selection(model, &text) {
                    Ok(()) => model.ui.set_status(ClipboardAction::Paste.label()),
                    Err(e) => model.ui.set_status(e.to_string()),
                },
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard read failed");
                    model.ui.set_status(format!("Clipboard unavailable: {}", e));
                }
            }
            model.refresh_empty();
            Some(Cmd::Redraw)
        }
    }
}

/// Snapshot the document for the store and restart the autosave interval
fn persist(model: &mut AppModel, now: Instant) -> Option<Cmd> {
    model.autosave.mark(now);
    match AutosaveRecord::capture(&model.document) {
        Ok(record) => Some(Cmd::Persist {
            content: record.content,
            saved_at: record.saved_at,
        }),
        Err(e) => {
            model.ui.set_status(format!("Save failed: {}", e));
            Some(Cmd::Redraw)
        }
    }
}
