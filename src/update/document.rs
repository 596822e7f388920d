//! Document message handlers (selection, typing)

use crate::commands::Cmd;
use crate::error::EditorError;
use crate::messages::DocumentMsg;
use crate::model::range::{
    inline_nodes, insert_text, normalize_range, replace_range, visible_text_between,
};
use crate::model::{AppModel, Node, Position, Selection};

/// Handle document messages
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::SetSelection(selection) => {
            model.selection = Some(selection);
            Some(Cmd::Redraw)
        }

        DocumentMsg::ClearSelection => {
            model.selection = None;
            Some(Cmd::Redraw)
        }

        DocumentMsg::InsertText(text) => {
            if let Err(e) = insert_at_selection(model, &text) {
                model.ui.set_status(e.to_string());
            }
            model.refresh_empty();
            Some(Cmd::Redraw)
        }

        DocumentMsg::DeleteSelection => {
            if let Err(e) = delete_selection(model) {
                model.ui.set_status(e.to_string());
            }
            model.refresh_empty();
            Some(Cmd::Redraw)
        }

        DocumentMsg::Clear => {
            model.document.clear();
            model.selection = None;
            model.refresh_empty();
            model.ui.set_status("Cleared");
            Some(Cmd::Redraw)
        }
    }
}

/// Type over the selection, or append at the end without one.
/// Leaves a collapsed selection after the inserted text.
pub(super) fn insert_at_selection(model: &mut AppModel, text: &str) -> Result<(), EditorError> {
    let doc = &mut model.document;
    let caret = match model.selection {
        Some(selection) if !selection.is_empty() => {
            let (start, end) = normalize_range(doc, selection.start(), selection.end())?;
            let nodes = inline_nodes(text);
            let inserted: usize = nodes.iter().map(Node::visible_len).sum();
            replace_range(doc, start, end, nodes);
            Position::new(start.block, start.offset + inserted)
        }
        Some(selection) => insert_text(doc, selection.head, text)?,
        None => {
            let end = match doc.children.len() {
                0 => Position::default(),
                n => Position::new(n - 1, doc.block_len(n - 1).unwrap_or(0)),
            };
            insert_text(doc, end, text)?
        }
    };

    model.selection = Some(Selection::new(caret));
    Ok(())
}

/// What the user sees in the current selection
pub(super) fn selected_text(model: &AppModel) -> Result<String, EditorError> {
    let selection = model
        .selection
        .filter(|s| !s.is_empty())
        .ok_or(EditorError::EmptySelection)?;
    let (start, end) = normalize_range(&model.document, selection.start(), selection.end())?;
    Ok(visible_text_between(&model.document, start, end))
}

/// Remove the selected range, collapsing the selection at its start
pub(super) fn delete_selection(model: &mut AppModel) -> Result<(), EditorError> {
    let selection = model
        .selection
        .filter(|s| !s.is_empty())
        .ok_or(EditorError::EmptySelection)?;
    let (start, end) = normalize_range(&model.document, selection.start(), selection.end())?;
    replace_range(&mut model.document, start, end, Vec::new());
    model.selection = Some(Selection::new(start));
    Ok(())
}
