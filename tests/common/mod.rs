//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use heartpad::config::EditorConfig;
use heartpad::messages::Msg;
use heartpad::model::{AppModel, Document, Selection};
use heartpad::update::update;

/// Create a test model with one paragraph per line
pub fn test_model(paragraphs: &[&str]) -> AppModel {
    AppModel::with_document(
        Document::with_paragraphs(paragraphs.iter().copied()),
        EditorConfig::default(),
    )
}

/// Create a test model with a selection inside one paragraph
pub fn test_model_with_selection(
    paragraphs: &[&str],
    block: usize,
    from: usize,
    to: usize,
) -> AppModel {
    let mut model = test_model(paragraphs);
    model.selection = Some(Selection::in_block(block, from, to));
    model
}

/// Select a range in one paragraph and hide it
pub fn hide(model: &mut AppModel, block: usize, from: usize, to: usize) {
    update(model, Msg::select(Selection::in_block(block, from, to)));
    update(model, Msg::hide_selection());
}

/// Current transient status text, if any
pub fn status(model: &AppModel) -> Option<String> {
    model.ui.status_text().map(str::to_string)
}
