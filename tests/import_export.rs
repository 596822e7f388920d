//! Import and export tests - plain text, Word, and the runtime workers

mod common;

use std::time::Duration;

use common::{hide, status, test_model};
use docx_rs::{Docx, Paragraph, Run};
use heartpad::export::{export_document, extract_paragraphs, to_docx};
use heartpad::import::{plain_text, rich_document, ImportKind, ImportSource};
use heartpad::messages::{AppMsg, Msg};
use heartpad::model::{Document, Node, Tag, MASK_GLYPH};
use heartpad::persistence::MemoryStore;
use heartpad::runtime::Runtime;
use heartpad::update::update;

const WORKER_TIMEOUT: Duration = Duration::from_secs(10);

fn docx_bytes(docx: Docx) -> Vec<u8> {
    let mut bytes = Vec::new();
    docx.build()
        .pack(std::io::Cursor::new(&mut bytes))
        .unwrap();
    bytes
}

// ========================================================================
// Export
// ========================================================================

#[test]
fn test_export_resolves_concealed_mask() {
    let mut model = test_model(&["secret"]);
    hide(&mut model, 0, 0, 6);
    assert_eq!(model.document.visible_text(), MASK_GLYPH);

    let paragraphs = extract_paragraphs(&model.document);

    assert_eq!(paragraphs, vec!["secret".to_string()]);
    assert!(paragraphs.iter().all(|p| !p.contains(MASK_GLYPH)));
    // The live tree keeps its mask
    assert_eq!(model.document.concealed_count(), 1);
}

#[test]
fn test_export_resolves_revealed_mask_too() {
    let mut model = test_model(&["the secret word"]);
    hide(&mut model, 0, 4, 10);
    update(&mut model, Msg::toggle_all());

    assert_eq!(
        extract_paragraphs(&model.document),
        vec!["the secret word".to_string()]
    );
}

#[test]
fn test_plain_import_then_export_keeps_blank_paragraph() {
    let doc = plain_text(b"a\n\nb").unwrap();
    assert_eq!(doc.children.len(), 3);

    assert_eq!(
        extract_paragraphs(&doc),
        vec!["a".to_string(), String::new(), "b".to_string()]
    );
}

#[test]
fn test_export_splits_line_breaks_into_paragraphs() {
    let doc = Document::from_nodes(vec![Node::element(
        Tag::Paragraph,
        vec![Node::text("  one"), Node::LineBreak, Node::text("two  ")],
    )]);

    assert_eq!(
        extract_paragraphs(&doc),
        vec!["one".to_string(), "two".to_string()]
    );
}

#[test]
fn test_export_of_empty_document_is_one_empty_paragraph() {
    assert_eq!(extract_paragraphs(&Document::new()), vec![String::new()]);
}

#[test]
fn test_docx_round_trip() {
    let doc = Document::with_paragraphs(["Hello", "", "World"]);
    let bytes = export_document(&doc).unwrap();

    let imported = rich_document(&bytes).unwrap();

    assert_eq!(imported.visible_text(), "Hello\n\nWorld");
    assert_eq!(imported.children.len(), 3);
}

// ========================================================================
// Word import
// ========================================================================

#[test]
fn test_rich_import_maps_headings_and_emphasis() {
    let bytes = docx_bytes(
        Docx::new()
            .add_paragraph(
                Paragraph::new()
                    .style("Heading1")
                    .add_run(Run::new().add_text("Title")),
            )
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("plain"))
                    .add_run(Run::new().add_text("loud").bold()),
            ),
    );

    let doc = rich_document(&bytes).unwrap();

    assert_eq!(
        doc.children,
        vec![
            Node::element(Tag::Heading(1), vec![Node::text("Title")]),
            Node::element(
                Tag::Paragraph,
                vec![
                    Node::text("plain"),
                    Node::element(Tag::Bold, vec![Node::text("loud")]),
                ]
            ),
        ]
    );
    assert_eq!(
        extract_paragraphs(&doc),
        vec!["Title".to_string(), "plainloud".to_string()]
    );
}

#[test]
fn test_garbage_docx_is_decode_error() {
    assert!(ImportKind::RichDocument
        .convert(b"PK not really a zip")
        .is_err());
}

#[test]
fn test_to_docx_produces_zip_package() {
    let bytes = to_docx(&["one".to_string()]).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

// ========================================================================
// Runtime workers
// ========================================================================

#[test]
fn test_runtime_import_replaces_document() {
    let mut model = test_model(&["old content"]);
    hide(&mut model, 0, 0, 3);
    update(&mut model, Msg::toggle_all());
    let mut runtime = Runtime::new(MemoryStore::new());

    runtime.dispatch(
        &mut model,
        Msg::App(AppMsg::Import {
            kind: ImportKind::PlainText,
            source: ImportSource::Bytes(b"a\n\nb".to_vec()),
        }),
    );
    assert!(model.ui.is_importing);
    assert!(runtime.wait(&mut model, WORKER_TIMEOUT));

    assert!(!model.ui.is_importing);
    assert_eq!(model.document.visible_text(), "a\n\nb");
    assert_eq!(model.visibility, heartpad::mask::Visibility::Concealed);
    assert!(!model.is_empty());
    assert_eq!(status(&model).as_deref(), Some("Text imported!"));
}

#[test]
fn test_runtime_failed_import_keeps_document() {
    let mut model = test_model(&["keep me"]);
    let before = model.document.clone();
    let mut runtime = Runtime::new(MemoryStore::new());

    runtime.dispatch(
        &mut model,
        Msg::App(AppMsg::Import {
            kind: ImportKind::PlainText,
            source: ImportSource::Bytes(vec![0xff, 0xfe, 0x00]),
        }),
    );
    assert!(runtime.wait(&mut model, WORKER_TIMEOUT));

    assert_eq!(model.document, before);
    assert_eq!(
        status(&model).as_deref(),
        Some("Import failed, please try again")
    );
}

#[test]
fn test_runtime_import_missing_file_keeps_document() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = test_model(&["keep me"]);
    let mut runtime = Runtime::new(MemoryStore::new());

    runtime.dispatch(
        &mut model,
        Msg::App(AppMsg::Import {
            kind: ImportKind::RichDocument,
            source: ImportSource::Path(dir.path().join("missing.docx")),
        }),
    );
    assert!(runtime.wait(&mut model, WORKER_TIMEOUT));

    assert_eq!(model.document.visible_text(), "keep me");
    assert!(!model.ui.is_importing);
}

#[test]
fn test_runtime_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("essay.docx");
    let mut model = test_model(&["Dear diary", "my secret"]);
    hide(&mut model, 1, 3, 9);
    let mut runtime = Runtime::new(MemoryStore::new());

    runtime.dispatch(
        &mut model,
        Msg::App(AppMsg::Export {
            path: Some(path.clone()),
        }),
    );
    assert!(model.ui.is_exporting);
    assert!(runtime.wait(&mut model, WORKER_TIMEOUT));

    assert!(!model.ui.is_exporting);
    let bytes = std::fs::read(&path).unwrap();
    let imported = rich_document(&bytes).unwrap();
    assert_eq!(imported.visible_text(), "Dear diary\nmy secret");
    assert_eq!(model.document.concealed_count(), 1);
}
