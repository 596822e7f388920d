//! Word (.docx) import
//!
//! Best-effort structural conversion: body paragraphs become blocks, runs
//! become text with bold/italic wrappers. Tables, images, fields and the
//! like are dropped.

use docx_rs::{
    read_docx, Bold, DocumentChild, Italic, Paragraph, ParagraphChild, Run, RunChild,
};

use crate::error::{EditorError, Result};
use crate::model::{Document, Node, Tag};

/// Convert a `.docx` package into a document tree
pub fn rich_document(bytes: &[u8]) -> Result<Document> {
    let docx = read_docx(bytes)
        .map_err(|e| EditorError::ImportDecode(format!("Not a readable Word document: {}", e)))?;

    let blocks = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(convert_paragraph(paragraph)),
            _ => None,
        })
        .collect();

    let mut doc = Document::from_nodes(blocks);
    doc.normalize();
    Ok(doc)
}

/// `Heading2`, `heading 2` and friends
fn heading_level(style: &str) -> Option<u8> {
    let compact: String = style
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    let level: u8 = compact.strip_prefix("heading")?.parse().ok()?;
    (1..=6).contains(&level).then_some(level)
}

fn convert_paragraph(paragraph: &Paragraph) -> Node {
    let tag = paragraph
        .property
        .style
        .as_ref()
        .and_then(|style| heading_level(&style.val))
        .map(Tag::Heading)
        .unwrap_or(if paragraph.has_numbering {
            Tag::ListItem
        } else {
            Tag::Paragraph
        });

    let mut children = Vec::new();
    collect_inline(&paragraph.children, &mut children);
    Node::element(tag, children)
}

fn collect_inline(children: &[ParagraphChild], out: &mut Vec<Node>) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => out.extend(convert_run(run)),
            ParagraphChild::Hyperlink(link) => collect_inline(&link.children, out),
            _ => {}
        }
    }
}

fn convert_run(run: &Run) -> Option<Node> {
    let mut nodes = Vec::new();
    for child in &run.children {
        match child {
            RunChild::Text(text) => nodes.push(Node::text(text.text.clone())),
            RunChild::Tab(_) => nodes.push(Node::text("\t")),
            RunChild::Break(_) => nodes.push(Node::LineBreak),
            _ => {}
        }
    }
    if nodes.is_empty() {
        return None;
    }

    let props = &run.run_property;
    // `w:val="0"` is read back as a disabled property, not an absent one.
    if props.italic == Some(Italic::new()) {
        nodes = vec![Node::element(Tag::Italic, nodes)];
    }
    if props.bold == Some(Bold::new()) {
        nodes = vec![Node::element(Tag::Bold, nodes)];
    }

    match nodes.len() {
        1 => nodes.pop(),
        _ => Some(Node::element(Tag::Span, nodes)),
    }
}
