//! Export adapter - document tree to Word paragraphs
//!
//! Export always works on a copy with every mask resolved to its hidden text,
//! whatever the masks currently show. The live tree is never touched.

mod docx;

use crate::error::Result;
use crate::model::document::rewrite_nodes;
use crate::model::{Document, Node};

pub use docx::{to_docx, PARAGRAPH_SPACING_AFTER};

/// Copy of the document with every mask replaced by its text
pub fn resolve_masks(doc: &Document) -> Document {
    let mut copy = doc.clone();
    rewrite_nodes(&mut copy.children, &mut |node: &Node| match node {
        Node::Mask(mask) => Some(Node::text(mask.text())),
        _ => None,
    });
    copy.normalize();
    copy
}

/// Ordered paragraph texts for the output document
pub fn extract_paragraphs(doc: &Document) -> Vec<String> {
    let resolved = resolve_masks(doc);
    let mut paragraphs = Vec::new();

    for node in &resolved.children {
        match node {
            Node::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    paragraphs.push(text.to_string());
                }
            }
            Node::Element(el) => {
                let text = node.resolved_text();
                let text = text.trim();
                if !text.is_empty() {
                    paragraphs.extend(text.split('\n').map(str::to_string));
                } else if el.tag.is_block() {
                    paragraphs.push(String::new());
                }
            }
            Node::LineBreak | Node::Mask(_) => {}
        }
    }

    if paragraphs.is_empty() {
        let text = resolved.resolved_text();
        paragraphs = text
            .trim()
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
    }

    paragraphs
}

/// Resolve, extract and pack the document as `.docx` bytes
pub fn export_document(doc: &Document) -> Result<Vec<u8>> {
    to_docx(&extract_paragraphs(doc))
}
