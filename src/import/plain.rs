//! Plain text import

use crate::error::{EditorError, Result};
use crate::model::{Document, Node};

const BOM: char = '\u{feff}';

/// One paragraph per line; whitespace-only lines become empty paragraphs
pub fn plain_text(bytes: &[u8]) -> Result<Document> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| EditorError::ImportDecode(format!("Text is not valid UTF-8: {}", e)))?;
    let text = text.strip_prefix(BOM).unwrap_or(text);

    let blocks = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| {
            if line.trim().is_empty() {
                Node::paragraph("")
            } else {
                Node::paragraph(line)
            }
        })
        .collect();

    Ok(Document::from_nodes(blocks))
}
