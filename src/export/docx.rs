//! Word (.docx) packing

use std::io::Cursor;

use docx_rs::{Docx, LineSpacing, Paragraph, Run};

use crate::error::{EditorError, Result};

/// Space after every paragraph, in twentieths of a point
pub const PARAGRAPH_SPACING_AFTER: u32 = 200;

/// Pack paragraphs into a single-section `.docx`, one run per paragraph
pub fn to_docx(paragraphs: &[String]) -> Result<Vec<u8>> {
    let docx = paragraphs.iter().fold(Docx::new(), |docx, text| {
        docx.add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(text))
                .line_spacing(LineSpacing::new().after(PARAGRAPH_SPACING_AFTER)),
        )
    });

    let mut bytes = Vec::new();
    docx.build()
        .pack(Cursor::new(&mut bytes))
        .map_err(|e| EditorError::ExportFailure(e.to_string()))?;
    tracing::debug!(paragraphs = paragraphs.len(), bytes = bytes.len(), "packed docx");
    Ok(bytes)
}
