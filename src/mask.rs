//! Masking engine - hide selected text behind a heart and bring it back
//!
//! A concealed mask keeps the text it replaced. It can be restored for good
//! ([`reveal_one`]) or flipped in bulk between concealed and revealed
//! ([`reveal_all`], [`conceal_all`], [`toggle`]). Bulk operations only touch
//! the mask kind matching their direction, so text restored by click stays
//! plain text.

use crate::error::{EditorError, Result};
use crate::model::document::rewrite_nodes;
use crate::model::range::{normalize_range, replace_range, resolved_text_between};
use crate::model::{Document, Mask, MaskId, MaskState, Node, Selection};

/// Direction of the last bulk action
///
/// This caches what the masks in the tree currently look like; the per-node
/// state stays authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Masks show the glyph (initial state)
    #[default]
    Concealed,
    /// Masks show their text
    Revealed,
}

/// Replace the selected range with a concealed mask holding its text
pub fn conceal(doc: &mut Document, selection: Option<Selection>) -> Result<MaskId> {
    let selection = selection
        .filter(|s| !s.is_empty())
        .ok_or(EditorError::EmptySelection)?;
    let (start, end) = normalize_range(doc, selection.start(), selection.end())?;

    let text = resolved_text_between(doc, start, end);
    if start == end || text.is_empty() {
        return Err(EditorError::EmptySelection);
    }

    let id = doc.allocate_mask_id();
    let removed = replace_range(doc, start, end, vec![Node::Mask(Mask::concealed(id, text))]);
    tracing::debug!(%id, chars = removed.chars().count(), "concealed selection");
    Ok(id)
}

/// Restore one concealed mask as plain text; it stops being a mask
pub fn reveal_one(doc: &mut Document, id: MaskId) -> Result<()> {
    let mut found = false;
    rewrite_nodes(&mut doc.children, &mut |node: &Node| match node {
        Node::Mask(mask) if mask.id() == id && mask.is_concealed() => {
            found = true;
            Some(Node::text(mask.text()))
        }
        _ => None,
    });

    if !found {
        return Err(EditorError::MaskNotFound(id));
    }
    doc.normalize();
    tracing::debug!(%id, "restored mask");
    Ok(())
}

fn flip_masks(doc: &mut Document, from: MaskState, to: MaskState) -> Result<usize> {
    let mut count = 0;
    doc.for_each_mask_mut(|mask| {
        if mask.state() == from {
            mask.set_state(to);
            count += 1;
        }
    });
    if count == 0 {
        return Err(EditorError::NothingToToggle);
    }
    Ok(count)
}

/// Show the text of every concealed mask, keeping them re-concealable
pub fn reveal_all(doc: &mut Document) -> Result<usize> {
    flip_masks(doc, MaskState::Concealed, MaskState::Revealed)
}

/// Conceal every revealed mask again
pub fn conceal_all(doc: &mut Document) -> Result<usize> {
    flip_masks(doc, MaskState::Revealed, MaskState::Concealed)
}

/// Bulk toggle driven by the last known direction.
///
/// The flag only flips when the bulk action succeeds. Returns the number of
/// masks changed.
pub fn toggle(doc: &mut Document, visibility: &mut Visibility) -> Result<usize> {
    let (count, next) = match visibility {
        Visibility::Concealed => (reveal_all(doc)?, Visibility::Revealed),
        Visibility::Revealed => (conceal_all(doc)?, Visibility::Concealed),
    };
    *visibility = next;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Position, Tag, MASK_GLYPH};

    #[test]
    fn test_conceal_replaces_range_with_glyph() {
        let mut doc = Document::with_paragraphs(["my secret plan"]);
        let id = conceal(&mut doc, Some(Selection::in_block(0, 3, 9))).unwrap();

        assert_eq!(doc.visible_text(), format!("my {} plan", MASK_GLYPH));
        assert_eq!(doc.find_mask(id).unwrap().text(), "secret");
    }

    #[test]
    fn test_conceal_without_selection_fails() {
        let mut doc = Document::with_paragraphs(["abc"]);
        let before = doc.clone();

        assert!(matches!(
            conceal(&mut doc, None),
            Err(EditorError::EmptySelection)
        ));
        assert!(matches!(
            conceal(&mut doc, Some(Selection::new(Position::new(0, 1)))),
            Err(EditorError::EmptySelection)
        ));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_reveal_one_ignores_revealed_masks() {
        let mut doc = Document::with_paragraphs(["abc"]);
        let id = conceal(&mut doc, Some(Selection::in_block(0, 0, 1))).unwrap();
        reveal_all(&mut doc).unwrap();

        assert!(matches!(
            reveal_one(&mut doc, id),
            Err(EditorError::MaskNotFound(_))
        ));
    }

    #[test]
    fn test_conceal_inside_inline_formatting() {
        let mut doc = Document::from_nodes(vec![Node::element(
            Tag::Paragraph,
            vec![Node::element(Tag::Bold, vec![Node::text("bold words")])],
        )]);
        let id = conceal(&mut doc, Some(Selection::in_block(0, 5, 10))).unwrap();
        reveal_one(&mut doc, id).unwrap();
        assert_eq!(doc.visible_text(), "bold words");
    }

    #[test]
    fn test_toggle_keeps_flag_on_failure() {
        let mut doc = Document::with_paragraphs(["nothing hidden"]);
        let mut visibility = Visibility::Concealed;

        assert!(toggle(&mut doc, &mut visibility).is_err());
        assert_eq!(visibility, Visibility::Concealed);
    }
}
