//! Document model - the rich-text tree and its mask nodes
//!
//! A document is an ordered list of top-level nodes. Block elements
//! (paragraphs, headings, list items, generic containers) become paragraphs on
//! export; inline elements and text runs live inside them. Masked text is a
//! first-class node kind rather than a styled span, so the hidden text can only
//! be set when the mask is created.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyph rendered in place of concealed text
pub const MASK_GLYPH: &str = "\u{2665}";

/// Stable handle for a mask node within one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaskId(pub u64);

impl fmt::Display for MaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display state of a mask node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskState {
    /// Shows the glyph, text hidden
    Concealed,
    /// Shows the text, can be concealed again
    Revealed,
}

/// A span of user-hidden text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mask {
    id: MaskId,
    state: MaskState,
    text: String,
}

impl Mask {
    pub(crate) fn concealed(id: MaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            state: MaskState::Concealed,
            text: text.into(),
        }
    }

    pub fn id(&self) -> MaskId {
        self.id
    }

    pub fn state(&self) -> MaskState {
        self.state
    }

    /// The original text captured when the mask was created
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_concealed(&self) -> bool {
        self.state == MaskState::Concealed
    }

    pub fn is_revealed(&self) -> bool {
        self.state == MaskState::Revealed
    }

    /// What the user currently sees for this mask
    pub fn visible_text(&self) -> &str {
        match self.state {
            MaskState::Concealed => MASK_GLYPH,
            MaskState::Revealed => &self.text,
        }
    }

    pub(crate) fn set_state(&mut self, state: MaskState) {
        self.state = state;
    }
}

/// Element kinds that can appear in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Paragraph,
    /// Heading level 1-6
    Heading(u8),
    ListItem,
    /// Generic block container
    Container,
    Bold,
    Italic,
    Underline,
    Span,
}

impl Tag {
    /// Whether this tag denotes a paragraph-level block
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Tag::Paragraph | Tag::Heading(_) | Tag::ListItem | Tag::Container
        )
    }
}

/// An element node with a tag and children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: Tag,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// A node in the document tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Text(String),
    LineBreak,
    Mask(Mask),
    Element(Element),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn element(tag: Tag, children: Vec<Node>) -> Self {
        Node::Element(Element { tag, children })
    }

    /// A paragraph holding a single text run (or nothing, for empty text)
    pub fn paragraph(text: impl Into<String>) -> Self {
        let text = text.into();
        let children = if text.is_empty() {
            Vec::new()
        } else {
            vec![Node::Text(text)]
        };
        Node::element(Tag::Paragraph, children)
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Node::Element(el) if el.tag.is_block())
    }

    /// Length in characters of what the user sees for this node
    pub fn visible_len(&self) -> usize {
        match self {
            Node::Text(s) => s.chars().count(),
            Node::LineBreak => 1,
            Node::Mask(mask) => mask.visible_text().chars().count(),
            Node::Element(el) => el.children.iter().map(Node::visible_len).sum(),
        }
    }

    /// Append the visible text of this node (concealed masks as the glyph)
    pub fn write_visible(&self, out: &mut String) {
        match self {
            Node::Text(s) => out.push_str(s),
            Node::LineBreak => out.push('\n'),
            Node::Mask(mask) => out.push_str(mask.visible_text()),
            Node::Element(el) => el.children.iter().for_each(|c| c.write_visible(out)),
        }
    }

    /// Append the underlying text of this node (masks as their hidden text)
    pub fn write_resolved(&self, out: &mut String) {
        match self {
            Node::Text(s) => out.push_str(s),
            Node::LineBreak => out.push('\n'),
            Node::Mask(mask) => out.push_str(mask.text()),
            Node::Element(el) => el.children.iter().for_each(|c| c.write_resolved(out)),
        }
    }

    pub fn resolved_text(&self) -> String {
        let mut out = String::new();
        self.write_resolved(&mut out);
        out
    }

    fn visit_masks<'a>(&'a self, out: &mut Vec<&'a Mask>) {
        match self {
            Node::Mask(mask) => out.push(mask),
            Node::Element(el) => el.children.iter().for_each(|c| c.visit_masks(out)),
            Node::Text(_) | Node::LineBreak => {}
        }
    }
}

/// Walk a node list depth-first, letting `f` replace any node in place.
///
/// `f` returns `Some(replacement)` to swap the node out; replaced nodes are
/// not descended into.
pub(crate) fn rewrite_nodes(nodes: &mut [Node], f: &mut impl FnMut(&Node) -> Option<Node>) {
    for node in nodes.iter_mut() {
        if let Some(replacement) = f(node) {
            *node = replacement;
            continue;
        }
        if let Node::Element(el) = node {
            rewrite_nodes(&mut el.children, f);
        }
    }
}

fn visit_masks_mut(nodes: &mut [Node], f: &mut impl FnMut(&mut Mask)) {
    for node in nodes.iter_mut() {
        match node {
            Node::Mask(mask) => f(mask),
            Node::Element(el) => visit_masks_mut(&mut el.children, f),
            Node::Text(_) | Node::LineBreak => {}
        }
    }
}

/// Merge adjacent text runs and drop empty ones, recursively
pub(crate) fn normalize_nodes(nodes: &mut Vec<Node>) {
    let mut merged: Vec<Node> = Vec::with_capacity(nodes.len());
    for mut node in nodes.drain(..) {
        if let Node::Element(el) = &mut node {
            normalize_nodes(&mut el.children);
        }
        if let Node::Text(s) = &node {
            if s.is_empty() {
                continue;
            }
            if let Some(Node::Text(prev)) = merged.last_mut() {
                prev.push_str(s);
                continue;
            }
        }
        merged.push(node);
    }
    *nodes = merged;
}

/// Join per-node text for top-level nodes, with a newline at block boundaries
pub(crate) fn join_top_level<'a>(
    nodes: impl IntoIterator<Item = &'a Node>,
    write: impl Fn(&Node, &mut String),
) -> String {
    let mut out = String::new();
    let mut prev_block: Option<bool> = None;
    for node in nodes {
        let is_block = node.is_block();
        if let Some(prev) = prev_block {
            if prev || is_block {
                out.push('\n');
            }
        }
        write(node, &mut out);
        prev_block = Some(is_block);
    }
    out
}

/// The editable document tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level nodes in document order
    pub children: Vec<Node>,
    /// Next mask id to hand out
    #[serde(default)]
    next_mask_id: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from top-level nodes
    pub fn from_nodes(children: Vec<Node>) -> Self {
        Self {
            children,
            next_mask_id: 0,
        }
    }

    /// Create a document with one paragraph per line of `text`
    pub fn with_paragraphs<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self::from_nodes(lines.into_iter().map(Node::paragraph).collect())
    }

    /// Replace all content, keeping mask ids unique across the swap
    pub fn replace_with(&mut self, other: Document) {
        let next = self.next_mask_id.max(other.next_mask_id);
        *self = other;
        self.next_mask_id = next;
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Hand out a mask id not used anywhere in the tree
    pub(crate) fn allocate_mask_id(&mut self) -> MaskId {
        let in_use = self.masks().iter().map(|m| m.id.0 + 1).max().unwrap_or(0);
        let id = self.next_mask_id.max(in_use);
        self.next_mask_id = id + 1;
        MaskId(id)
    }

    /// All mask nodes in document order
    pub fn masks(&self) -> Vec<&Mask> {
        let mut out = Vec::new();
        self.children.iter().for_each(|c| c.visit_masks(&mut out));
        out
    }

    pub(crate) fn for_each_mask_mut(&mut self, mut f: impl FnMut(&mut Mask)) {
        visit_masks_mut(&mut self.children, &mut f);
    }

    pub fn find_mask(&self, id: MaskId) -> Option<&Mask> {
        self.masks().into_iter().find(|m| m.id == id)
    }

    pub fn concealed_count(&self) -> usize {
        self.masks().iter().filter(|m| m.is_concealed()).count()
    }

    pub fn revealed_count(&self) -> usize {
        self.masks().iter().filter(|m| m.is_revealed()).count()
    }

    /// What the user sees (concealed masks as the glyph)
    pub fn visible_text(&self) -> String {
        join_top_level(&self.children, Node::write_visible)
    }

    /// The underlying text with every mask resolved
    pub fn resolved_text(&self) -> String {
        join_top_level(&self.children, Node::write_resolved)
    }

    /// Empty means no visible text and no concealed masks.
    ///
    /// A concealed mask counts as content even though it renders as one glyph.
    pub fn is_empty(&self) -> bool {
        self.visible_text().trim().is_empty() && self.concealed_count() == 0
    }

    /// Number of whitespace-separated words in the visible text
    pub fn word_count(&self) -> usize {
        self.visible_text().split_whitespace().count()
    }

    /// Visible length of a top-level node
    pub fn block_len(&self, block: usize) -> Option<usize> {
        self.children.get(block).map(Node::visible_len)
    }

    pub fn normalize(&mut self) {
        normalize_nodes(&mut self.children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_merges_adjacent_text() {
        let mut doc = Document::from_nodes(vec![Node::element(
            Tag::Paragraph,
            vec![Node::text("ab"), Node::text(""), Node::text("cd")],
        )]);
        doc.normalize();
        assert_eq!(doc.children, vec![Node::paragraph("abcd")]);
    }

    #[test]
    fn test_concealed_mask_is_one_visible_char() {
        let node = Node::Mask(Mask::concealed(MaskId(0), "secret"));
        assert_eq!(node.visible_len(), 1);
        assert_eq!(node.resolved_text(), "secret");
    }

    #[test]
    fn test_visible_text_joins_blocks_with_newline() {
        let doc = Document::with_paragraphs(["a", "", "b"]);
        assert_eq!(doc.visible_text(), "a\n\nb");
    }

    #[test]
    fn test_inline_neighbours_are_not_separated() {
        let doc = Document::from_nodes(vec![
            Node::text("a"),
            Node::element(Tag::Bold, vec![Node::text("b")]),
        ]);
        assert_eq!(doc.visible_text(), "ab");
    }

    #[test]
    fn test_allocate_mask_id_skips_ids_in_tree() {
        let mut doc = Document::from_nodes(vec![Node::Mask(Mask::concealed(MaskId(7), "x"))]);
        assert_eq!(doc.allocate_mask_id(), MaskId(8));
        assert_eq!(doc.allocate_mask_id(), MaskId(9));
    }

    #[test]
    fn test_empty_document_is_empty() {
        assert!(Document::new().is_empty());
        assert!(Document::with_paragraphs(["  ", ""]).is_empty());
        assert!(!Document::with_paragraphs(["x"]).is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let doc = Document::from_nodes(vec![
            Node::element(
                Tag::Heading(2),
                vec![
                    Node::text("t"),
                    Node::LineBreak,
                    Node::Mask(Mask::concealed(MaskId(3), "s")),
                ],
            ),
            Node::paragraph("p"),
        ]);
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
