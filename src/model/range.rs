//! Range surgery on the document tree
//!
//! Splits, slices and replaces spans of the tree addressed by [`Position`]s.
//! Masks and line breaks are atomic: a split never lands inside one.

use std::slice;

use super::document::{join_top_level, Document, Node};
use super::selection::Position;
use crate::error::{EditorError, Result};

fn char_to_byte(s: &str, offset: usize) -> usize {
    s.char_indices()
        .nth(offset)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

fn non_empty_text(s: &str) -> Option<Node> {
    (!s.is_empty()).then(|| Node::text(s))
}

/// Split a node at a visible offset.
///
/// Elements always yield both halves (possibly empty) so a block keeps its
/// wrapper on each side. An atom split strictly inside goes left.
pub(crate) fn split_node(node: &Node, offset: usize) -> (Option<Node>, Option<Node>) {
    match node {
        Node::Text(s) => {
            let (left, right) = s.split_at(char_to_byte(s, offset));
            (non_empty_text(left), non_empty_text(right))
        }
        Node::Element(el) => {
            let (left, right) = split_nodes(&el.children, offset);
            (
                Some(Node::element(el.tag, left)),
                Some(Node::element(el.tag, right)),
            )
        }
        atom if offset == 0 => (None, Some(atom.clone())),
        atom => (Some(atom.clone()), None),
    }
}

/// Split a node list at a visible offset
pub(crate) fn split_nodes(nodes: &[Node], offset: usize) -> (Vec<Node>, Vec<Node>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut remaining = offset;

    for node in nodes {
        let len = node.visible_len();
        if remaining == 0 {
            right.push(node.clone());
        } else if remaining >= len {
            left.push(node.clone());
            remaining -= len;
        } else {
            let (l, r) = split_node(node, remaining);
            left.extend(l);
            right.extend(r);
            remaining = 0;
        }
    }

    (left, right)
}

/// The nodes between two visible offsets
pub(crate) fn slice_nodes(nodes: &[Node], from: usize, to: usize) -> Vec<Node> {
    let (before_end, _) = split_nodes(nodes, to);
    let (_, middle) = split_nodes(&before_end, from);
    middle
}

/// Bounds of the atom strictly enclosing `offset`, if any
fn enclosing_atom(nodes: &[Node], offset: usize) -> Option<(usize, usize)> {
    let mut base = 0;
    for node in nodes {
        let len = node.visible_len();
        if offset > base && offset < base + len {
            return match node {
                Node::Mask(_) | Node::LineBreak => Some((base, base + len)),
                Node::Element(el) => enclosing_atom(&el.children, offset - base)
                    .map(|(start, end)| (start + base, end + base)),
                Node::Text(_) => None,
            };
        }
        base += len;
    }
    None
}

fn check_position(doc: &Document, pos: Position) -> Result<()> {
    match doc.block_len(pos.block) {
        Some(len) if pos.offset <= len => Ok(()),
        _ => Err(EditorError::InvalidPosition),
    }
}

/// Validate and order a range, widening each end past any atom it splits
pub(crate) fn normalize_range(
    doc: &Document,
    start: Position,
    end: Position,
) -> Result<(Position, Position)> {
    check_position(doc, start)?;
    check_position(doc, end)?;
    let (mut start, mut end) = (start.min(end), start.max(end));

    let first = slice::from_ref(&doc.children[start.block]);
    if let Some((atom_start, _)) = enclosing_atom(first, start.offset) {
        start.offset = atom_start;
    }
    let last = slice::from_ref(&doc.children[end.block]);
    if let Some((_, atom_end)) = enclosing_atom(last, end.offset) {
        end.offset = atom_end;
    }
    Ok((start, end))
}

fn text_between(
    doc: &Document,
    start: Position,
    end: Position,
    write: impl Fn(&Node, &mut String) + Copy,
) -> String {
    if start.block == end.block {
        let unit = slice::from_ref(&doc.children[start.block]);
        let mut out = String::new();
        for node in slice_nodes(unit, start.offset, end.offset) {
            write(&node, &mut out);
        }
        return out;
    }

    let mut units = Vec::new();
    units.extend(split_node(&doc.children[start.block], start.offset).1);
    units.extend(doc.children[start.block + 1..end.block].iter().cloned());
    units.extend(split_node(&doc.children[end.block], end.offset).0);
    join_top_level(&units, write)
}

/// Underlying text of a normalized range, masks resolved to their hidden text
pub(crate) fn resolved_text_between(doc: &Document, start: Position, end: Position) -> String {
    text_between(doc, start, end, Node::write_resolved)
}

/// What the user sees in a normalized range
pub(crate) fn visible_text_between(doc: &Document, start: Position, end: Position) -> String {
    text_between(doc, start, end, Node::write_visible)
}

/// Splice `middle` between a leading and a trailing fragment.
///
/// A block head absorbs the middle and the trailing fragment's content, which
/// joins the two blocks the way deleting across paragraphs does.
fn join_around(head: Option<Node>, middle: Vec<Node>, tail: Option<Node>) -> Vec<Node> {
    match head {
        Some(Node::Element(mut el)) if el.tag.is_block() => {
            el.children.extend(middle);
            match tail {
                Some(Node::Element(t)) if t.tag.is_block() => el.children.extend(t.children),
                Some(other) => el.children.push(other),
                None => {}
            }
            vec![Node::Element(el)]
        }
        None => match tail {
            Some(Node::Element(mut t)) if t.tag.is_block() => {
                t.children.splice(0..0, middle);
                vec![Node::Element(t)]
            }
            tail => middle.into_iter().chain(tail).collect(),
        },
        head => head.into_iter().chain(middle).chain(tail).collect(),
    }
}

/// Replace a normalized range with `middle`, returning the removed text
pub(crate) fn replace_range(
    doc: &mut Document,
    start: Position,
    end: Position,
    middle: Vec<Node>,
) -> String {
    let removed = resolved_text_between(doc, start, end);
    let (head, _) = split_node(&doc.children[start.block], start.offset);
    let (_, tail) = split_node(&doc.children[end.block], end.offset);
    let replacement = join_around(head, middle, tail);
    doc.children.splice(start.block..=end.block, replacement);
    doc.normalize();
    removed
}

/// Inline nodes for typed text, newlines becoming line breaks
pub(crate) fn inline_nodes(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            nodes.push(Node::LineBreak);
        }
        nodes.extend(non_empty_text(line.strip_suffix('\r').unwrap_or(line)));
    }
    nodes
}

/// Insert typed text at a position, returning the caret after it
pub(crate) fn insert_text(doc: &mut Document, at: Position, text: &str) -> Result<Position> {
    if doc.children.is_empty() && at == Position::default() {
        doc.children.push(Node::paragraph(""));
    }
    let (at, _) = normalize_range(doc, at, at)?;
    let nodes = inline_nodes(text);
    let inserted: usize = nodes.iter().map(Node::visible_len).sum();
    replace_range(doc, at, at, nodes);
    Ok(Position::new(at.block, at.offset + inserted))
}
