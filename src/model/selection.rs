//! Positions and selections over the document tree

/// A position in the document
///
/// `block` indexes the document's top-level nodes and `offset` counts visible
/// characters inside that node. A concealed mask and a line break each count
/// as one character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Top-level node index (0-indexed)
    pub block: usize,
    /// Visible character offset within the node (0-indexed)
    pub offset: usize,
}

impl Position {
    /// Create a new position
    pub const fn new(block: usize, offset: usize) -> Self {
        Self { block, offset }
    }
}

/// A text selection with anchor (start) and head (cursor end)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: Position,
    /// Where the cursor is (moving point)
    pub head: Position,
}

impl Selection {
    /// Create a new empty selection at a position
    pub fn new(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// Create a selection from anchor to head
    pub fn from_anchor_head(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// Selection within a single top-level node
    pub fn in_block(block: usize, from: usize, to: usize) -> Self {
        Self::from_anchor_head(Position::new(block, from), Position::new(block, to))
    }

    /// Check if selection is empty (collapsed)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Get the start of the selection (smaller position)
    pub fn start(&self) -> Position {
        self.anchor.min(self.head)
    }

    /// Get the end of the selection (larger position)
    pub fn end(&self) -> Position {
        self.anchor.max(self.head)
    }
}
