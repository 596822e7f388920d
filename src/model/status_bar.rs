//! Status bar model - segments and layout
//!
//! Implements a structured, segment-based status bar system.

use std::time::{Duration, Instant};

/// Identifier for status bar segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentId {
    /// Transient status messages (e.g., "Hidden away")
    StatusMessage,
    /// Last autosave time (e.g., "Saved 14:03:27")
    LastSaved,
    /// Mask counts by state (e.g., "3 hidden, 1 shown")
    MaskCount,
    /// Visible word count (e.g., "1,234 words")
    WordCount,
}

/// Position of a segment in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    Left,
    Right,
}

/// Content of a segment
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentContent {
    /// Empty/hidden segment
    Empty,
    /// Text content
    Text(String),
}

impl SegmentContent {
    /// Get the display text for this content
    pub fn display_text(&self) -> &str {
        match self {
            SegmentContent::Empty => "",
            SegmentContent::Text(s) => s,
        }
    }

    /// Check if this content is empty (nothing to display)
    pub fn is_empty(&self) -> bool {
        match self {
            SegmentContent::Empty => true,
            SegmentContent::Text(s) => s.is_empty(),
        }
    }
}

/// A single segment in the status bar
#[derive(Debug, Clone)]
pub struct StatusSegment {
    /// Unique identifier
    pub id: SegmentId,
    /// Position in the status bar
    pub position: SegmentPosition,
    /// Content to display
    pub content: SegmentContent,
}

impl StatusSegment {
    /// Create a new segment with the given ID and content
    pub fn new(id: SegmentId, content: SegmentContent) -> Self {
        // Determine default position based on segment type
        let position = match id {
            SegmentId::StatusMessage | SegmentId::LastSaved => SegmentPosition::Left,
            SegmentId::MaskCount | SegmentId::WordCount => SegmentPosition::Right,
        };

        Self {
            id,
            position,
            content,
        }
    }
}

/// The complete status bar state
#[derive(Debug, Clone)]
pub struct StatusBar {
    /// All segments in the status bar
    segments: Vec<StatusSegment>,
}

impl StatusBar {
    /// Create a new status bar with default segments
    pub fn new() -> Self {
        Self {
            segments: vec![
                // Left segments
                StatusSegment::new(SegmentId::StatusMessage, SegmentContent::Empty),
                StatusSegment::new(SegmentId::LastSaved, SegmentContent::Empty),
                // Right segments
                StatusSegment::new(SegmentId::MaskCount, SegmentContent::Empty),
                StatusSegment::new(SegmentId::WordCount, SegmentContent::Text("0 words".into())),
            ],
        }
    }

    /// Get a segment by ID (immutable)
    pub fn get_segment(&self, id: SegmentId) -> Option<&StatusSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Get a segment by ID (mutable)
    pub fn get_segment_mut(&mut self, id: SegmentId) -> Option<&mut StatusSegment> {
        self.segments.iter_mut().find(|s| s.id == id)
    }

    /// Update a segment's content
    pub fn update_segment(&mut self, id: SegmentId, content: SegmentContent) {
        if let Some(segment) = self.get_segment_mut(id) {
            segment.content = content;
        }
    }

    /// Iterate over all segments
    pub fn all_segments(&self) -> impl Iterator<Item = &StatusSegment> {
        self.segments.iter()
    }

    /// Iterate over segments at a specific position
    pub fn segments_by_position(
        &self,
        position: SegmentPosition,
    ) -> impl Iterator<Item = &StatusSegment> {
        self.segments.iter().filter(move |s| s.position == position)
    }

    /// Iterate over visible segments (non-empty content)
    pub fn visible_segments(&self) -> impl Iterator<Item = &StatusSegment> {
        self.segments.iter().filter(|s| !s.content.is_empty())
    }

    /// Visible text at one position, segments separated by ` · `
    pub fn line(&self, position: SegmentPosition) -> String {
        self.visible_segments()
            .filter(|s| s.position == position)
            .map(|s| s.content.display_text())
            .collect::<Vec<_>>()
            .join(" \u{b7} ")
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Transient Message
// =============================================================================

/// A transient status message that auto-expires
#[derive(Debug, Clone)]
pub struct TransientMessage {
    /// The message text
    pub text: String,
    /// When this message expires
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a new transient message with the given duration
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    /// Check if this message has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Check expiry against a given clock reading
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

// =============================================================================
// Sync Function
// =============================================================================

use super::AppModel;

/// Format a count with thousands separators (1234 -> "1,234")
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Synchronize status bar segments with current document/UI state
pub fn sync_status_bar(model: &mut AppModel) {
    let status = match &model.ui.transient_message {
        Some(msg) => SegmentContent::Text(msg.text.clone()),
        None => SegmentContent::Empty,
    };
    model
        .ui
        .status_bar
        .update_segment(SegmentId::StatusMessage, status);

    let last_saved = match &model.ui.last_saved {
        Some(at) => SegmentContent::Text(format!("Saved {}", at)),
        None => SegmentContent::Empty,
    };
    model
        .ui
        .status_bar
        .update_segment(SegmentId::LastSaved, last_saved);

    let mut counts = Vec::new();
    let concealed = model.document.concealed_count();
    if concealed > 0 {
        counts.push(format!("{} hidden", concealed));
    }
    let revealed = model.document.revealed_count();
    if revealed > 0 {
        counts.push(format!("{} shown", revealed));
    }
    let mask_count = if counts.is_empty() {
        SegmentContent::Empty
    } else {
        SegmentContent::Text(counts.join(", "))
    };
    model
        .ui
        .status_bar
        .update_segment(SegmentId::MaskCount, mask_count);

    let words = model.document.word_count();
    let word_text = format!(
        "{} word{}",
        group_thousands(words),
        if words == 1 { "" } else { "s" }
    );
    model
        .ui
        .status_bar
        .update_segment(SegmentId::WordCount, SegmentContent::Text(word_text));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
