//! UI state - status bar, transient messages and derived flags

use super::status_bar::{StatusBar, TransientMessage};
use std::time::{Duration, Instant};

/// UI state - status messages and derived document flags
#[derive(Debug, Clone)]
pub struct UiState {
    /// Structured status bar with segments
    pub status_bar: StatusBar,
    /// Transient message with auto-expiry
    pub transient_message: Option<TransientMessage>,
    /// Lifetime of new transient messages
    pub status_duration: Duration,
    /// Display time of the last successful save
    pub last_saved: Option<String>,
    /// Whether the document has no visible text and no concealed masks
    pub is_empty: bool,
    /// Whether an import is in flight
    pub is_importing: bool,
    /// Whether an export is in flight
    pub is_exporting: bool,
}

impl UiState {
    /// Create a new UI state with default settings
    pub fn new() -> Self {
        Self {
            status_bar: StatusBar::new(),
            transient_message: None,
            status_duration: Duration::from_secs(3),
            last_saved: None,
            is_empty: true,
            is_importing: false,
            is_exporting: false,
        }
    }

    /// Show a message that expires after the configured duration
    pub fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(status = %message);
        self.transient_message = Some(TransientMessage::new(message, self.status_duration));
    }

    /// The current status message, if it has not expired
    pub fn status_text(&self) -> Option<&str> {
        self.transient_message
            .as_ref()
            .filter(|msg| !msg.is_expired())
            .map(|msg| msg.text.as_str())
    }

    /// Drop the transient message once it has expired.
    /// Returns true if the state changed (needs redraw)
    pub fn expire_status(&mut self, now: Instant) -> bool {
        match &self.transient_message {
            Some(msg) if msg.is_expired_at(now) => {
                self.transient_message = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
