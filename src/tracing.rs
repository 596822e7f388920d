//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! masking and document state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=heartpad::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/heartpad/logs/heartpad.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/heartpad/logs/heartpad.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "heartpad.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of document shape for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub blocks: usize,
    pub concealed: usize,
    pub revealed: usize,
    pub is_empty: bool,
}

impl DocumentSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            blocks: model.document.children.len(),
            concealed: model.document.concealed_count(),
            revealed: model.document.revealed_count(),
            is_empty: model.ui.is_empty,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &DocumentSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.blocks != other.blocks {
            changes.push(format!("blocks: {} → {}", self.blocks, other.blocks));
        }
        if self.concealed != other.concealed {
            changes.push(format!(
                "concealed: {} → {}",
                self.concealed, other.concealed
            ));
        }
        if self.revealed != other.revealed {
            changes.push(format!("revealed: {} → {}", self.revealed, other.revealed));
        }
        if self.is_empty != other.is_empty {
            changes.push(format!("empty: {} → {}", self.is_empty, other.is_empty));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
