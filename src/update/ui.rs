//! UI message handlers (status bar)

use std::time::Duration;

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::{AppModel, TransientMessage};

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::SetTransientMessage { text, duration_ms } => {
            let transient = TransientMessage::new(text, Duration::from_millis(duration_ms));
            model.ui.transient_message = Some(transient);
            Some(Cmd::Redraw)
        }

        UiMsg::ClearTransientMessage => {
            model.ui.transient_message = None;
            Some(Cmd::Redraw)
        }
    }
}
