//! Mask message handlers (hide, restore, bulk toggle)

use crate::commands::Cmd;
use crate::error::EditorError;
use crate::mask::{self, Visibility};
use crate::messages::MaskMsg;
use crate::model::AppModel;

/// Handle mask messages
pub fn update_mask(model: &mut AppModel, msg: MaskMsg) -> Option<Cmd> {
    match msg {
        MaskMsg::HideSelection => {
            match mask::conceal(&mut model.document, model.selection) {
                Ok(_) => {
                    model.selection = None;
                    model.ui.set_status("Tucked away \u{2665}");
                }
                Err(EditorError::EmptySelection) => {
                    model.ui.set_status("Select some text first \u{2665}");
                }
                Err(e) => model.ui.set_status(e.to_string()),
            }
            model.refresh_empty();
            Some(Cmd::Redraw)
        }

        MaskMsg::RestoreMask(id) => {
            match mask::reveal_one(&mut model.document, id) {
                Ok(()) => {
                    // Indices past the restored mask may have shifted
                    model.selection = None;
                    model.ui.set_status("Restored hidden text");
                }
                Err(e) => model.ui.set_status(e.to_string()),
            }
            model.refresh_empty();
            Some(Cmd::Redraw)
        }

        MaskMsg::ToggleAll => {
            let direction = model.visibility;
            match mask::toggle(&mut model.document, &mut model.visibility) {
                Ok(count) => {
                    tracing::debug!(count, visibility = ?model.visibility, "bulk toggle");
                    model.selection = None;
                    model.ui.set_status(match model.visibility {
                        Visibility::Revealed => "Showing all hidden text",
                        Visibility::Concealed => "Hidden again",
                    });
                }
                Err(EditorError::NothingToToggle) => {
                    model.ui.set_status(match direction {
                        Visibility::Concealed => "Nothing hidden to show",
                        Visibility::Revealed => "Nothing to hide again",
                    });
                }
                Err(e) => model.ui.set_status(e.to_string()),
            }
            model.refresh_empty();
            Some(Cmd::Redraw)
        }
    }
}
