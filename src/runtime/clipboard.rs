//! Host clipboard seam

use std::cell::RefCell;
use std::rc::Rc;

/// Plain-text clipboard the runtime reads and writes for copy, cut and paste
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
    fn get_text(&mut self) -> Result<String, String>;
}

/// The desktop clipboard
///
/// A handle is opened per operation, so a host without a display only fails
/// when the clipboard is actually used.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.set_text(text).map_err(|e| e.to_string())
    }

    fn get_text(&mut self) -> Result<String, String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.get_text().map_err(|e| e.to_string())
    }
}

/// In-process clipboard; clones share the same contents
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        *self.contents.borrow_mut() = text.to_string();
        Ok(())
    }

    fn get_text(&mut self) -> Result<String, String> {
        Ok(self.contents())
    }
}
