use super::documents::DocumentCommand;
use crate::app::domain::PageKey;

/// Tracks the Control modifier across key events and maps Ctrl+N/O/S to
/// document commands.
#[derive(Debug, Default)]
pub struct KeyboardRouter {
    ctrl_pressed: bool,
}

impl KeyboardRouter {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_ctrl_pressed(&self) -> bool {
        self.ctrl_pressed
    }

    /// Forget the Control state, e.g. after a modal picker ate its release.
    pub fn reset(&mut self) {
        self.ctrl_pressed = false;
    }

    pub fn key_down(&mut self, key: PageKey) -> Option<DocumentCommand> {
        if key == PageKey::Control {
            self.ctrl_pressed = true;
            return None;
        }
        if !self.ctrl_pressed {
            return None;
        }
        match key {
            PageKey::Letter('n') => Some(DocumentCommand::New),
            PageKey::Letter('o') => Some(DocumentCommand::Open),
            PageKey::Letter('s') => Some(DocumentCommand::Save),
            _ => None,
        }
    }

    pub fn key_up(&mut self, key: PageKey) {
        if key == PageKey::Control {
            self.ctrl_pressed = false;
        }
    }
}
