//! What the main page needs from the widget toolkit.
//!
//! The FLTK shell in `crate::ui` implements these; the page's own tests use
//! an in-memory fake.

use std::path::PathBuf;
use std::time::Duration;

use crate::app::domain::VisualState;
use crate::app::services::timer::TimerTicket;

/// The text editing control.
pub trait EditorSurface {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    fn selection_text(&self) -> String;
    /// Byte offsets of the selection; equal when nothing is selected.
    fn selection_range(&self) -> (usize, usize);
    /// Replace the selection (or insert at the caret) and select the new text.
    fn replace_selection(&mut self, text: &str);
    fn set_selection_range(&mut self, start: usize, end: usize);
    fn focus_editor(&mut self);
}

/// The HTML preview and its static snapshot stand-in.
pub trait PreviewSurface {
    fn navigate_to_string(&mut self, html: &str);
    /// Refresh the snapshot from what the live preview shows right now.
    fn redraw_snapshot(&mut self);
    fn set_live_visible(&mut self, visible: bool);
    fn set_snapshot_visible(&mut self, visible: bool);
}

/// Window-level operations.
pub trait ShellView {
    fn go_to_state(&mut self, state: VisualState);
    fn window_size(&self) -> (i32, i32);
    fn is_fullscreen(&self) -> bool;
    fn set_toolbar_open(&mut self, open: bool);
    fn set_title(&mut self, title: &str);
    fn set_document_list(&mut self, names: &[String], selected: Option<usize>);
    /// Open the link dialog without blocking; completion arrives as a message.
    fn show_link_dialog(&mut self, selection: &str);
    fn pick_open_path(&mut self) -> Option<PathBuf>;
    fn pick_save_path(&mut self, title: &str, suggested_name: &str) -> Option<PathBuf>;
    fn alert(&mut self, message: &str);
}

/// Arranges for a ticket to be posted back after a delay.
pub trait TimerHost {
    fn schedule(&mut self, ticket: TimerTicket, after: Duration);
}

pub trait PageHost: EditorSurface + PreviewSurface + ShellView + TimerHost {}

impl<T: EditorSurface + PreviewSurface + ShellView + TimerHost> PageHost for T {}
