//! FLTK implementation of the main page's host traits.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use fltk::{
    app::{self, MouseButton, Sender},
    dialog,
    enums::{Event, Key},
    group::{Flex, Group},
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use crate::app::domain::{Message, PageKey, PreviewEvent, VisualState};
use crate::app::infrastructure::bus::EventBus;
use crate::app::infrastructure::host::{EditorSurface, PreviewSurface, ShellView, TimerHost};
use crate::app::services::timer::TimerTicket;

use super::buffer::{buffer_text_no_leak, selection_text_no_leak};
use super::dialogs::link::show_link_dialog;
use super::file_dialogs::{native_open_dialog, native_save_dialog};
use super::main_window::{MENU_HEIGHT, MainWidgets};
use super::toolbar::{TOOLBAR_HEIGHT, Toolbar};

/// Share of the window the preview gets when the layout is not wide.
const NARROW_PREVIEW_RATIO: f64 = 0.4;

pub struct FltkHost {
    wind: Window,
    root: Flex,
    menu: MenuBar,
    content: Flex,
    editor: TextEditor,
    buffer: TextBuffer,
    preview: Group,
    live: HelpView,
    snapshot: HelpView,
    toolbar: Toolbar,
    sender: Sender<Message>,
    bus: EventBus<PreviewEvent>,
    last_html: Rc<RefCell<String>>,
    distraction_free: bool,
}

impl FltkHost {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>, bus: EventBus<PreviewEvent>) -> Self {
        let MainWidgets {
            mut wind,
            root,
            menu,
            content,
            mut editor,
            mut buffer,
            preview,
            mut live,
            snapshot,
            toolbar,
        } = widgets;

        wire_editor(&mut editor, sender.clone());
        wire_window_keys(&mut wind, sender.clone());

        buffer.add_modify_callback({
            let sender = sender.clone();
            move |_pos, inserted, deleted, _restyled, _deleted_text| {
                if inserted > 0 || deleted > 0 {
                    sender.send(Message::TextChanged);
                }
            }
        });

        let last_html = Rc::new(RefCell::new(String::new()));
        watch_links(&mut live, sender.clone(), last_html.clone());

        Self {
            wind,
            root,
            menu,
            content,
            editor,
            buffer,
            preview,
            live,
            snapshot,
            toolbar,
            sender,
            bus,
            last_html,
            distraction_free: false,
        }
    }

    pub fn window(&mut self) -> &mut Window {
        &mut self.wind
    }

    pub fn menu_mut(&mut self) -> &mut MenuBar {
        &mut self.menu
    }

    pub fn themed(&mut self) -> super::theme::Themed<'_> {
        super::theme::Themed {
            editor: &mut self.editor,
            live: &mut self.live,
            snapshot: &mut self.snapshot,
            window: &mut self.wind,
            menu: &mut self.menu,
            toolbar: &mut self.toolbar,
        }
    }

    fn set_menu_visible(&mut self, visible: bool) {
        if visible {
            self.menu.show();
            self.root.fixed(&self.menu, MENU_HEIGHT);
        } else {
            self.menu.hide();
            self.root.fixed(&self.menu, 0);
        }
    }

    fn relayout(&mut self) {
        self.content.recalc();
        self.root.recalc();
        self.wind.redraw();
    }
}

fn page_key(key: Key) -> PageKey {
    if key == Key::ControlL || key == Key::ControlR {
        PageKey::Control
    } else if key == Key::Tab {
        PageKey::Tab
    } else {
        key.to_char().map(PageKey::letter).unwrap_or(PageKey::Other)
    }
}

/// Forward a key event to the page. True when the key was a document
/// shortcut the widget must not handle itself.
fn route_key(sender: Sender<Message>, ev: Event) -> bool {
    let key = page_key(app::event_key());
    match ev {
        Event::KeyDown => {
            if key != PageKey::Control {
                // Resync Control: its release may have gone to a modal dialog.
                let ctrl = if app::is_event_ctrl() {
                    Message::KeyDown(PageKey::Control)
                } else {
                    Message::KeyUp(PageKey::Control)
                };
                sender.send(ctrl);
            }
            sender.send(Message::KeyDown(key));
            app::is_event_ctrl() && matches!(key, PageKey::Letter('n' | 'o' | 's'))
        }
        Event::KeyUp => {
            sender.send(Message::KeyUp(key));
            false
        }
        _ => false,
    }
}

/// Route editor keys and clicks to the page.
fn wire_editor(editor: &mut TextEditor, sender: Sender<Message>) {
    editor.handle(move |_, ev| match ev {
        Event::KeyDown if app::event_key() == Key::Tab => {
            sender.send(Message::EditorTab);
            true
        }
        Event::KeyDown | Event::KeyUp => route_key(sender.clone(), ev),
        Event::Unfocus => {
            sender.send(Message::KeyUp(PageKey::Control));
            false
        }
        Event::Push if app::event_mouse_button() == MouseButton::Right => {
            sender.send(Message::EditorRightClicked);
            true
        }
        Event::Push => {
            sender.send(Message::EditorClicked);
            false
        }
        _ => false,
    });
}

/// Keys that reach the window when the editor does not have focus.
fn wire_window_keys(wind: &mut Window, sender: Sender<Message>) {
    wind.handle(move |_, ev| match ev {
        Event::KeyDown | Event::KeyUp => route_key(sender.clone(), ev),
        _ => false,
    });
}

/// Payload for a followed link, taken from the filename the view tried to load.
fn link_payload(filename: Option<&Path>) -> Option<String> {
    let target = filename?.to_string_lossy().into_owned();
    if target.is_empty() { None } else { Some(target) }
}

/// Followed links surface as a failed load of `url:<href>`. Report the target
/// and put the rendered page back.
fn watch_links(live: &mut HelpView, sender: Sender<Message>, last_html: Rc<RefCell<String>>) {
    live.handle(move |view, ev| {
        if ev == Event::Released {
            let view = view.clone();
            let last_html = last_html.clone();
            let sender = sender.clone();
            app::add_timeout3(0.0, move |_| {
                let mut view = view.clone();
                let current = view.value().unwrap_or_default();
                let expected = last_html.borrow();
                if current == *expected {
                    return;
                }
                if let Some(target) = link_payload(Some(view.filename().as_path())) {
                    sender.send(Message::PreviewNotify(target));
                }
                // The view skips links matching its current filename; clear it
                // so the same link can be followed again.
                let _ = view.load("");
                view.set_value(&expected);
            });
        }
        false
    });
}

impl EditorSurface for FltkHost {
    fn text(&self) -> String {
        buffer_text_no_leak(&self.buffer)
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.buffer.unselect();
        self.editor.set_insert_position(0);
    }

    fn selection_text(&self) -> String {
        selection_text_no_leak(&self.buffer)
    }

    fn selection_range(&self) -> (usize, usize) {
        match self.buffer.selection_position() {
            Some((start, end)) => (start as usize, end as usize),
            None => {
                let pos = self.editor.insert_position() as usize;
                (pos, pos)
            }
        }
    }

    fn replace_selection(&mut self, text: &str) {
        let (start, end) = self.selection_range();
        self.buffer.replace(start as i32, end as i32, text);
        let new_end = (start + text.len()) as i32;
        self.buffer.select(start as i32, new_end);
        self.editor.set_insert_position(new_end);
        self.editor.show_insert_position();
    }

    fn set_selection_range(&mut self, start: usize, end: usize) {
        if start == end {
            self.buffer.unselect();
        } else {
            self.buffer.select(start as i32, end as i32);
        }
        self.editor.set_insert_position(end as i32);
    }

    fn focus_editor(&mut self) {
        let _ = self.editor.take_focus();
    }
}

impl PreviewSurface for FltkHost {
    fn navigate_to_string(&mut self, html: &str) {
        self.live.set_value(html);
        *self.last_html.borrow_mut() = html.to_string();
        self.sender.send(Message::PreviewLoaded);
    }

    fn redraw_snapshot(&mut self) {
        let current = self
            .live
            .value()
            .unwrap_or_else(|| self.last_html.borrow().clone());
        self.snapshot.set_value(&current);
    }

    fn set_live_visible(&mut self, visible: bool) {
        if visible {
            self.live.show();
        } else {
            self.live.hide();
        }
        self.preview.redraw();
    }

    fn set_snapshot_visible(&mut self, visible: bool) {
        if visible {
            self.snapshot.show();
        } else {
            self.snapshot.hide();
        }
        self.preview.redraw();
    }
}

impl ShellView for FltkHost {
    fn go_to_state(&mut self, state: VisualState) {
        log::debug!("Visual state -> {}", state.name());

        let entering = state == VisualState::DistractionFree;
        if entering != self.distraction_free {
            self.distraction_free = entering;
            self.set_menu_visible(!entering);
            self.wind.fullscreen(entering);
        }

        if state.shows_editor() {
            self.editor.show();
        } else {
            self.editor.hide();
        }
        if state.shows_preview() {
            self.preview.show();
        } else {
            self.preview.hide();
        }

        let preview_width = match state {
            VisualState::FilledOrNarrow | VisualState::FullScreenPortrait => {
                (self.content.w() as f64 * NARROW_PREVIEW_RATIO) as i32
            }
            // 0 hands the pane back to the flexible layout.
            _ => 0,
        };
        self.content.fixed(&self.preview, preview_width);
        self.relayout();
    }

    fn window_size(&self) -> (i32, i32) {
        (self.wind.w(), self.wind.h())
    }

    fn is_fullscreen(&self) -> bool {
        self.wind.fullscreen_active()
    }

    fn set_toolbar_open(&mut self, open: bool) {
        if open {
            self.toolbar.widget.show();
            self.root.fixed(&self.toolbar.widget, TOOLBAR_HEIGHT);
        } else {
            self.toolbar.widget.hide();
            self.root.fixed(&self.toolbar.widget, 0);
        }
        self.relayout();
    }

    fn set_title(&mut self, title: &str) {
        self.wind.set_label(title);
    }

    fn set_document_list(&mut self, names: &[String], selected: Option<usize>) {
        self.toolbar.set_documents(names, selected);
    }

    fn show_link_dialog(&mut self, selection: &str) {
        show_link_dialog(selection, self.sender.clone(), self.bus.clone());
    }

    fn pick_open_path(&mut self) -> Option<PathBuf> {
        native_open_dialog()
    }

    fn pick_save_path(&mut self, title: &str, suggested_name: &str) -> Option<PathBuf> {
        native_save_dialog(title, suggested_name)
    }

    fn alert(&mut self, message: &str) {
        dialog::alert_default(message);
    }
}

impl TimerHost for FltkHost {
    fn schedule(&mut self, ticket: TimerTicket, after: Duration) {
        let sender = self.sender.clone();
        app::add_timeout3(after.as_secs_f64(), move |_| {
            sender.send(Message::TimerElapsed(ticket));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_key_mapping() {
        assert_eq!(page_key(Key::ControlL), PageKey::Control);
        assert_eq!(page_key(Key::ControlR), PageKey::Control);
        assert_eq!(page_key(Key::Tab), PageKey::Tab);
        assert_eq!(page_key(Key::from_char('S')), PageKey::Letter('s'));
        assert_eq!(page_key(Key::Enter), PageKey::Other);
    }

    #[test]
    fn test_link_payload_from_filename() {
        assert_eq!(
            link_payload(Some(Path::new("url:https://rust-lang.org"))),
            Some("url:https://rust-lang.org".to_string())
        );
        // Cleared after each follow, so an empty name is not a link.
        assert_eq!(link_payload(Some(Path::new(""))), None);
        assert_eq!(link_payload(None), None);
    }
}
