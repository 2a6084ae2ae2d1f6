use fltk::{
    app::Sender,
    enums::{Event, Font},
    group::{Flex, Group},
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::{AppSettings, Message};
use super::toolbar::Toolbar;

pub const MENU_HEIGHT: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub root: Flex,
    pub menu: MenuBar,
    pub content: Flex,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub preview: Group,
    pub live: HelpView,
    pub snapshot: HelpView,
    pub toolbar: Toolbar,
}

pub fn build_main_window(sender: &Sender<Message>, settings: &AppSettings) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1024, 640, "MarkPad");
    wind.set_xclass("MarkPad");

    let mut root = Flex::new(0, 0, 1024, 640, None);
    root.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    root.fixed(&menu, MENU_HEIGHT);

    let mut content = Flex::default().row();
    content.set_pad(4);

    let buffer = TextBuffer::default();
    let mut editor = TextEditor::new(0, 0, 0, 0, "");
    editor.set_buffer(buffer.clone());
    editor.set_text_font(Font::Courier);
    editor.set_text_size(settings.font_size as i32);
    if settings.word_wrap_enabled {
        editor.wrap_mode(WrapMode::AtBounds, 0);
    }

    // Live preview and its snapshot share one rectangle; only one is shown.
    let mut preview = Group::new(0, 0, 512, 600, None);
    let mut live = HelpView::new(0, 0, 512, 600, None);
    live.set_text_size(settings.font_size as i32);
    let mut snapshot = HelpView::new(0, 0, 512, 600, None);
    snapshot.set_text_size(settings.font_size as i32);
    snapshot.hide();
    // The snapshot is a picture of the preview: no scrolling, no links.
    snapshot.handle(|_, ev| {
        matches!(
            ev,
            Event::Push | Event::Released | Event::Drag | Event::MouseWheel | Event::Enter | Event::Move
        )
    });
    preview.end();
    preview.resizable(&live);

    content.end();

    let toolbar = Toolbar::new(sender.clone());
    root.fixed(&toolbar.widget, 0);

    root.end();
    wind.resizable(&root);
    wind.end();

    {
        let s = sender.clone();
        wind.resize_callback(move |_, _, _, _, _| s.send(Message::WindowResized));
    }
    {
        let s = sender.clone();
        wind.set_callback(move |_| {
            if fltk::app::event() == Event::Close {
                s.send(Message::FileQuit);
            }
        });
    }

    MainWidgets {
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
    }
}
