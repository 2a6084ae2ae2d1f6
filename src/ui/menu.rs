use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // Ctrl+N/O/S go through the editor and window key routing, so the menu binds no shortcut for them.
    menu.add("File/New", Shortcut::None, MenuFlag::Normal, { let s = s.clone(); move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::None, MenuFlag::Normal, { let s = s.clone(); move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::None, MenuFlag::Normal, { let s = s.clone(); move |_| s.send(Message::FileSave) });
    menu.add("File/Export HTML...", Shortcut::None, MenuFlag::MenuDivider, { let s = s.clone(); move |_| s.send(Message::ExportHtml) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = s.clone(); move |_| s.send(Message::FileQuit) });

    // Format
    menu.add("Format/Bold", Shortcut::Ctrl | 'b', MenuFlag::Normal, { let s = s.clone(); move |_| s.send(Message::FormatBold) });
    menu.add("Format/Italic", Shortcut::Ctrl | 'i', MenuFlag::Normal, { let s = s.clone(); move |_| s.send(Message::FormatItalic) });
    menu.add("Format/Link...", Shortcut::Ctrl | 'k', MenuFlag::Normal, { let s = s.clone(); move |_| s.send(Message::InsertLink) });

    // View
    menu.add("View/Editor Only", Shortcut::None, MenuFlag::Normal, { let s = s.clone(); move |_| s.send(Message::ShowEditorPane) });
    menu.add("View/Preview Only", Shortcut::None, MenuFlag::Normal, { let s = s.clone(); move |_| s.send(Message::ShowPreviewPane) });
    menu.add("View/Distraction Free", Shortcut::None | Key::F11, MenuFlag::MenuDivider, { let s = s.clone(); move |_| s.send(Message::ToggleDistraction) });
    menu.add("View/Show Toolbar", Shortcut::None, MenuFlag::Normal, { let s = s.clone(); move |_| s.send(Message::EditorRightClicked) });
}
