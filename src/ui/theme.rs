use fltk::{
    enums::Color,
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use super::toolbar::Toolbar;

pub struct Themed<'a> {
    pub editor: &'a mut TextEditor,
    pub live: &'a mut HelpView,
    pub snapshot: &'a mut HelpView,
    pub window: &'a mut Window,
    pub menu: &'a mut MenuBar,
    pub toolbar: &'a mut Toolbar,
}

pub fn apply_theme(w: Themed<'_>, is_dark: bool) {
    let (page_bg, page_fg, chrome_bg, chrome_fg) = if is_dark {
        editor_dark(w.editor);
        (
            Color::from_rgb(30, 30, 30),
            Color::from_rgb(220, 220, 220),
            Color::from_rgb(35, 35, 35),
            Color::from_rgb(220, 220, 220),
        )
    } else {
        editor_light(w.editor);
        (
            Color::White,
            Color::from_rgb(32, 32, 32),
            Color::from_rgb(240, 240, 240),
            Color::Black,
        )
    };

    for view in [w.live, w.snapshot] {
        view.set_color(page_bg);
        view.set_text_color(page_fg);
        view.redraw();
    }

    w.window.set_color(chrome_bg);
    w.window.set_label_color(chrome_fg);
    w.menu.set_color(chrome_bg);
    w.menu.set_text_color(chrome_fg);
    w.menu.set_selection_color(if is_dark {
        Color::from_rgb(60, 60, 60)
    } else {
        Color::from_rgb(200, 200, 200)
    });
    w.toolbar.set_colors(chrome_bg, chrome_fg);

    w.editor.redraw();
    w.window.redraw();
    w.menu.redraw();
}

fn editor_dark(editor: &mut TextEditor) {
    editor.set_color(Color::from_rgb(30, 30, 30));
    editor.set_text_color(Color::from_rgb(220, 220, 220));
    editor.set_cursor_color(Color::White);
    editor.set_selection_color(Color::from_rgb(70, 70, 100));
}

fn editor_light(editor: &mut TextEditor) {
    editor.set_color(Color::White);
    editor.set_text_color(Color::Black);
    editor.set_cursor_color(Color::Black);
    editor.set_selection_color(Color::from_rgb(173, 216, 230));
}
