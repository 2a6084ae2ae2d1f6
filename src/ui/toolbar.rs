use fltk::{
    app::Sender,
    button::Button,
    enums::{Color, Shortcut},
    frame::Frame,
    group::Flex,
    menu::{Choice, MenuFlag},
    prelude::*,
};

use crate::app::domain::Message;

pub const TOOLBAR_HEIGHT: i32 = 40;

/// Bottom bar opened by a right click in the editor.
pub struct Toolbar {
    pub widget: Flex,
    documents: Choice,
    buttons: Vec<Button>,
}

fn toolbar_button(label: &str, width: i32, row: &mut Flex, sender: Sender<Message>, msg: Message) -> Button {
    let mut btn = Button::default().with_label(label);
    row.fixed(&btn, width);
    btn.set_callback(move |_| sender.send(msg.clone()));
    btn
}

impl Toolbar {
    pub fn new(sender: Sender<Message>) -> Self {
        let mut widget = Flex::default().row();
        widget.set_margin(4);
        widget.set_pad(6);

        let buttons = vec![
            toolbar_button("Bold", 60, &mut widget, sender.clone(), Message::FormatBold),
            toolbar_button("Italic", 60, &mut widget, sender.clone(), Message::FormatItalic),
            toolbar_button("Link...", 70, &mut widget, sender.clone(), Message::InsertLink),
            toolbar_button("Editor", 70, &mut widget, sender.clone(), Message::ShowEditorPane),
            toolbar_button("Preview", 70, &mut widget, sender.clone(), Message::ShowPreviewPane),
            toolbar_button("Focus", 70, &mut widget, sender.clone(), Message::ToggleDistraction),
        ];

        // Spacer pushes the document list and close button to the right.
        Frame::default();

        let mut documents = Choice::default();
        widget.fixed(&documents, 200);
        documents.set_callback({
            let sender = sender.clone();
            move |c| {
                if c.value() >= 0 {
                    sender.send(Message::SelectDocument(c.value() as usize));
                }
            }
        });

        let mut buttons = buttons;
        buttons.push(toolbar_button("Close", 60, &mut widget, sender.clone(), Message::CloseToolbar));

        widget.end();
        widget.hide();

        Self {
            widget,
            documents,
            buttons,
        }
    }

    pub fn set_documents(&mut self, names: &[String], selected: Option<usize>) {
        self.documents.clear();
        for name in names {
            self.documents
                .add(&menu_label(name), Shortcut::None, MenuFlag::Normal, |_| {});
        }
        if let Some(index) = selected {
            self.documents.set_value(index as i32);
        }
        self.documents.redraw();
    }

    pub fn set_colors(&mut self, background: Color, foreground: Color) {
        self.widget.set_color(background);
        self.documents.set_color(background);
        self.documents.set_text_color(foreground);
        for btn in &mut self.buttons {
            btn.set_color(background);
            btn.set_label_color(foreground);
        }
        self.widget.redraw();
    }
}

/// Escape characters FLTK's menu paths treat specially.
pub fn menu_label(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(c, '\\' | '/' | '&' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_label_plain() {
        assert_eq!(menu_label("notes.md"), "notes.md");
    }

    #[test]
    fn test_menu_label_escapes_path_chars() {
        assert_eq!(menu_label("a/b_c&d"), "a\\/b\\_c\\&d");
        assert_eq!(menu_label("back\\slash"), "back\\\\slash");
    }
}
