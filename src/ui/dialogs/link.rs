use fltk::{
    app::Sender,
    button::{Button, ReturnButton},
    frame::Frame,
    input::Input,
    prelude::*,
    window::Window,
};

use crate::app::domain::{LinkRequest, Message, PreviewEvent};
use crate::app::infrastructure::bus::EventBus;

/// Show the Insert Link dialog without blocking the dispatch loop.
///
/// The preview is asked to step aside while the dialog is up and to come
/// back once it closes, whichever way it closes. An accepted link arrives as
/// [`Message::LinkAccepted`].
pub fn show_link_dialog(selection: &str, sender: Sender<Message>, bus: EventBus<PreviewEvent>) {
    let mut dialog_win = Window::default()
        .with_size(420, 150)
        .with_label("Insert Link")
        .center_screen();

    Frame::default().with_pos(15, 15).with_size(90, 30).with_label("Text:");
    let mut text_input = Input::default().with_pos(110, 15).with_size(295, 30);
    text_input.set_value(selection);

    Frame::default().with_pos(15, 55).with_size(90, 30).with_label("Address:");
    let address_input = Input::default().with_pos(110, 55).with_size(295, 30);

    let mut ok_btn = ReturnButton::default()
        .with_pos(225, 105).with_size(85, 30).with_label("OK");
    let mut cancel_btn = Button::default()
        .with_pos(320, 105).with_size(85, 30).with_label("Cancel");

    dialog_win.end();
    dialog_win.make_modal(true);
    dialog_win.make_resizable(false);

    bus.publish(&PreviewEvent::Hide);
    dialog_win.show();
    let mut focus = if selection.is_empty() { text_input.clone() } else { address_input.clone() };
    let _ = focus.take_focus();

    let dialog_ok = dialog_win.clone();
    let bus_ok = bus.clone();
    ok_btn.set_callback(move |_| {
        let request = LinkRequest {
            display_text: text_input.value(),
            address: address_input.value(),
        };
        dialog_ok.clone().hide();
        sender.send(Message::LinkAccepted(request));
        bus_ok.publish(&PreviewEvent::Show);
    });

    let dialog_cancel = dialog_win.clone();
    let bus_cancel = bus.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
        bus_cancel.publish(&PreviewEvent::Show);
    });

    // Window close button and Escape
    let dialog_x = dialog_win.clone();
    dialog_win.set_callback(move |_| {
        dialog_x.clone().hide();
        bus.publish(&PreviewEvent::Show);
    });
}
