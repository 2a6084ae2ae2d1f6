use std::path::Path;

use fltk::{app, dialog, prelude::*};

use mark_pad::app::{
    AppSettings, EventBus, MainPage, Message, PreviewEvent, SystemLauncher, detect_system_dark_mode,
};
use mark_pad::ui::{FltkHost, main_window::build_main_window, menu::build_menu, theme::apply_theme};

fn main() {
    env_logger::init();

    let app = app::App::default();
    let settings = AppSettings::load();
    let dark = settings.theme_mode.is_dark(detect_system_dark_mode);

    let (sender, receiver) = app::channel::<Message>();
    let bus: EventBus<PreviewEvent> = EventBus::new();

    let widgets = build_main_window(&sender, &settings);
    let mut host = FltkHost::new(widgets, sender.clone(), bus.clone());
    build_menu(host.menu_mut(), &sender);
    apply_theme(host.themed(), dark);

    let mut page = MainPage::new(host, &settings, dark, Box::new(SystemLauncher));
    page.keep_subscription(bus.subscribe({
        let sender = sender.clone();
        move |event: &PreviewEvent| {
            sender.send(Message::Preview(*event));
        }
    }));

    for arg in std::env::args().skip(1) {
        if let Err(e) = page.view_model_mut().open_path(Path::new(&arg)) {
            log::error!("Could not open {}: {}", arg, e);
        }
    }

    page.host_mut().window().show();
    sender.send(Message::PageLoaded);

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        log::trace!("Dispatch {:?}", msg);

        if msg == Message::FileQuit {
            let unsaved = page.view_model().documents().iter().any(|d| d.is_dirty());
            if unsaved {
                let choice = dialog::choice2_default(
                    "There are unsaved changes. Quit anyway?",
                    "Cancel",
                    "Quit",
                    "",
                );
                if choice != Some(1) {
                    continue;
                }
            }

            let mut settings = settings.clone();
            settings.distraction_free = page.view_model().distraction_free();
            if let Err(e) = settings.save() {
                log::warn!("Could not save settings: {}", e);
            }
            app.quit();
            break;
        }

        page.handle(msg);
    }
}
