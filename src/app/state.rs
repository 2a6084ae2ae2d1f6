use crate::app::controllers::documents::{DocumentCommand, DocumentViewModel};
use crate::app::controllers::keyboard::KeyboardRouter;
use crate::app::controllers::preview::PreviewController;
use crate::app::domain::visual_state::{ViewState, determine_visual_state, distraction_state};
use crate::app::domain::{AppSettings, Message, PageKey, PreviewEvent, VisualState};
use crate::app::infrastructure::bus::Subscription;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::host::PageHost;
use crate::app::infrastructure::platform::UriLauncher;
use crate::app::services::links;
use crate::app::services::text_ops;
use crate::app::services::timer::{TimerKind, TimerTicket};

/// The main page: routes host events to the view-model and drives the
/// preview, toolbar and layout state of the window.
pub struct MainPage<H: PageHost> {
    host: H,
    view_model: DocumentViewModel,
    keyboard: KeyboardRouter,
    preview: PreviewController,
    launcher: Box<dyn UriLauncher>,
    visual_state: Option<VisualState>,
    toolbar_open: bool,
    wide_threshold: i32,
    subscriptions: Vec<Subscription>,
}

impl<H: PageHost> MainPage<H> {
    pub fn new(host: H, settings: &AppSettings, dark: bool, launcher: Box<dyn UriLauncher>) -> Self {
        Self {
            host,
            view_model: DocumentViewModel::new(settings.distraction_free, dark),
            keyboard: KeyboardRouter::new(),
            preview: PreviewController::new(settings.preview_delay()),
            launcher,
            visual_state: None,
            toolbar_open: false,
            wide_threshold: settings.wide_layout_threshold,
            subscriptions: Vec::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn view_model(&self) -> &DocumentViewModel {
        &self.view_model
    }

    pub fn view_model_mut(&mut self) -> &mut DocumentViewModel {
        &mut self.view_model
    }

    pub fn visual_state(&self) -> Option<VisualState> {
        self.visual_state
    }

    /// Keep a bus subscription alive for as long as the page exists.
    pub fn keep_subscription(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::PageLoaded => self.loaded(),
            Message::WindowResized => self.window_resized(),
            // The dispatch loop owns shutdown.
            Message::FileQuit => {}

            Message::FileNew => self.safely_execute(DocumentCommand::New),
            Message::FileOpen => self.safely_execute(DocumentCommand::Open),
            Message::FileSave => self.safely_execute(DocumentCommand::Save),
            Message::ExportHtml => self.safely_execute(DocumentCommand::ExportHtml),
            Message::SelectDocument(index) => {
                if self.view_model.select_index(index) {
                    self.selection_changed();
                }
            }

            Message::KeyDown(key) => self.key_down(key),
            Message::KeyUp(key) => self.keyboard.key_up(key),
            Message::EditorTab => self.insert_tab(),
            Message::EditorRightClicked => self.open_toolbar(),
            Message::EditorClicked => {
                if self.toolbar_open {
                    self.close_toolbar();
                }
            }
            Message::TextChanged => self.text_changed(),

            Message::FormatBold => self.transform_selection(text_ops::bold),
            Message::FormatItalic => self.transform_selection(text_ops::italic),
            Message::InsertLink => {
                let selection = self.host.selection_text();
                self.host.show_link_dialog(&selection);
            }
            Message::LinkAccepted(request) => self.transform_selection(|_| {
                text_ops::link(&request.display_text, &request.address)
            }),

            Message::CloseToolbar => self.close_toolbar(),

            Message::PreviewLoaded => self.host.focus_editor(),
            Message::PreviewNotify(payload) => self.preview_notify(&payload),
            Message::Preview(PreviewEvent::Hide) => self.preview.show_snapshot(&mut self.host),
            Message::Preview(PreviewEvent::Show) => self.preview.schedule_restore(&mut self.host),

            Message::ShowPreviewPane => self.go_to_state(VisualState::SnappedPreview),
            Message::ShowEditorPane => self.go_to_state(VisualState::Snapped),
            Message::ToggleDistraction => self.toggle_distraction(),

            Message::TimerElapsed(ticket) => self.timer_elapsed(ticket),
        }
    }

    fn loaded(&mut self) {
        if self.view_model.documents().is_empty() {
            self.view_model.new_document();
        }
        self.selection_changed();
        let state = distraction_state(self.view_model.distraction_free());
        self.go_to_state(state);
    }

    // --- Keyboard ---

    fn key_down(&mut self, key: PageKey) {
        if let Some(command) = self.keyboard.key_down(key) {
            self.safely_execute(command);
        }
    }

    fn safely_execute(&mut self, command: DocumentCommand) {
        if self.view_model.can_execute(command) {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: DocumentCommand) {
        if command != DocumentCommand::New {
            // The picker is modal and swallows the Control release.
            self.keyboard.reset();
        }
        let result = match command {
            DocumentCommand::New => {
                self.view_model.new_document();
                Ok(true)
            }
            DocumentCommand::Open => self.open_document(),
            DocumentCommand::Save => self.save_selected(),
            DocumentCommand::ExportHtml => self.export_selected(),
        };

        match result {
            Ok(true) if matches!(command, DocumentCommand::New | DocumentCommand::Open) => {
                self.selection_changed();
            }
            Ok(true) => self.refresh_chrome(),
            Ok(false) => {}
            Err(e) => {
                log::error!("{:?} failed: {}", command, e);
                self.host.alert(&format!("{:?} failed: {}", command, e));
            }
        }
    }

    /// Returns Ok(false) when the user cancelled the picker.
    fn open_document(&mut self) -> Result<bool> {
        let Some(path) = self.host.pick_open_path() else {
            return Ok(false);
        };
        self.view_model.open_path(&path)?;
        log::info!("Opened {}", path.display());
        Ok(true)
    }

    fn save_selected(&mut self) -> Result<bool> {
        let doc = self.view_model.selected_document().ok_or(AppError::NoDocument)?;
        let path = match doc.file_path.clone() {
            Some(path) => path,
            None => {
                let suggested = doc.suggested_file_name();
                match self.host.pick_save_path("Save As", &suggested) {
                    Some(path) => path,
                    None => return Ok(false),
                }
            }
        };
        self.view_model.save_selected(&path)?;
        log::info!("Saved {}", path.display());
        Ok(true)
    }

    fn export_selected(&mut self) -> Result<bool> {
        let doc = self.view_model.selected_document().ok_or(AppError::NoDocument)?;
        let stem = doc
            .display_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&doc.display_name);
        let suggested = format!("{}.html", stem);
        let Some(path) = self.host.pick_save_path("Export HTML", &suggested) else {
            return Ok(false);
        };
        self.view_model.export_html(&path)?;
        log::info!("Exported {}", path.display());
        Ok(true)
    }

    // --- Documents ---

    fn selection_changed(&mut self) {
        let text = self
            .view_model
            .selected_document()
            .map(|d| d.text().to_string())
            .unwrap_or_default();
        self.host.set_text(&text);
        self.refresh_chrome();
        self.preview.text_changed(&mut self.host);
    }

    fn refresh_chrome(&mut self) {
        let title = self.view_model.title();
        self.host.set_title(&title);
        let names = self.view_model.display_names();
        self.host.set_document_list(&names, self.view_model.selected_index());
    }

    fn text_changed(&mut self) {
        let text = self.host.text();
        let mut dirty_changed = false;
        if let Some(doc) = self.view_model.selected_document_mut() {
            let was_dirty = doc.is_dirty();
            doc.set_text(&text);
            dirty_changed = doc.is_dirty() != was_dirty;
        }
        if dirty_changed {
            self.refresh_chrome();
        }
        self.preview.text_changed(&mut self.host);
    }

    // --- Editing ---

    fn transform_selection<F>(&mut self, transform: F)
    where
        F: FnOnce(&str) -> String,
    {
        let selection = self.host.selection_text();
        let replaced = transform(&selection);
        self.host.replace_selection(&replaced);
    }

    fn insert_tab(&mut self) {
        let selection = self.host.selection_text();
        let (start, _) = self.host.selection_range();
        let (replacement, caret_offset) = text_ops::indent_with_tab(&selection);
        self.host.replace_selection(&replacement);
        let caret = start + caret_offset;
        self.host.set_selection_range(caret, caret);
    }

    // --- Toolbar and preview ---

    fn open_toolbar(&mut self) {
        self.toolbar_open = true;
        self.host.set_toolbar_open(true);
        self.preview.show_snapshot(&mut self.host);
    }

    fn close_toolbar(&mut self) {
        self.toolbar_open = false;
        self.host.set_toolbar_open(false);
        self.preview.schedule_restore(&mut self.host);
    }

    fn timer_elapsed(&mut self, ticket: TimerTicket) {
        match ticket.kind {
            TimerKind::PreviewRefresh => {
                if self.preview.refresh_elapsed(ticket) {
                    self.render_preview();
                }
            }
            TimerKind::PreviewRestore => {
                if !self.preview.restore_elapsed(ticket, &mut self.host) {
                    log::trace!("Stale restore tick {:?}", ticket);
                }
            }
        }
    }

    fn render_preview(&mut self) {
        if let Some(html) = self.view_model.transform(true) {
            self.host.navigate_to_string(&html);
            self.preview.rendered(&mut self.host);
        }
    }

    fn preview_notify(&mut self, payload: &str) {
        let Some(uri) = links::link_target(payload) else {
            log::debug!("Dropping preview notification {:?}", payload);
            return;
        };
        if let Err(e) = self.launcher.launch(&uri) {
            log::debug!("Could not launch {}: {}", uri, e);
        }
    }

    // --- Layout ---

    fn go_to_state(&mut self, state: VisualState) {
        self.host.go_to_state(state);
        self.visual_state = Some(state);
    }

    fn toggle_distraction(&mut self) {
        let next = !self.view_model.distraction_free();
        self.view_model.set_distraction_free(next);
        self.go_to_state(distraction_state(next));
    }

    fn window_resized(&mut self) {
        if self.view_model.distraction_free() {
            return;
        }
        let (width, height) = self.host.window_size();
        let view_state = ViewState::from_window(width, height, self.host.is_fullscreen());
        let mut state = determine_visual_state(view_state, width, self.wide_threshold);
        if state == VisualState::Snapped && self.visual_state == Some(VisualState::SnappedPreview) {
            state = VisualState::SnappedPreview;
        }
        if self.visual_state != Some(state) {
            self.go_to_state(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::LinkRequest;
    use crate::app::infrastructure::bus::EventBus;
    use crate::app::infrastructure::host::{EditorSurface, PreviewSurface, ShellView, TimerHost};
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;
    use std::time::Duration;
    use url::Url;

    #[derive(Default)]
    struct FakeHost {
        text: String,
        selection: (usize, usize),
        focused: usize,
        rendered: Vec<String>,
        live_visible: bool,
        snapshot_visible: bool,
        snapshot: String,
        states: Vec<VisualState>,
        size: (i32, i32),
        fullscreen: bool,
        toolbar_open: bool,
        title: String,
        doc_list: (Vec<String>, Option<usize>),
        link_dialogs: Vec<String>,
        open_path: Option<PathBuf>,
        save_path: Option<PathBuf>,
        alerts: Vec<String>,
        scheduled: Vec<TimerTicket>,
    }

    impl EditorSurface for FakeHost {
        fn text(&self) -> String {
            self.text.clone()
        }
        fn set_text(&mut self, text: &str) {
            self.text = text.to_string();
            self.selection = (0, 0);
        }
        fn selection_text(&self) -> String {
            self.text[self.selection.0..self.selection.1].to_string()
        }
        fn selection_range(&self) -> (usize, usize) {
            self.selection
        }
        fn replace_selection(&mut self, text: &str) {
            let (start, end) = self.selection;
            self.text.replace_range(start..end, text);
            self.selection = (start, start + text.len());
        }
        fn set_selection_range(&mut self, start: usize, end: usize) {
            self.selection = (start, end);
        }
        fn focus_editor(&mut self) {
            self.focused += 1;
        }
    }

    impl PreviewSurface for FakeHost {
        fn navigate_to_string(&mut self, html: &str) {
            self.rendered.push(html.to_string());
        }
        fn redraw_snapshot(&mut self) {
            self.snapshot = self.rendered.last().cloned().unwrap_or_default();
        }
        fn set_live_visible(&mut self, visible: bool) {
            self.live_visible = visible;
        }
        fn set_snapshot_visible(&mut self, visible: bool) {
            self.snapshot_visible = visible;
        }
    }

    impl ShellView for FakeHost {
        fn go_to_state(&mut self, state: VisualState) {
            self.states.push(state);
        }
        fn window_size(&self) -> (i32, i32) {
            self.size
        }
        fn is_fullscreen(&self) -> bool {
            self.fullscreen
        }
        fn set_toolbar_open(&mut self, open: bool) {
            self.toolbar_open = open;
        }
        fn set_title(&mut self, title: &str) {
            self.title = title.to_string();
        }
        fn set_document_list(&mut self, names: &[String], selected: Option<usize>) {
            self.doc_list = (names.to_vec(), selected);
        }
        fn show_link_dialog(&mut self, selection: &str) {
            self.link_dialogs.push(selection.to_string());
        }
        fn pick_open_path(&mut self) -> Option<PathBuf> {
            self.open_path.clone()
        }
        fn pick_save_path(&mut self, _title: &str, _suggested_name: &str) -> Option<PathBuf> {
            self.save_path.clone()
        }
        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    impl TimerHost for FakeHost {
        fn schedule(&mut self, ticket: TimerTicket, _after: Duration) {
            self.scheduled.push(ticket);
        }
    }

    struct RecordingLauncher(Rc<RefCell<Vec<String>>>);

    impl UriLauncher for RecordingLauncher {
        fn launch(&self, uri: &Url) -> Result<()> {
            self.0.borrow_mut().push(uri.to_string());
            Ok(())
        }
    }

    struct FailingLauncher;

    impl UriLauncher for FailingLauncher {
        fn launch(&self, _uri: &Url) -> Result<()> {
            Err(AppError::Launch("no handler".to_string()))
        }
    }

    fn page() -> (MainPage<FakeHost>, Rc<RefCell<Vec<String>>>) {
        let launched = Rc::new(RefCell::new(Vec::new()));
        let host = FakeHost {
            size: (1600, 900),
            live_visible: true,
            ..Default::default()
        };
        let mut page = MainPage::new(
            host,
            &AppSettings::default(),
            false,
            Box::new(RecordingLauncher(launched.clone())),
        );
        page.handle(Message::PageLoaded);
        (page, launched)
    }

    fn type_text(page: &mut MainPage<FakeHost>, text: &str) {
        page.host_mut().text = text.to_string();
        page.handle(Message::TextChanged);
    }

    fn fire_all_timers(page: &mut MainPage<FakeHost>) {
        let tickets: Vec<TimerTicket> = page.host_mut().scheduled.drain(..).collect();
        for ticket in tickets {
            page.handle(Message::TimerElapsed(ticket));
        }
    }

    #[test]
    fn test_load_creates_document_and_sets_state() {
        let (page, _) = page();
        assert_eq!(page.view_model().documents().len(), 1);
        assert_eq!(page.host().title, "Untitled - MarkPad");
        assert_eq!(page.host().doc_list, (vec!["Untitled".to_string()], Some(0)));
        assert_eq!(page.visual_state(), Some(VisualState::FullScreenLandscapeOrWide));
    }

    #[test]
    fn test_load_in_distraction_free_mode() {
        let mut settings = AppSettings::default();
        settings.distraction_free = true;
        let mut page = MainPage::new(FakeHost::default(), &settings, false, Box::new(FailingLauncher));
        page.handle(Message::PageLoaded);
        assert_eq!(page.visual_state(), Some(VisualState::DistractionFree));
    }

    #[test]
    fn test_text_change_copies_into_document_and_debounces() {
        let (mut page, _) = page();
        fire_all_timers(&mut page);
        page.host_mut().rendered.clear();

        for text in ["#", "# H", "# He", "# Hello"] {
            type_text(&mut page, text);
        }
        assert_eq!(page.view_model().selected_document().unwrap().text(), "# Hello");
        assert_eq!(page.host().title, "*Untitled - MarkPad");

        fire_all_timers(&mut page);
        assert_eq!(page.host().rendered.len(), 1);
        assert!(page.host().rendered[0].contains("<h1>Hello</h1>"));
    }

    #[test]
    fn test_preview_loaded_focuses_editor() {
        let (mut page, _) = page();
        page.handle(Message::PreviewLoaded);
        assert_eq!(page.host().focused, 1);
    }

    #[test]
    fn test_ctrl_n_creates_document() {
        let (mut page, _) = page();
        page.handle(Message::KeyDown(PageKey::Letter('n')));
        assert_eq!(page.view_model().documents().len(), 1);

        page.handle(Message::KeyDown(PageKey::Control));
        page.handle(Message::KeyDown(PageKey::Letter('n')));
        assert_eq!(page.view_model().documents().len(), 2);

        page.handle(Message::KeyUp(PageKey::Control));
        page.handle(Message::KeyDown(PageKey::Letter('n')));
        assert_eq!(page.view_model().documents().len(), 2);
    }

    #[test]
    fn test_ctrl_s_saves_to_picked_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");
        let (mut page, _) = page();
        type_text(&mut page, "saved text");
        page.host_mut().save_path = Some(path.clone());

        page.handle(Message::KeyDown(PageKey::Control));
        page.handle(Message::KeyDown(PageKey::Letter('s')));

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "saved text");
        assert_eq!(page.host().title, "out.md - MarkPad");
    }

    #[test]
    fn test_ctrl_state_cleared_after_picker() {
        let (mut page, _) = page();
        page.handle(Message::KeyDown(PageKey::Control));
        page.handle(Message::KeyDown(PageKey::Letter('o')));
        // Control was released inside the (cancelled) picker; no KeyUp reaches us.
        page.handle(Message::KeyDown(PageKey::Letter('n')));
        page.handle(Message::KeyDown(PageKey::Letter('n')));
        assert_eq!(page.view_model().documents().len(), 1);
        assert!(page.host().alerts.is_empty());
    }

    #[test]
    fn test_save_cancelled_does_nothing() {
        let (mut page, _) = page();
        type_text(&mut page, "draft");
        page.handle(Message::FileSave);
        assert!(page.host().alerts.is_empty());
        assert!(page.view_model().selected_document().unwrap().is_dirty());
    }

    #[test]
    fn test_open_failure_alerts() {
        let dir = tempfile::tempdir().unwrap();
        let (mut page, _) = page();
        page.host_mut().open_path = Some(dir.path().join("missing.md"));
        page.handle(Message::FileOpen);
        assert_eq!(page.host().alerts.len(), 1);
        assert_eq!(page.view_model().documents().len(), 1);
    }

    #[test]
    fn test_open_loads_text_into_editor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readme.md");
        std::fs::write(&path, "# Readme").unwrap();

        let (mut page, _) = page();
        page.host_mut().open_path = Some(path);
        page.handle(Message::FileOpen);

        assert_eq!(page.host().text, "# Readme");
        assert_eq!(page.host().doc_list.1, Some(1));
        // Echo of the loaded text must not dirty the document.
        page.handle(Message::TextChanged);
        assert!(!page.view_model().selected_document().unwrap().is_dirty());
    }

    #[test]
    fn test_select_document_swaps_editor_text() {
        let (mut page, _) = page();
        type_text(&mut page, "first");
        page.handle(Message::FileNew);
        assert_eq!(page.host().text, "");

        page.handle(Message::SelectDocument(0));
        assert_eq!(page.host().text, "first");
        page.handle(Message::SelectDocument(9));
        assert_eq!(page.host().text, "first");
    }

    #[test]
    fn test_bold_and_italic_wrap_selection() {
        let (mut page, _) = page();
        type_text(&mut page, "make this bold");
        page.host_mut().selection = (10, 14);
        page.handle(Message::FormatBold);
        assert_eq!(page.host().text, "make this **bold**");
        assert_eq!(page.host().selection, (10, 18));

        page.host_mut().selection = (0, 4);
        page.handle(Message::FormatItalic);
        assert_eq!(page.host().text, "*make* this **bold**");
    }

    #[test]
    fn test_link_dialog_flow() {
        let (mut page, _) = page();
        type_text(&mut page, "see docs");
        page.host_mut().selection = (4, 8);
        page.handle(Message::InsertLink);
        assert_eq!(page.host().link_dialogs, vec!["docs".to_string()]);

        page.handle(Message::LinkAccepted(LinkRequest {
            display_text: "the docs".to_string(),
            address: "https://docs.rs".to_string(),
        }));
        assert_eq!(page.host().text, "see [the docs](https://docs.rs)");
    }

    #[test]
    fn test_tab_inserts_literal_tab() {
        let (mut page, _) = page();
        type_text(&mut page, "abcdef");
        page.host_mut().selection = (2, 4);
        page.handle(Message::EditorTab);
        assert_eq!(page.host().text, "ab\tcdef");
        assert_eq!(page.host().selection, (3, 3));
    }

    #[test]
    fn test_toolbar_swaps_preview_for_snapshot() {
        let (mut page, _) = page();
        page.host_mut().scheduled.clear();

        page.handle(Message::EditorRightClicked);
        assert!(page.host().toolbar_open);
        assert!(page.host().snapshot_visible);
        assert!(!page.host().live_visible);

        page.handle(Message::CloseToolbar);
        assert!(!page.host().toolbar_open);
        assert!(!page.host().live_visible);

        fire_all_timers(&mut page);
        assert!(page.host().live_visible);
        assert!(!page.host().snapshot_visible);
    }

    #[test]
    fn test_snapshot_follows_edits_while_toolbar_open() {
        let (mut page, _) = page();
        fire_all_timers(&mut page);

        page.handle(Message::EditorRightClicked);
        type_text(&mut page, "# New heading");
        fire_all_timers(&mut page);
        assert!(page.host().snapshot_visible);
        assert!(page.host().snapshot.contains("<h1>New heading</h1>"));
    }

    #[test]
    fn test_editor_click_dismisses_toolbar() {
        let (mut page, _) = page();
        page.host_mut().scheduled.clear();

        // No toolbar: a click schedules nothing.
        page.handle(Message::EditorClicked);
        assert!(page.host().scheduled.is_empty());

        page.handle(Message::EditorRightClicked);
        page.handle(Message::EditorClicked);
        assert!(!page.host().toolbar_open);

        fire_all_timers(&mut page);
        assert!(page.host().live_visible);
        assert!(!page.host().snapshot_visible);
    }

    #[test]
    fn test_bus_events_drive_snapshot() {
        let (mut page, _) = page();
        page.host_mut().scheduled.clear();

        let bus: EventBus<PreviewEvent> = EventBus::new();
        let inbox = Rc::new(RefCell::new(Vec::new()));
        let sink = inbox.clone();
        page.keep_subscription(bus.subscribe(move |e| sink.borrow_mut().push(Message::Preview(*e))));

        bus.publish(&PreviewEvent::Hide);
        bus.publish(&PreviewEvent::Show);
        let pending: Vec<Message> = inbox.borrow_mut().drain(..).collect();
        for msg in pending {
            page.handle(msg);
        }
        assert!(page.host().snapshot_visible);

        fire_all_timers(&mut page);
        assert!(page.host().live_visible);

        drop(page);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_preview_notify_launches_normalized_url() {
        let (mut page, launched) = page();
        page.handle(Message::PreviewNotify("url:example.com".to_string()));
        page.handle(Message::PreviewNotify("URL:https://rust-lang.org/".to_string()));
        page.handle(Message::PreviewNotify("url:not a url".to_string()));
        page.handle(Message::PreviewNotify("scroll:42".to_string()));

        assert_eq!(
            *launched.borrow(),
            vec!["http://example.com/".to_string(), "https://rust-lang.org/".to_string()]
        );
    }

    #[test]
    fn test_launch_failure_is_swallowed() {
        let mut page = MainPage::new(FakeHost::default(), &AppSettings::default(), false, Box::new(FailingLauncher));
        page.handle(Message::PreviewNotify("url:example.com".to_string()));
        assert!(page.host().alerts.is_empty());
    }

    #[test]
    fn test_toggle_distraction_twice_restores_state() {
        let (mut page, _) = page();
        let original = page.visual_state();

        page.handle(Message::ToggleDistraction);
        assert_eq!(page.visual_state(), Some(VisualState::DistractionFree));
        assert!(page.view_model().distraction_free());

        page.handle(Message::ToggleDistraction);
        assert_eq!(page.visual_state(), original);
        assert!(!page.view_model().distraction_free());
    }

    #[test]
    fn test_resize_selects_layout() {
        let (mut page, _) = page();
        page.host_mut().size = (1200, 800);
        page.handle(Message::WindowResized);
        assert_eq!(page.visual_state(), Some(VisualState::FilledOrNarrow));

        page.host_mut().size = (1366, 800);
        page.handle(Message::WindowResized);
        assert_eq!(page.visual_state(), Some(VisualState::FullScreenLandscapeOrWide));

        page.host_mut().size = (400, 800);
        page.handle(Message::WindowResized);
        assert_eq!(page.visual_state(), Some(VisualState::Snapped));

        page.handle(Message::ShowPreviewPane);
        page.handle(Message::WindowResized);
        assert_eq!(page.visual_state(), Some(VisualState::SnappedPreview));

        page.handle(Message::ShowEditorPane);
        assert_eq!(page.visual_state(), Some(VisualState::Snapped));
    }

    #[test]
    fn test_resize_ignored_in_distraction_free() {
        let (mut page, _) = page();
        page.handle(Message::ToggleDistraction);
        page.host_mut().size = (400, 800);
        page.handle(Message::WindowResized);
        assert_eq!(page.visual_state(), Some(VisualState::DistractionFree));
    }
}
