use crate::app::services::timer::TimerTicket;

use super::keys::PageKey;

/// Display text and address collected by the link dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    pub display_text: String,
    pub address: String,
}

/// Cross-component requests about the live preview, carried on the event bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewEvent {
    /// Something is about to overlap the preview; show the static snapshot.
    Hide,
    /// The overlap is gone; bring the live preview back after the restore delay.
    Show,
}

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks, timers and the event bus send one of these; the dispatch
/// loop in main hands them to the main page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Page lifecycle
    PageLoaded,
    WindowResized,
    FileQuit,

    // Document commands
    FileNew,
    FileOpen,
    FileSave,
    ExportHtml,
    SelectDocument(usize),

    // Editor input
    KeyDown(PageKey),
    KeyUp(PageKey),
    EditorTab,
    EditorRightClicked,
    /// Left click in the editor; dismisses the toolbar if it is open.
    EditorClicked,
    TextChanged,

    // Formatting
    FormatBold,
    FormatItalic,
    InsertLink,
    LinkAccepted(LinkRequest),

    // Toolbar (opened by EditorRightClicked)
    CloseToolbar,

    // Preview surface
    PreviewLoaded,
    PreviewNotify(String),
    Preview(PreviewEvent),

    // Layout
    ShowPreviewPane,
    ShowEditorPane,
    ToggleDistraction,

    TimerElapsed(TimerTicket),
}
