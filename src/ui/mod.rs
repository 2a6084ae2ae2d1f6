//! FLTK shell: widgets, dialogs and the host the main page drives.

pub mod buffer;
pub mod dialogs;
pub mod file_dialogs;
pub mod host;
pub mod main_window;
pub mod menu;
pub mod theme;
pub mod toolbar;

pub use host::FltkHost;
