use std::path::PathBuf;

use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

const MARKDOWN_FILTER: &str = "Markdown\t*.{md,markdown,mdown,txt}";
const HTML_FILTER: &str = "HTML\t*.{html,htm}";

fn chosen_path(nfc: &NativeFileChooser) -> Option<PathBuf> {
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

pub fn native_open_dialog() -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_title("Open");
    nfc.set_filter(MARKDOWN_FILTER);
    nfc.show(); // blocks until close
    chosen_path(&nfc)
}

pub fn native_save_dialog(title: &str, suggested_name: &str) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_title(title);
    nfc.set_option(FileDialogOptions::SaveAsConfirm);
    if suggested_name.ends_with(".html") {
        nfc.set_filter(HTML_FILTER);
    } else {
        nfc.set_filter(MARKDOWN_FILTER);
    }
    nfc.set_preset_file(suggested_name);
    nfc.show();
    chosen_path(&nfc)
}
