use std::path::{Path, PathBuf};

use crate::app::services::text_ops::extract_filename;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// One Markdown document held by the view-model.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,
    pub file_path: Option<PathBuf>,
    pub display_name: String,
    text: String,
    dirty: bool,
}

impl Document {
    pub fn new_untitled(id: DocumentId, counter: u32) -> Self {
        let display_name = if counter <= 1 {
            "Untitled".to_string()
        } else {
            format!("Untitled {}", counter)
        };

        Self {
            id,
            file_path: None,
            display_name,
            text: String::new(),
            dirty: false,
        }
    }

    pub fn new_from_file(id: DocumentId, path: PathBuf, content: String) -> Self {
        let display_name = extract_filename(&path.to_string_lossy());
        Self {
            id,
            file_path: Some(path),
            display_name,
            text: content,
            dirty: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. Writing back identical text (e.g. the editor echoing
    /// a freshly loaded document) does not mark the document dirty.
    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn set_file_path(&mut self, path: &Path) {
        self.file_path = Some(path.to_path_buf());
        self.display_name = extract_filename(&path.to_string_lossy());
    }

    pub fn matches_path(&self, path: &Path) -> bool {
        self.file_path.as_deref() == Some(path)
    }

    /// Name for file pickers: the display name with a Markdown extension.
    pub fn suggested_file_name(&self) -> String {
        if self.file_path.is_some() {
            self.display_name.clone()
        } else {
            format!("{}.md", self.display_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untitled_names() {
        assert_eq!(Document::new_untitled(DocumentId(1), 1).display_name, "Untitled");
        assert_eq!(Document::new_untitled(DocumentId(2), 3).display_name, "Untitled 3");
    }

    #[test]
    fn test_from_file_is_clean() {
        let doc = Document::new_from_file(
            DocumentId(1),
            PathBuf::from("/notes/todo.md"),
            "# Todo".to_string(),
        );
        assert_eq!(doc.display_name, "todo.md");
        assert_eq!(doc.text(), "# Todo");
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_set_identical_text_stays_clean() {
        let mut doc = Document::new_from_file(DocumentId(1), PathBuf::from("a.md"), "abc".into());
        doc.set_text("abc");
        assert!(!doc.is_dirty());

        doc.set_text("abcd");
        assert!(doc.is_dirty());
        assert_eq!(doc.text(), "abcd");

        doc.mark_clean();
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_set_file_path_updates_name() {
        let mut doc = Document::new_untitled(DocumentId(1), 1);
        assert_eq!(doc.suggested_file_name(), "Untitled.md");

        doc.set_file_path(Path::new("/tmp/readme.md"));
        assert_eq!(doc.display_name, "readme.md");
        assert!(doc.matches_path(Path::new("/tmp/readme.md")));
        assert_eq!(doc.suggested_file_name(), "readme.md");
    }
}
