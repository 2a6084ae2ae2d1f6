use std::fs;
use std::path::{Path, PathBuf};

use crate::app::domain::{Document, DocumentId};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::markdown;

/// Commands the page can ask the view-model to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentCommand {
    New,
    Open,
    Save,
    ExportHtml,
}

/// Open documents, the selection, and the distraction-free flag.
pub struct DocumentViewModel {
    documents: Vec<Document>,
    selected_id: Option<DocumentId>,
    next_id: u64,
    untitled_counter: u32,
    distraction_free: bool,
    dark_preview: bool,
}

impl DocumentViewModel {
    pub fn new(distraction_free: bool, dark_preview: bool) -> Self {
        Self {
            documents: Vec::new(),
            selected_id: None,
            next_id: 1,
            untitled_counter: 0,
            distraction_free,
            dark_preview,
        }
    }

    fn next_document_id(&mut self) -> DocumentId {
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn selected_id(&self) -> Option<DocumentId> {
        self.selected_id
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected_id?;
        self.documents.iter().position(|d| d.id == id)
    }

    pub fn selected_document(&self) -> Option<&Document> {
        let id = self.selected_id?;
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn selected_document_mut(&mut self) -> Option<&mut Document> {
        let id = self.selected_id?;
        self.documents.iter_mut().find(|d| d.id == id)
    }

    /// Select the document at `index` in list order. Returns false if out of range.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.documents.get(index) {
            Some(doc) => {
                self.selected_id = Some(doc.id);
                true
            }
            None => false,
        }
    }

    pub fn distraction_free(&self) -> bool {
        self.distraction_free
    }

    pub fn set_distraction_free(&mut self, value: bool) {
        self.distraction_free = value;
    }

    pub fn can_execute(&self, command: DocumentCommand) -> bool {
        match command {
            DocumentCommand::New | DocumentCommand::Open => true,
            DocumentCommand::Save | DocumentCommand::ExportHtml => self.selected_id.is_some(),
        }
    }

    pub fn new_document(&mut self) -> DocumentId {
        self.untitled_counter += 1;
        let id = self.next_document_id();
        self.documents.push(Document::new_untitled(id, self.untitled_counter));
        self.selected_id = Some(id);
        id
    }

    /// Open `path`, or select it if it is already open.
    pub fn open_path(&mut self, path: &Path) -> Result<DocumentId> {
        if let Some(existing) = self.documents.iter().find(|d| d.matches_path(path)) {
            let id = existing.id;
            self.selected_id = Some(id);
            return Ok(id);
        }

        let content = fs::read_to_string(path)?;
        let id = self.next_document_id();
        self.documents
            .push(Document::new_from_file(id, path.to_path_buf(), content));
        self.selected_id = Some(id);
        Ok(id)
    }

    /// Write the selected document to `path` and adopt it as the document's file.
    pub fn save_selected(&mut self, path: &Path) -> Result<PathBuf> {
        let doc = self.selected_document_mut().ok_or(AppError::NoDocument)?;
        fs::write(path, doc.text())?;
        doc.set_file_path(path);
        doc.mark_clean();
        Ok(path.to_path_buf())
    }

    pub fn export_html(&self, path: &Path) -> Result<()> {
        let html = self.transform(false).ok_or(AppError::NoDocument)?;
        fs::write(path, html)?;
        Ok(())
    }

    /// HTML for the selected document, or `None` when nothing is selected.
    pub fn transform(&self, preview: bool) -> Option<String> {
        let doc = self.selected_document()?;
        Some(markdown::transform(
            &doc.display_name,
            doc.text(),
            preview,
            self.dark_preview,
        ))
    }

    /// Window title for the current selection.
    pub fn title(&self) -> String {
        match self.selected_document() {
            Some(doc) => {
                let prefix = if doc.is_dirty() { "*" } else { "" };
                format!("{}{} - MarkPad", prefix, doc.display_name)
            }
            None => "MarkPad".to_string(),
        }
    }

    pub fn display_names(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.display_name.clone()).collect()
    }
}
