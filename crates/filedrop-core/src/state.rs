//! Owned state containers for the file manager
//!
//! Each container exposes explicit mutation methods and is written only
//! by the controller. There are no ambient globals; a frontend reads
//! these through the controller's accessors.

use crate::types::{FilePayload, FileRecord, Status};

/// The authoritative client-side view of stored files. Always a
/// wholesale snapshot of the last successful fetch, never merged or
/// diffed against a previous one.
#[derive(Debug, Default)]
pub struct FileListState {
    records: Vec<FileRecord>,
}

impl FileListState {
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the snapshot with a freshly fetched one.
    pub fn replace(&mut self, records: Vec<FileRecord>) {
        self.records = records;
    }
}

/// Transient form input: uploader name and the picked file.
#[derive(Debug, Default)]
pub struct UploadFormState {
    uploader_name: String,
    selected_file: Option<FilePayload>,
}

impl UploadFormState {
    pub fn uploader_name(&self) -> &str {
        &self.uploader_name
    }

    pub fn selected_file(&self) -> Option<&FilePayload> {
        self.selected_file.as_ref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.uploader_name = name.into();
    }

    pub fn select_file(&mut self, file: FilePayload) {
        self.selected_file = Some(file);
    }

    /// Both fields are required before a submit may go out.
    pub fn is_submittable(&self) -> bool {
        !self.uploader_name.is_empty() && self.selected_file.is_some()
    }

    /// Reset to empty, as after a successful upload.
    pub fn clear(&mut self) {
        self.uploader_name.clear();
        self.selected_file = None;
    }
}

/// The single persistent notification banner. Holds at most one
/// message; a new outcome overwrites the previous one, nothing resets
/// it otherwise.
#[derive(Debug, Default)]
pub struct StatusState {
    current: Option<Status>,
}

impl StatusState {
    pub fn current(&self) -> Option<&Status> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    pub fn set_success(&mut self, text: impl Into<String>) {
        self.current = Some(Status::Success(text.into()));
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.current = Some(Status::Error(text.into()));
    }
}
