//! Core type definitions for the filedrop client

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored file as known to the client. Records are snapshots: the
/// client never patches one in place, the whole list is replaced by the
/// next fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: String,
    pub filename: String,
    pub filesize: u64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub uploader: String,
}

/// Wire shape of the list endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct FilesResponse {
    pub files: Vec<FileRecord>,
}

/// A file selected for upload: name, MIME hint and contents.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePayload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FilePayload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// The current user-visible notification. At most one is shown at a
/// time; setting one kind overwrites the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Success(String),
    Error(String),
}

impl Status {
    pub fn text(&self) -> &str {
        match self {
            Status::Success(text) | Status::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error(_))
    }
}
