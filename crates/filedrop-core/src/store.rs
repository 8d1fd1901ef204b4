//! Remote store port

use crate::error::Result;
use crate::types::{FilePayload, FileRecord};
use async_trait::async_trait;

/// The remote file store as the client sees it: three operations, each
/// a single request/response round trip. Implementations hold no
/// per-call state and never retry; the caller decides what happens
/// after a failure.
#[async_trait]
pub trait RemoteFileStore: Send + Sync {
    /// Send one file with its uploader name. Success means the server
    /// acknowledged the upload.
    async fn upload(&self, uploader: &str, file: &FilePayload) -> Result<()>;

    /// Fetch the server's current file collection, in server order.
    async fn list_files(&self) -> Result<Vec<FileRecord>>;

    /// Remove the record with the given id from the server.
    async fn delete_file(&self, id: &str) -> Result<()>;
}
