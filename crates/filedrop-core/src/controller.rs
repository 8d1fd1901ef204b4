//! File manager controller
//!
//! Single owner of the list, form and status state. Frontends feed
//! input edits and trigger actions here; every remote outcome lands in
//! these containers and nowhere else.

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::state::{FileListState, StatusState, UploadFormState};
use crate::store::RemoteFileStore;
use crate::types::{FilePayload, FileRecord, Status};

/// Banner text after a successful upload.
pub const MSG_UPLOAD_OK: &str = "File uploaded successfully to the server!";
/// Banner text after a successful delete.
pub const MSG_DELETE_OK: &str = "File deleted from the server successfully";
/// Banner text for any failed remote call, regardless of cause.
pub const MSG_FAILURE: &str = "Opps! Something went wrong";

/// Orchestrates the three remote operations against the owned state.
///
/// All methods take `&self`: operations triggered independently may
/// overlap, and when their refreshes race the last settling fetch wins
/// because the list is replaced wholesale. There is deliberately no
/// in-flight guard and no cancellation; a failed action is only retried
/// by the user triggering it again.
pub struct FileManagerController<S> {
    store: S,
    files: RwLock<FileListState>,
    form: RwLock<UploadFormState>,
    status: RwLock<StatusState>,
}

impl<S: RemoteFileStore> FileManagerController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            files: RwLock::new(FileListState::default()),
            form: RwLock::new(UploadFormState::default()),
            status: RwLock::new(StatusState::default()),
        }
    }

    /// Startup transition: fetch the initial list.
    pub async fn init(&self) {
        self.refresh().await;
    }

    /// Re-fetch the list to converge on server truth. On failure the
    /// previous snapshot is kept and the banner shows the generic
    /// error.
    pub async fn refresh(&self) {
        match self.store.list_files().await {
            Ok(records) => {
                debug!(count = records.len(), "file list fetched");
                self.files.write().await.replace(records);
            }
            Err(err) => {
                warn!(error = %err, "file list fetch failed");
                self.status.write().await.set_error(MSG_FAILURE);
            }
        }
    }

    /// Form submission. Both fields are required; an incomplete form
    /// never produces a request (the form layer refuses the submit).
    /// Success clears the form, shows the success banner and re-fetches
    /// the list. Failure shows the error banner and leaves the form and
    /// list untouched: no server-side change is assumed.
    pub async fn submit(&self) {
        let (uploader, file) = {
            let form = self.form.read().await;
            match form.selected_file() {
                Some(file) if form.is_submittable() => {
                    (form.uploader_name().to_string(), file.clone())
                }
                _ => return,
            }
        };

        match self.store.upload(&uploader, &file).await {
            Ok(()) => {
                debug!(file = %file.file_name, "upload settled ok");
                self.form.write().await.clear();
                self.status.write().await.set_success(MSG_UPLOAD_OK);
                self.refresh().await;
            }
            Err(err) => {
                warn!(error = %err, "upload failed");
                self.status.write().await.set_error(MSG_FAILURE);
            }
        }
    }

    /// Per-row delete. The banner reflects the outcome, and the list is
    /// re-fetched afterwards in both cases so the view shows best-known
    /// server state.
    pub async fn delete(&self, id: &str) {
        match self.store.delete_file(id).await {
            Ok(()) => {
                debug!(id, "delete settled ok");
                self.status.write().await.set_success(MSG_DELETE_OK);
            }
            Err(err) => {
                warn!(error = %err, id, "delete failed");
                self.status.write().await.set_error(MSG_FAILURE);
            }
        }
        self.refresh().await;
    }

    /// Form edit: uploader name keystroke.
    pub async fn set_uploader_name(&self, name: impl Into<String>) {
        self.form.write().await.set_name(name);
    }

    /// Form edit: file pick.
    pub async fn select_file(&self, file: FilePayload) {
        self.form.write().await.select_file(file);
    }

    /// Snapshot of the current list, in server order.
    pub async fn files(&self) -> Vec<FileRecord> {
        self.files.read().await.records().to_vec()
    }

    /// The current banner, if any.
    pub async fn status(&self) -> Option<Status> {
        self.status.read().await.current().cloned()
    }

    pub async fn uploader_name(&self) -> String {
        self.form.read().await.uploader_name().to_string()
    }

    pub async fn selected_file(&self) -> Option<FilePayload> {
        self.form.read().await.selected_file().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, TransportError};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    /// In-memory store that behaves like the server and records every
    /// call it receives.
    #[derive(Default)]
    struct MockStore {
        calls: Mutex<Vec<&'static str>>,
        stored: Mutex<Vec<FileRecord>>,
        fail_upload: bool,
        fail_list: bool,
        fail_delete: bool,
    }

    impl MockStore {
        fn with_records(records: Vec<FileRecord>) -> Self {
            Self {
                stored: Mutex::new(records),
                ..Self::default()
            }
        }

        fn list_calls(&self) -> usize {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|c| **c == "list")
                .count()
        }
    }

    #[async_trait]
    impl RemoteFileStore for &MockStore {
        async fn upload(&self, uploader: &str, file: &FilePayload) -> Result<()> {
            self.calls.lock().unwrap().push("upload");
            if self.fail_upload {
                return Err(TransportError::Status(500));
            }
            let mut stored = self.stored.lock().unwrap();
            let id = format!("id-{}", stored.len() + 1);
            stored.push(record(&id, &file.file_name, file.len(), uploader));
            Ok(())
        }

        async fn list_files(&self) -> Result<Vec<FileRecord>> {
            self.calls.lock().unwrap().push("list");
            if self.fail_list {
                return Err(TransportError::Status(500));
            }
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn delete_file(&self, id: &str) -> Result<()> {
            self.calls.lock().unwrap().push("delete");
            if self.fail_delete {
                return Err(TransportError::Status(500));
            }
            self.stored.lock().unwrap().retain(|r| r.id != id);
            Ok(())
        }
    }

    fn record(id: &str, filename: &str, filesize: u64, uploader: &str) -> FileRecord {
        FileRecord {
            id: id.into(),
            filename: filename.into(),
            filesize,
            created_at: Utc::now(),
            uploader: uploader.into(),
        }
    }

    fn payload(name: &str, size: usize) -> FilePayload {
        FilePayload::new(name, "image/png", vec![0u8; size])
    }

    #[tokio::test]
    async fn init_replaces_list_with_server_order() {
        let store = MockStore::with_records(vec![
            record("b", "b.png", 2, "B"),
            record("a", "a.png", 1, "A"),
        ]);
        let controller = FileManagerController::new(&store);

        controller.init().await;

        let files = controller.files().await;
        assert_eq!(files.len(), 2);
        // Server order preserved, no reordering.
        assert_eq!(files[0].id, "b");
        assert_eq!(files[1].id, "a");
        assert!(controller.status().await.is_none());
    }

    #[tokio::test]
    async fn init_failure_keeps_list_and_sets_error() {
        let store = MockStore {
            fail_list: true,
            ..MockStore::default()
        };
        let controller = FileManagerController::new(&store);

        controller.init().await;

        assert!(controller.files().await.is_empty());
        let status = controller.status().await.unwrap();
        assert!(status.is_error());
        assert_eq!(status.text(), MSG_FAILURE);
    }

    #[tokio::test]
    async fn successful_submit_clears_form_and_refreshes_once() {
        let store = MockStore::default();
        let controller = FileManagerController::new(&store);
        controller.set_uploader_name("Alice").await;
        controller.select_file(payload("cat.png", 2048)).await;

        controller.submit().await;

        assert_eq!(controller.uploader_name().await, "");
        assert!(controller.selected_file().await.is_none());
        assert_eq!(
            controller.status().await.unwrap(),
            Status::Success(MSG_UPLOAD_OK.into())
        );
        assert_eq!(store.list_calls(), 1);
    }

    #[tokio::test]
    async fn failed_submit_keeps_form_and_skips_refresh() {
        let store = MockStore {
            fail_upload: true,
            ..MockStore::default()
        };
        let controller = FileManagerController::new(&store);
        controller.set_uploader_name("Alice").await;
        controller.select_file(payload("cat.png", 64)).await;

        controller.submit().await;

        assert_eq!(controller.uploader_name().await, "Alice");
        assert!(controller.selected_file().await.is_some());
        assert_eq!(
            controller.status().await.unwrap(),
            Status::Error(MSG_FAILURE.into())
        );
        assert_eq!(store.list_calls(), 0);
    }

    #[tokio::test]
    async fn incomplete_form_never_reaches_the_store() {
        let store = MockStore::default();
        let controller = FileManagerController::new(&store);

        controller.submit().await;
        controller.set_uploader_name("Alice").await;
        controller.submit().await;

        assert!(store.calls.lock().unwrap().is_empty());
        assert!(controller.status().await.is_none());
    }

    #[tokio::test]
    async fn delete_refreshes_on_success() {
        let store = MockStore::with_records(vec![record("a", "a.png", 1, "A")]);
        let controller = FileManagerController::new(&store);

        controller.delete("a").await;

        assert_eq!(
            controller.status().await.unwrap(),
            Status::Success(MSG_DELETE_OK.into())
        );
        assert_eq!(store.list_calls(), 1);
        assert!(controller.files().await.is_empty());
    }

    #[tokio::test]
    async fn delete_refreshes_on_failure_too() {
        let store = MockStore {
            fail_delete: true,
            ..MockStore::default()
        };
        let controller = FileManagerController::new(&store);

        controller.delete("a").await;

        assert_eq!(
            controller.status().await.unwrap(),
            Status::Error(MSG_FAILURE.into())
        );
        assert_eq!(store.list_calls(), 1);
    }

    #[tokio::test]
    async fn concurrent_deletes_each_refresh() {
        // No in-flight guard: independent actions may overlap and each
        // issues its own refresh.
        let store = MockStore::with_records(vec![
            record("a", "a.png", 1, "A"),
            record("b", "b.png", 2, "B"),
        ]);
        let controller = FileManagerController::new(&store);

        futures::join!(controller.delete("a"), controller.delete("b"));

        assert_eq!(store.list_calls(), 2);
        assert!(controller.files().await.is_empty());
    }

    #[tokio::test]
    async fn upload_then_delete_round_trip() {
        let store = MockStore::default();
        let controller = FileManagerController::new(&store);

        controller.init().await;
        assert!(controller.files().await.is_empty());
        assert!(controller.status().await.is_none());

        controller.set_uploader_name("Alice").await;
        controller.select_file(payload("cat.png", 2048)).await;
        controller.submit().await;

        let files = controller.files().await;
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "cat.png");
        assert_eq!(crate::format::human_size(files[0].filesize), "2 KiB");
        assert_eq!(files[0].uploader, "Alice");
        assert_eq!(
            controller.status().await.unwrap(),
            Status::Success(MSG_UPLOAD_OK.into())
        );

        controller.delete(&files[0].id).await;
        assert!(controller.files().await.is_empty());
        assert_eq!(
            controller.status().await.unwrap(),
            Status::Success(MSG_DELETE_OK.into())
        );
    }
}
