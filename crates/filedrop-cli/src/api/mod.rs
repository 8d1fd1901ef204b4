//! HTTP client for the remote file store

use async_trait::async_trait;
use filedrop_core::{FilePayload, FileRecord, FilesResponse, RemoteFileStore, Result, TransportError};
use reqwest::multipart;
use reqwest::Client as ReqwestClient;

pub struct Client {
    http: ReqwestClient,
    base_url: String,
}

impl Client {
    pub fn new() -> Self {
        // Try to load server URL from settings, fallback to default
        let base_url = crate::config::SettingsManager::load()
            .ok()
            .map(|s| s.server_url)
            .unwrap_or_else(|| "http://localhost:5000".to_string());

        Self {
            http: ReqwestClient::new(),
            base_url,
        }
    }

    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl RemoteFileStore for Client {
    async fn upload(&self, uploader: &str, file: &FilePayload) -> Result<()> {
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let form = multipart::Form::new()
            .text("uploader", uploader.to_string())
            .part("image", part);

        let response = self
            .http
            .post(self.endpoint("/api/file/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TransportError::Status(response.status().as_u16()));
        }

        Ok(())
    }

    async fn list_files(&self) -> Result<Vec<FileRecord>> {
        let response = self
            .http
            .get(self.endpoint("/api/file/get-files"))
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TransportError::Status(response.status().as_u16()));
        }

        // Decode at the boundary; a shape mismatch is a transport
        // failure like any other.
        let listing: FilesResponse = response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        Ok(listing.files)
    }

    async fn delete_file(&self, id: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.endpoint(&format!("/api/file/delete-file/{}", id)))
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TransportError::Status(response.status().as_u16()));
        }

        Ok(())
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
