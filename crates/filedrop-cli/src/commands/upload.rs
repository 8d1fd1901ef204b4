//! Upload command - Send a file to the store

use crate::api::Client;
use anyhow::{Context, Result};
use dialoguer::Input;
use filedrop_core::{FileManagerController, FilePayload};
use std::path::Path;

/// MIME hint from the file extension. The server enforces the real
/// type constraint; this only labels the multipart part.
fn content_type_hint(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

pub async fn execute(path: &Path, uploader: Option<String>) -> Result<()> {
    // The form requires both fields; prompt for the name if it was not
    // given on the command line.
    let uploader = match uploader {
        Some(name) if !name.is_empty() => name,
        _ => Input::<String>::new()
            .with_prompt("Your name")
            .interact_text()
            .context("Failed to read uploader name")?,
    };

    let bytes = std::fs::read(path).with_context(|| format!("Failed to read file {:?}", path))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .context("File path has no usable file name")?
        .to_string();

    let controller = FileManagerController::new(Client::new());
    controller.set_uploader_name(uploader).await;
    controller
        .select_file(FilePayload::new(file_name, content_type_hint(path), bytes))
        .await;

    controller.submit().await;

    super::print_banner(controller.status().await.as_ref());
    super::print_table(&controller.files().await);

    Ok(())
}
