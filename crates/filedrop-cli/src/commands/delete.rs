//! Delete command - Remove a stored file by id

use crate::api::Client;
use anyhow::Result;
use filedrop_core::FileManagerController;

pub async fn execute(id: &str) -> Result<()> {
    let controller = FileManagerController::new(Client::new());
    controller.delete(id).await;

    super::print_banner(controller.status().await.as_ref());
    super::print_table(&controller.files().await);

    Ok(())
}
