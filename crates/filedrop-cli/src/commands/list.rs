//! List command - Show stored files

use crate::api::Client;
use anyhow::Result;
use filedrop_core::FileManagerController;

pub async fn execute() -> Result<()> {
    let controller = FileManagerController::new(Client::new());
    controller.init().await;

    super::print_banner(controller.status().await.as_ref());
    super::print_table(&controller.files().await);

    Ok(())
}
