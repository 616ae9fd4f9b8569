use dioxus::prelude::*;

use crate::views::avatar::platforms::{
    create_blob_url, fetch_bytes, notify, revoke_blob_url, trigger_download,
};
use crate::views::avatar::types::{DownloadError, ExportFormat};

/// Fetch the exported asset and hand it to the browser's save-file flow.
///
/// The caller sets `downloading` before invoking this; it is cleared here on
/// every exit path so the trigger control always comes back, success or not.
pub fn execute_download(avatar_url: String, format: ExportFormat, downloading: &Signal<bool>) {
    spawn({
        let mut downloading = downloading.clone();

        async move {
            if let Err(err) = download_and_save(&avatar_url, format).await {
                tracing::error!("avatar download failed: {}", err);
                notify("Error downloading avatar");
            }
            downloading.set(false);
        }
    });
}

// One object URL is created and revoked per invocation. No retries, no
// timeout: a hung fetch keeps the control disabled.
async fn download_and_save(avatar_url: &str, format: ExportFormat) -> Result<(), DownloadError> {
    let asset_url = format.asset_url(avatar_url);
    let bytes = fetch_bytes(&asset_url).await?;

    let blob_url = create_blob_url(&bytes, format.mime_type())?;
    trigger_download(&blob_url, &format.download_filename());
    revoke_blob_url(&blob_url);

    Ok(())
}
