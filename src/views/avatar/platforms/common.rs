// Non-web fallbacks so the crate compiles and unit-tests on native targets.
// The message bridge and download flow only do real work in the browser.

#[cfg(not(feature = "web"))]
use crate::views::avatar::types::DownloadError;

/// No-op stand-in for the window message listener on non-web platforms.
#[cfg(not(feature = "web"))]
pub struct MessageSubscription;

#[cfg(not(feature = "web"))]
impl MessageSubscription {
    pub fn register(_handler: impl FnMut(String) + 'static) -> Option<Self> {
        Some(Self)
    }
}

#[cfg(not(feature = "web"))]
pub fn post_to_frame(_frame_id: &str, _payload: &str) {
    // There is no frame to talk to outside the browser
}

#[cfg(not(feature = "web"))]
pub async fn fetch_bytes(_url: &str) -> Result<Vec<u8>, DownloadError> {
    Err(DownloadError::Fetch(
        "downloads are only available in the browser build".into(),
    ))
}

// Non-web fallback implementation using base64
#[cfg(not(feature = "web"))]
pub fn create_blob_url(data: &[u8], mime_type: &str) -> Result<String, DownloadError> {
    use base64::{engine::general_purpose::STANDARD, Engine};
    let base64_data = STANDARD.encode(data);
    Ok(format!("data:{};base64,{}", mime_type, base64_data))
}

#[cfg(not(feature = "web"))]
pub fn revoke_blob_url(_url: &str) {
    // Data URLs hold no resources to release
}

// No-op for trigger_download on non-web platforms
#[cfg(not(feature = "web"))]
pub fn trigger_download(_url: &str, _filename: &str) {}

#[cfg(not(feature = "web"))]
pub fn notify(message: &str) {
    tracing::warn!("user notice (no browser dialog available): {}", message);
}
