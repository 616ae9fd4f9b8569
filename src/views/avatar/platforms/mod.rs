// Platform-specific implementations
mod common;
#[cfg(feature = "web")]
mod web;

// Export platform-specific functions
#[cfg(not(feature = "web"))]
pub use common::{
    create_blob_url, fetch_bytes, notify, post_to_frame, revoke_blob_url, trigger_download,
    MessageSubscription,
};
#[cfg(feature = "web")]
pub use web::{
    create_blob_url, fetch_bytes, notify, post_to_frame, revoke_blob_url, trigger_download,
    MessageSubscription,
};
