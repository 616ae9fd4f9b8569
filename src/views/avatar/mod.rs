// The avatar view: creator frame, message bridge, preview and download.
mod bridge;
mod handlers;
mod platforms;
mod types;
mod ui;

// Re-export the main component
pub use ui::AvatarCreator;
// Re-export types for external use
pub use types::ExportFormat;
