use thiserror::Error;

// Enum for the export format selection
#[derive(Clone, Copy, PartialEq)]
pub enum ExportFormat {
    Png,
    Glb,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Glb => "glb",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Glb => "model/gltf-binary",
        }
    }

    /// The widget serves a PNG render at `{url}.png`; the bare,
    /// extensionless identifier is the GLB binary itself.
    pub fn asset_url(&self, avatar_url: &str) -> String {
        match self {
            ExportFormat::Png => format!("{}.png", avatar_url),
            ExportFormat::Glb => avatar_url.to_string(),
        }
    }

    pub fn download_filename(&self) -> String {
        format!("my-avatar.{}", self.extension())
    }
}

// What can go wrong between the fetch and the saved file
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("no browser window available")]
    NoWindow,
    #[error("network request failed: {0}")]
    Fetch(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("could not read the response body: {0}")]
    Body(String),
    #[error("could not create a local object url: {0}")]
    ObjectUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_download_url_appends_suffix() {
        assert_eq!(
            ExportFormat::Png.asset_url("https://example.com/abc"),
            "https://example.com/abc.png"
        );
    }

    #[test]
    fn glb_download_url_is_the_bare_identifier() {
        assert_eq!(
            ExportFormat::Glb.asset_url("https://example.com/abc"),
            "https://example.com/abc"
        );
    }

    #[test]
    fn download_filenames_are_fixed() {
        assert_eq!(ExportFormat::Png.download_filename(), "my-avatar.png");
        assert_eq!(ExportFormat::Glb.download_filename(), "my-avatar.glb");
    }

    #[test]
    fn mime_types_match_formats() {
        assert_eq!(ExportFormat::Png.mime_type(), "image/png");
        assert_eq!(ExportFormat::Glb.mime_type(), "model/gltf-binary");
    }
}
