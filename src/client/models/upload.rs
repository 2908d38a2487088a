//! File upload payload

use std::path::Path;

use super::{invalid, require_text};
use crate::error::Result;

/// An image sent as multipart field `file`
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl FileUpload {
    /// Read a file from disk, guessing the MIME type from its extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime = mime_for(&file_name).to_string();

        Ok(Self {
            file_name,
            bytes,
            mime,
        })
    }

    pub fn validate(&self) -> Result<()> {
        require_text("file name", &self.file_name)?;
        if self.bytes.is_empty() {
            return invalid("file is empty");
        }
        Ok(())
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mime_guess() {
        assert_eq!(mime_for("a.JPG"), "image/jpeg");
        assert_eq!(mime_for("a.png"), "image/png");
        assert_eq!(mime_for("noext"), "application/octet-stream");
    }

    #[test]
    fn test_from_path_and_validate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lamp.png");
        std::fs::write(&path, b"\x89PNG").unwrap();

        let upload = FileUpload::from_path(&path).unwrap();
        assert_eq!(upload.file_name, "lamp.png");
        assert_eq!(upload.mime, "image/png");
        assert!(upload.validate().is_ok());

        let empty = FileUpload {
            bytes: vec![],
            ..upload
        };
        assert!(empty.validate().is_err());
    }
}
