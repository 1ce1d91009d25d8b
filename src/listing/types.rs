use serde::{Deserialize, Serialize};
use std::path::Path;

/// Files larger than this are refused (5 MiB)
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// Upper bound on staged photos
pub const MAX_PHOTOS: usize = 5;

/// Photos required before a listing can be published
pub const MIN_PHOTOS: usize = 3;

pub const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// A file offered through the picker or a drop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    /// MIME type reported by the picker, if any
    pub mime: Option<String>,
    /// Size in bytes
    pub size: u64,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, mime: Option<&str>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.map(str::to_string),
            size,
        }
    }

    /// Describe a file on disk. No MIME sniffing is done; the extension check covers it.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Failed to read metadata for {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            name,
            mime: None,
            size: metadata.len(),
        })
    }

    /// Lower-cased text after the last dot (the whole name when there is none)
    pub fn extension(&self) -> String {
        self.name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Accepted when either the MIME type or the extension is allow-listed
    pub fn has_allowed_type(&self) -> bool {
        let mime_ok = self
            .mime
            .as_deref()
            .is_some_and(|mime| ALLOWED_MIME_TYPES.contains(&mime));
        mime_ok || ALLOWED_EXTENSIONS.contains(&self.extension().as_str())
    }
}

/// Where a staged preview came from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ImageOrigin {
    /// Picked on this device; the URL is a revocable local preview
    Local { file_name: String },
    /// Already published with the listing being edited
    Remote,
}

/// A previewed, not-yet-uploaded image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StagedImage {
    pub url: String,
    pub origin: ImageOrigin,
}

impl StagedImage {
    pub fn is_local(&self) -> bool {
        matches!(self.origin, ImageOrigin::Local { .. })
    }
}

/// Result of offering a batch of files to the stager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    /// Files that ended up staged from this batch
    pub accepted: usize,
    /// Files dropped by validation or truncation
    pub rejected: usize,
    pub warning: Option<super::UploadWarning>,
}
