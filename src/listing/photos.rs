use crate::listing::error::UploadWarning;
use crate::listing::traits::PreviewUrls;
use crate::listing::types::{
    CandidateFile, ImageOrigin, StageOutcome, StagedImage, MAX_FILE_BYTES, MAX_PHOTOS,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

/// In-process stand-in for browser object URLs.
///
/// Clones share the same registry, so a caller can keep a handle and check
/// which previews are still alive after the stager has been dropped.
#[derive(Debug, Clone, Default)]
pub struct BlobUrls {
    live: Arc<Mutex<HashSet<String>>>,
}

impl BlobUrls {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> MutexGuard<'_, HashSet<String>> {
        self.live.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of URLs created and not yet revoked
    pub fn live_count(&self) -> usize {
        self.registry().len()
    }

    pub fn is_live(&self, url: &str) -> bool {
        self.registry().contains(url)
    }
}

impl PreviewUrls for BlobUrls {
    fn create(&self, file: &CandidateFile) -> String {
        let url = format!("blob:makan/{}", nanoid::nanoid!());
        debug!("Created preview {} for {}", url, file.name);
        self.registry().insert(url.clone());
        url
    }

    fn revoke(&self, url: &str) {
        if !self.registry().remove(url) {
            warn!("Revoking unknown preview {}", url);
        }
    }
}

/// Staged photos of a listing plus the warning line shown under them
pub struct PhotoStager<P: PreviewUrls> {
    urls: P,
    images: Vec<StagedImage>,
    warning: Option<UploadWarning>,
}

impl<P: PreviewUrls> PhotoStager<P> {
    pub fn new(urls: P) -> Self {
        Self {
            urls,
            images: Vec::new(),
            warning: None,
        }
    }

    /// Stager pre-populated with the already published images of a listing
    pub fn with_existing(urls: P, existing: &[String]) -> Self {
        let mut stager = Self::new(urls);
        stager.images = existing
            .iter()
            .map(|url| StagedImage {
                url: url.clone(),
                origin: ImageOrigin::Remote,
            })
            .collect();
        stager
    }

    pub fn images(&self) -> &[StagedImage] {
        &self.images
    }

    pub fn urls(&self) -> Vec<String> {
        self.images.iter().map(|image| image.url.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn warning(&self) -> Option<UploadWarning> {
        self.warning
    }

    /// Validate a picked or dropped batch and stage what passes.
    pub fn stage(&mut self, files: &[CandidateFile]) -> StageOutcome {
        if files.is_empty() {
            return StageOutcome {
                accepted: 0,
                rejected: 0,
                warning: self.warning,
            };
        }

        let mut valid = Vec::new();
        let mut last_warning = None;

        for file in files {
            if !file.has_allowed_type() {
                debug!("Rejected {}: unsupported type", file.name);
                last_warning = Some(UploadWarning::UnsupportedType);
                continue;
            }
            if file.size > MAX_FILE_BYTES {
                debug!("Rejected {}: {} bytes", file.name, file.size);
                last_warning = Some(UploadWarning::TooLarge);
                continue;
            }
            valid.push(file);
        }

        let invalid = files.len() - valid.len();

        if valid.is_empty() {
            self.warning = Some(last_warning.unwrap_or(UploadWarning::NoValidFiles));
            return StageOutcome {
                accepted: 0,
                rejected: invalid,
                warning: self.warning,
            };
        }

        let room = MAX_PHOTOS.saturating_sub(self.images.len());
        let truncated = valid.len().saturating_sub(room);

        for file in valid.into_iter().take(room) {
            let url = self.urls.create(file);
            self.images.push(StagedImage {
                url,
                origin: ImageOrigin::Local {
                    file_name: file.name.clone(),
                },
            });
        }

        self.warning = if truncated > 0 {
            warn!("Truncated {} photos over the limit of {}", truncated, MAX_PHOTOS);
            Some(UploadWarning::Truncated)
        } else {
            last_warning
        };

        StageOutcome {
            accepted: files.len() - invalid - truncated,
            rejected: invalid + truncated,
            warning: self.warning,
        }
    }

    /// Drop the image at `index`, releasing its preview. Clears the warning.
    pub fn remove(&mut self, index: usize) -> Option<StagedImage> {
        if index >= self.images.len() {
            return None;
        }
        let image = self.images.remove(index);
        if image.is_local() {
            self.urls.revoke(&image.url);
        }
        self.warning = None;
        Some(image)
    }
}

impl<P: PreviewUrls> Drop for PhotoStager<P> {
    fn drop(&mut self) {
        for image in self.images.iter().filter(|image| image.is_local()) {
            self.urls.revoke(&image.url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpg(name: &str) -> CandidateFile {
        CandidateFile::new(name, Some("image/jpeg"), 200 * 1024)
    }

    #[test]
    fn sixth_valid_image_is_truncated_with_warning() {
        let urls = BlobUrls::new();
        let mut stager = PhotoStager::new(urls.clone());

        let first: Vec<_> = (1..=4).map(|i| jpg(&format!("room{}.jpg", i))).collect();
        let outcome = stager.stage(&first);
        assert_eq!(outcome.accepted, 4);
        assert_eq!(outcome.warning, None);

        let outcome = stager.stage(&[jpg("kitchen.jpg"), jpg("balcony.jpg")]);
        assert_eq!(outcome.accepted, 1);
        assert_eq!(outcome.rejected, 1);
        assert_eq!(outcome.warning, Some(UploadWarning::Truncated));
        assert_eq!(stager.len(), 5);
        assert_eq!(urls.live_count(), 5);
        assert_eq!(
            stager.warning().unwrap().to_string(),
            "Maximum 5 photos allowed. Excess photos were truncated."
        );
    }

    #[test]
    fn oversized_file_is_rejected_and_not_staged() {
        let mut stager = PhotoStager::new(BlobUrls::new());
        let big = CandidateFile::new("hall.png", Some("image/png"), MAX_FILE_BYTES + 1);
        let edge = CandidateFile::new("edge.png", Some("image/png"), MAX_FILE_BYTES);

        let outcome = stager.stage(&[big, edge]);
        assert_eq!(outcome.accepted, 1);
        assert_eq!(outcome.warning, Some(UploadWarning::TooLarge));
        assert_eq!(stager.len(), 1);
        assert!(matches!(
            &stager.images()[0].origin,
            ImageOrigin::Local { file_name } if file_name == "edge.png"
        ));
    }

    #[test]
    fn type_is_accepted_by_mime_or_extension() {
        let by_extension = CandidateFile::new("IMG_0001.JPEG", None, 10);
        let by_mime = CandidateFile::new("upload", Some("image/webp"), 10);
        let neither = CandidateFile::new("plan.pdf", Some("application/pdf"), 10);
        assert!(by_extension.has_allowed_type());
        assert!(by_mime.has_allowed_type());
        assert!(!neither.has_allowed_type());
    }

    #[test]
    fn batch_without_valid_files_stages_nothing() {
        let urls = BlobUrls::new();
        let mut stager = PhotoStager::new(urls.clone());
        let outcome = stager.stage(&[CandidateFile::new("notes.txt", Some("text/plain"), 10)]);

        assert_eq!(outcome.accepted, 0);
        assert_eq!(outcome.warning, Some(UploadWarning::UnsupportedType));
        assert!(stager.is_empty());
        assert_eq!(urls.live_count(), 0);
    }

    #[test]
    fn clean_batch_clears_previous_warning() {
        let mut stager = PhotoStager::new(BlobUrls::new());
        stager.stage(&[CandidateFile::new("notes.txt", None, 10)]);
        assert!(stager.warning().is_some());

        stager.stage(&[jpg("a.jpg")]);
        assert_eq!(stager.warning(), None);
    }

    #[test]
    fn removal_and_drop_release_local_previews_only() {
        let urls = BlobUrls::new();
        let existing = vec!["https://picsum.photos/800/600?random=1".to_string()];
        let mut stager = PhotoStager::with_existing(urls.clone(), &existing);
        stager.stage(&[jpg("a.jpg"), jpg("b.jpg")]);
        assert_eq!(urls.live_count(), 2);

        let removed = stager.remove(1).unwrap();
        assert!(!urls.is_live(&removed.url));
        assert_eq!(urls.live_count(), 1);

        let remote = stager.remove(0).unwrap();
        assert_eq!(remote.origin, ImageOrigin::Remote);
        assert!(stager.remove(7).is_none());

        drop(stager);
        assert_eq!(urls.live_count(), 0);
    }
}
