use crate::listing::types::CandidateFile;

/// Source of local preview URLs for picked files.
/// Every URL handed out by `create` must eventually be passed to `revoke`.
pub trait PreviewUrls {
    /// Mint a preview URL for a file that was accepted for staging
    fn create(&self, file: &CandidateFile) -> String;

    /// Release a URL previously returned by `create`
    fn revoke(&self, url: &str);
}
