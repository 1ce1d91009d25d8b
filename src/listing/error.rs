use thiserror::Error;

/// Inline warning shown under the photo drop zone. Staging never fails;
/// these values travel next to the staged set.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum UploadWarning {
    #[error("Only JPG, PNG, and WebP files are allowed.")]
    UnsupportedType,

    #[error("Some files were too large (max 5MB).")]
    TooLarge,

    #[error("No valid files selected.")]
    NoValidFiles,

    #[error("Maximum 5 photos allowed. Excess photos were truncated.")]
    Truncated,
}

/// Reasons the wizard refuses to move on or to publish
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("You need to be logged in to list a property.")]
    LoginRequired,

    #[error("{field} is required.")]
    MissingField { field: &'static str },

    #[error("You must agree to the Terms & Conditions.")]
    TermsNotAccepted,

    #[error("Please upload at least 3 images to publish your listing.")]
    TooFewImages { staged: usize },

    #[error("Listing can only be published from the photos step.")]
    NotOnFinalStep,
}
