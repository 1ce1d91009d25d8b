pub mod draft;
pub mod error;
pub mod photos;
pub mod traits;
pub mod types;
pub mod wizard;

pub use draft::ListingDraft;
pub use error::{ListingError, UploadWarning};
pub use photos::{BlobUrls, PhotoStager};
pub use traits::PreviewUrls;
pub use types::{CandidateFile, ImageOrigin, StageOutcome, StagedImage};
pub use wizard::{ListingWizard, Mode, Step, Submission};
