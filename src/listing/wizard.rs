use crate::listing::draft::ListingDraft;
use crate::listing::error::ListingError;
use crate::listing::photos::PhotoStager;
use crate::listing::traits::PreviewUrls;
use crate::listing::types::MIN_PHOTOS;
use crate::models::Property;
use crate::session::{KeyValueStore, Session};
use serde::Serialize;
use tracing::{debug, info};

/// Route the wizard hands control to after publishing
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Wizard pages, in order
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Basics,
    Details,
    Photos,
}

impl Step {
    /// 1-based position shown in the progress bar
    pub fn number(&self) -> u8 {
        match self {
            Step::Basics => 1,
            Step::Details => 2,
            Step::Photos => 3,
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::Basics => Some(Step::Details),
            Step::Details => Some(Step::Photos),
            Step::Photos => None,
        }
    }

    fn previous(self) -> Option<Step> {
        match self {
            Step::Basics => None,
            Step::Details => Some(Step::Basics),
            Step::Photos => Some(Step::Details),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit { property_id: String },
}

/// What a successful publish produced. Nothing is written to the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub mode: Mode,
    pub message: &'static str,
    pub redirect: &'static str,
    pub draft: ListingDraft,
    pub images: Vec<String>,
}

/// Three-step listing form: Basics, then Details & Pricing, then Photos & Contact
pub struct ListingWizard<P: PreviewUrls> {
    step: Step,
    mode: Mode,
    draft: ListingDraft,
    photos: PhotoStager<P>,
}

impl<P: PreviewUrls> ListingWizard<P> {
    /// Blank listing for the logged-in user
    pub fn start<S: KeyValueStore>(session: &Session<S>, urls: P) -> Result<Self, ListingError> {
        let user = session.user().ok_or(ListingError::LoginRequired)?;
        debug!("Starting new listing for {}", user.id);

        Ok(Self {
            step: Step::Basics,
            mode: Mode::Create,
            draft: ListingDraft::for_user(user),
            photos: PhotoStager::new(urls),
        })
    }

    /// Edit an existing listing; its published images are staged as-is
    pub fn edit<S: KeyValueStore>(
        session: &Session<S>,
        property: &Property,
        urls: P,
    ) -> Result<Self, ListingError> {
        if !session.is_authenticated() {
            return Err(ListingError::LoginRequired);
        }
        debug!("Editing listing {}", property.id);

        Ok(Self {
            step: Step::Basics,
            mode: Mode::Edit {
                property_id: property.id.clone(),
            },
            draft: ListingDraft::from_property(property),
            photos: PhotoStager::with_existing(urls, &property.images),
        })
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ListingDraft {
        &mut self.draft
    }

    pub fn photos(&self) -> &PhotoStager<P> {
        &self.photos
    }

    pub fn photos_mut(&mut self) -> &mut PhotoStager<P> {
        &mut self.photos
    }

    /// Validate the current page and move forward. On the last page this
    /// only validates.
    pub fn next(&mut self) -> Result<Step, ListingError> {
        self.draft.check(self.step)?;
        if let Some(step) = self.step.next() {
            debug!("Listing wizard {:?} -> {:?}", self.step, step);
            self.step = step;
        }
        Ok(self.step)
    }

    /// Go one page back; stays put on the first page
    pub fn back(&mut self) -> Step {
        if let Some(step) = self.step.previous() {
            self.step = step;
        }
        self.step
    }

    /// Publish the listing (simulated).
    pub fn submit(&self) -> Result<Submission, ListingError> {
        if self.step != Step::Photos {
            return Err(ListingError::NotOnFinalStep);
        }
        self.draft.check(Step::Photos)?;
        if self.photos.len() < MIN_PHOTOS {
            return Err(ListingError::TooFewImages {
                staged: self.photos.len(),
            });
        }

        let message = match self.mode {
            Mode::Create => "Property listed successfully! Redirecting to dashboard...",
            Mode::Edit { .. } => "Property updated successfully! Redirecting to dashboard...",
        };
        info!("{}", message);

        Ok(Submission {
            mode: self.mode.clone(),
            message,
            redirect: DASHBOARD_ROUTE,
            draft: self.draft.clone(),
            images: self.photos.urls(),
        })
    }
}
