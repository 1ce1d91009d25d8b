use crate::models::{Property, User};
use crate::session::{KeyValueStore, Session};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Contact details a renter leaves on a listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InterestForm {
    pub name: String,
    pub phone: String,
}

impl InterestForm {
    /// Form pre-filled from the logged-in user, if any
    pub fn for_user(user: Option<&User>) -> Self {
        match user {
            Some(user) => Self {
                name: user.name.clone(),
                phone: user.phone.clone().unwrap_or_default(),
            },
            None => Self::default(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InterestError {
    #[error("Please login to show interest in this property.")]
    LoginRequired,

    #[error("Please enter your name and mobile number.")]
    MissingContact,
}

/// Owner contact revealed once interest went through
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InterestReceipt {
    pub property_id: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub message: String,
}

/// Register interest in `property`. Logged-out sessions get the login
/// prompt instead.
pub async fn submit_interest<S: KeyValueStore>(
    session: &mut Session<S>,
    property: &Property,
    form: &InterestForm,
    delay: Duration,
) -> Result<InterestReceipt, InterestError> {
    if !session.is_authenticated() {
        session.open_login_prompt();
        return Err(InterestError::LoginRequired);
    }
    if form.name.trim().is_empty() || form.phone.trim().is_empty() {
        return Err(InterestError::MissingContact);
    }

    debug!("Sending interest in {} from {}", property.id, form.name);
    tokio::time::sleep(delay).await;
    info!("Interest in {} shared with {}", property.id, property.owner_name);

    Ok(InterestReceipt {
        property_id: property.id.clone(),
        owner_name: property.owner_name.clone(),
        owner_phone: property.owner_phone.clone(),
        message: format!("We've shared your interest with {}.", property.owner_name),
    })
}
