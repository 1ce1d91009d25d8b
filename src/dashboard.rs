use crate::catalog::Catalog;
use crate::models::{Property, User};
use crate::session::{KeyValueStore, Session};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// How many sample listings stand in for "my listings"
const SIMULATED_OWN_LISTINGS: usize = 2;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Please login to view dashboard.")]
    LoginRequired,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub listings: usize,
    pub saved: usize,
}

/// The logged-in user's listings and saved properties
pub struct Dashboard<'a> {
    user: &'a User,
    catalog: &'a Catalog,
    my_listings: Vec<&'a Property>,
}

impl<'a> Dashboard<'a> {
    pub fn open<S: KeyValueStore>(
        session: &'a Session<S>,
        catalog: &'a Catalog,
    ) -> Result<Self, DashboardError> {
        let user = session.user().ok_or(DashboardError::LoginRequired)?;
        Ok(Self {
            user,
            catalog,
            my_listings: catalog.all().iter().take(SIMULATED_OWN_LISTINGS).collect(),
        })
    }

    pub fn user(&self) -> &User {
        self.user
    }

    pub fn my_listings(&self) -> &[&'a Property] {
        &self.my_listings
    }

    /// One of the user's listings, for editing
    pub fn listing(&self, id: &str) -> Option<&'a Property> {
        self.my_listings.iter().copied().find(|p| p.id == id)
    }

    /// Remove a listing from this view. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.my_listings.len();
        self.my_listings.retain(|p| p.id != id);
        let removed = self.my_listings.len() != before;
        if removed {
            info!("Deleted listing {}", id);
        }
        removed
    }

    /// Saved properties in catalog order; ids without a listing are skipped
    pub fn saved(&self) -> Vec<&'a Property> {
        self.catalog
            .all()
            .iter()
            .filter(|p| self.user.has_saved(&p.id))
            .collect()
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            listings: self.my_listings.len(),
            saved: self.saved().len(),
        }
    }
}
