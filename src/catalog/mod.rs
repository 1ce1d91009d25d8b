pub mod sample;

pub use sample::CITIES;

use crate::models::Property;
use thiserror::Error;
use tracing::debug;

/// Route every "not found" page links back to.
pub const HOME_ROUTE: &str = "/";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No listing carries the requested id
    #[error("Property not found.")]
    NotFound { id: String },
}

impl CatalogError {
    /// Route offered next to the error message.
    pub fn link(&self) -> &'static str {
        HOME_ROUTE
    }
}

/// The fixed, in-memory set of listings
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// Catalog preloaded with the sample listings
    pub fn sample() -> Self {
        Self::new(sample::sample_properties())
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Lookup backing the property details page.
    pub fn details(&self, id: &str) -> Result<&Property, CatalogError> {
        debug!("Looking up property {}", id);
        self.find(id).ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }
}

/// Cities whose name contains `query`, ignoring case, in alphabetical order.
pub fn suggest_cities(query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    CITIES
        .iter()
        .copied()
        .filter(|city| city.to_lowercase().contains(&needle))
        .collect()
}
