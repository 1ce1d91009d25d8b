use crate::models::{Category, PropertyType};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Max rent preselected when the search page opens
pub const DEFAULT_MAX_RENT: u32 = 100_000;

/// Max rent restored by "clear all filters"
pub const CLEARED_MAX_RENT: u32 = 200_000;

/// Search constraints picked on the search page. `None`, an empty city and
/// `false` flags all mean "no constraint".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exact city name
    pub city: String,
    pub category: Option<Category>,
    pub property_type: Option<PropertyType>,
    /// Inclusive rent ceiling
    pub max_rent: Option<u32>,
    pub bhk: Option<u8>,
    /// Only bachelor-friendly listings
    pub bachelor_allowed: bool,
    /// Only listings that allow pets
    pub pets_allowed: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            city: String::new(),
            category: Some(Category::Residential),
            property_type: None,
            max_rent: Some(DEFAULT_MAX_RENT),
            bhk: None,
            bachelor_allowed: false,
            pets_allowed: false,
        }
    }
}

impl FilterCriteria {
    /// Criteria that constrain nothing
    pub fn any() -> Self {
        Self {
            city: String::new(),
            category: None,
            property_type: None,
            max_rent: None,
            bhk: None,
            bachelor_allowed: false,
            pets_allowed: false,
        }
    }

    /// State after "clear all filters"
    pub fn cleared() -> Self {
        Self {
            max_rent: Some(CLEARED_MAX_RENT),
            ..Self::default()
        }
    }

    /// Page defaults with `city` and `category` pre-filled from a search
    /// query such as `city=Pune&category=Commercial`. A full hash route
    /// (`#/search?city=Pune`) is accepted too. An empty or unknown category
    /// keeps the default.
    pub fn from_query(query: &str) -> Self {
        let mut criteria = Self::default();
        let query = match query.split_once('?') {
            Some((_, rest)) => rest,
            None => query,
        };

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "city" => criteria.city = value.trim().to_string(),
                "category" if value.trim().is_empty() => {
                    criteria.category = Some(Category::default())
                }
                "category" => match value.parse() {
                    Ok(category) => criteria.category = Some(category),
                    Err(e) => {
                        warn!("Ignoring search query parameter: {}", e);
                        criteria.category = Some(Category::default());
                    }
                },
                _ => {}
            }
        }

        criteria
    }

    /// Toggle a bhk button: picking the selected count again deselects it.
    pub fn toggle_bhk(&mut self, bhk: u8) {
        self.bhk = if self.bhk == Some(bhk) { None } else { Some(bhk) };
    }
}
