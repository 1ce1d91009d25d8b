use crate::listing::error::ListingError;
use crate::listing::wizard::Step;
use crate::models::{Category, ListedBy, Property, PropertyType, User};
use serde::{Deserialize, Serialize};

/// Form data collected across the wizard steps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingDraft {
    pub title: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub city: String,
    pub rent: Option<u32>,
    pub maintenance: Option<u32>,
    pub bhk: Option<u8>,
    /// Built-up area in square feet
    pub area: Option<u32>,
    /// Free-form full address
    pub address: String,
    pub description: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub bachelor_allowed: bool,
    pub pets_allowed: bool,
    pub listed_by: ListedBy,
    pub terms_accepted: bool,
}

fn non_zero(value: u32) -> Option<u32> {
    (value > 0).then_some(value)
}

impl ListingDraft {
    /// Empty form with the contact fields taken from the logged-in user
    pub fn for_user(user: &User) -> Self {
        Self {
            owner_name: user.name.clone(),
            owner_phone: user.phone.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Form pre-filled from a published listing
    pub fn from_property(property: &Property) -> Self {
        Self {
            title: property.title.clone(),
            category: property.category,
            property_type: property.property_type,
            city: property.address.city.clone(),
            rent: non_zero(property.rent),
            maintenance: property.maintenance.and_then(non_zero),
            bhk: property.bhk.filter(|bhk| *bhk > 0),
            area: non_zero(property.area_sq_ft),
            address: property.address.one_line(),
            description: property.description.clone(),
            owner_name: property.owner_name.clone(),
            owner_phone: property.owner_phone.clone(),
            bachelor_allowed: property.bachelor_allowed,
            pets_allowed: property.pets_allowed,
            listed_by: property.listed_by,
            terms_accepted: false,
        }
    }

    /// Required fields of `step`, checked in form order
    pub fn check(&self, step: Step) -> Result<(), ListingError> {
        let missing = |field| Err(ListingError::MissingField { field });

        match step {
            Step::Basics => {
                if self.category == Category::Residential && self.bhk.is_none() {
                    return missing("BHK");
                }
                if self.area.is_none() {
                    return missing("Built-up area");
                }
            }
            Step::Details => {
                if self.title.trim().is_empty() {
                    return missing("Property title");
                }
                if self.rent.is_none() {
                    return missing("Monthly rent");
                }
            }
            Step::Photos => {
                if self.owner_name.trim().is_empty() {
                    return missing("Your name");
                }
                if self.owner_phone.trim().is_empty() {
                    return missing("Mobile number");
                }
                if !self.terms_accepted {
                    return Err(ListingError::TermsNotAccepted);
                }
            }
        }
        Ok(())
    }
}
