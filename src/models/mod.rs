use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of building being rented out
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum PropertyType {
    #[default]
    Apartment,
    Villa,
    Duplex,
    Tenement,
    Shop,
    Office,
    Showroom,
    Other,
}

impl PropertyType {
    pub const ALL: [PropertyType; 8] = [
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::Duplex,
        PropertyType::Tenement,
        PropertyType::Shop,
        PropertyType::Office,
        PropertyType::Showroom,
        PropertyType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::Duplex => "Duplex",
            PropertyType::Tenement => "Tenement",
            PropertyType::Shop => "Shop",
            PropertyType::Office => "Office",
            PropertyType::Showroom => "Showroom",
            PropertyType::Other => "Other",
        }
    }
}

/// Residential or commercial use
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Residential,
    Commercial,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Residential, Category::Commercial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Residential => "Residential",
            Category::Commercial => "Commercial",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Furnishing {
    Furnished,
    #[serde(rename = "Semi-Furnished")]
    SemiFurnished,
    Unfurnished,
}

impl Furnishing {
    pub const ALL: [Furnishing; 3] = [
        Furnishing::Furnished,
        Furnishing::SemiFurnished,
        Furnishing::Unfurnished,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Furnishing::Furnished => "Furnished",
            Furnishing::SemiFurnished => "Semi-Furnished",
            Furnishing::Unfurnished => "Unfurnished",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ListingStatus {
    Active,
    Rented,
    Archived,
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 3] = [
        ListingStatus::Active,
        ListingStatus::Rented,
        ListingStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "Active",
            ListingStatus::Rented => "Rented",
            ListingStatus::Archived => "Archived",
        }
    }
}

/// Who published the listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ListedBy {
    #[default]
    Owner,
    Broker,
}

impl ListedBy {
    pub const ALL: [ListedBy; 2] = [ListedBy::Owner, ListedBy::Broker];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListedBy::Owner => "Owner",
            ListedBy::Broker => "Broker",
        }
    }
}

/// Returned when a string names no variant of a model enum
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Case-insensitive lookup of `value` among the display names of `variants`.
fn parse_variant<T: Copy>(
    kind: &'static str,
    value: &str,
    variants: &[T],
    name: fn(&T) -> &'static str,
) -> Result<T, ParseEnumError> {
    let wanted = value.trim();
    variants
        .iter()
        .find(|variant| name(variant).eq_ignore_ascii_case(wanted))
        .copied()
        .ok_or_else(|| ParseEnumError {
            kind,
            value: value.to_string(),
            expected: variants.iter().map(name).collect::<Vec<_>>().join(", "),
        })
}

macro_rules! display_and_parse {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_variant($kind, s, &<$ty>::ALL, <$ty>::as_str)
            }
        }
    };
}

display_and_parse!(PropertyType, "property type");
display_and_parse!(Category, "category");
display_and_parse!(Furnishing, "furnishing");
display_and_parse!(ListingStatus, "listing status");
display_and_parse!(ListedBy, "lister");

/// Postal address of a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub city: String,
    pub locality: String,
    pub state: String,
    pub pin: String,
}

impl Address {
    /// Single-line form used by the listing form: "locality, city, state, pin"
    pub fn one_line(&self) -> String {
        format!("{}, {}, {}, {}", self.locality, self.city, self.state, self.pin)
    }
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bhk: Option<u8>,
    pub area_sq_ft: u32,
    pub rent: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<u32>,
    pub deposit: u32,
    pub furnishing: Furnishing,
    pub available_date: NaiveDate,
    pub pets_allowed: bool,
    pub bachelor_allowed: bool,
    pub address: Address,
    pub images: Vec<String>,
    pub description: String,
    pub amenities: Vec<String>,
    pub owner_name: String,
    pub owner_phone: String,
    pub status: ListingStatus,
    pub posted_date: NaiveDate,
    pub verified: bool,
    pub listed_by: ListedBy,
}

/// Logged-in user as persisted in the session slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub saved_property_ids: Vec<String>,
}

impl User {
    pub fn has_saved(&self, property_id: &str) -> bool {
        self.saved_property_ids.iter().any(|id| id == property_id)
    }
}
