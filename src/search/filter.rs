use crate::models::Property;
use crate::search::types::FilterCriteria;
use serde::Serialize;
use tracing::debug;

impl FilterCriteria {
    /// Whether `property` satisfies every constraint that is set
    pub fn matches(&self, property: &Property) -> bool {
        if !self.city.is_empty() && property.address.city != self.city {
            return false;
        }
        if self.category.is_some_and(|c| property.category != c) {
            return false;
        }
        if self.property_type.is_some_and(|t| property.property_type != t) {
            return false;
        }
        if self.max_rent.is_some_and(|max| property.rent > max) {
            return false;
        }
        if let Some(bhk) = self.bhk.filter(|bhk| *bhk > 0) {
            if property.bhk != Some(bhk) {
                return false;
            }
        }
        if self.bachelor_allowed && !property.bachelor_allowed {
            return false;
        }
        if self.pets_allowed && !property.pets_allowed {
            return false;
        }
        true
    }
}

/// Listings matching `criteria`, in catalog order
pub fn filter<'a>(properties: &'a [Property], criteria: &FilterCriteria) -> Vec<&'a Property> {
    let matched: Vec<&Property> = properties.iter().filter(|p| criteria.matches(p)).collect();
    debug!("Filter kept {} of {} properties", matched.len(), properties.len());
    matched
}

/// Filtered listings together with the page heading
#[derive(Debug, Serialize)]
pub struct SearchResults<'a> {
    pub heading: String,
    pub properties: Vec<&'a Property>,
}

impl<'a> SearchResults<'a> {
    pub fn run(properties: &'a [Property], criteria: &FilterCriteria) -> Self {
        let properties = filter(properties, criteria);
        let place = if criteria.city.is_empty() {
            "India"
        } else {
            criteria.city.as_str()
        };

        Self {
            heading: format!("{} Rentals Found in {}", properties.len(), place),
            properties,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{Category, PropertyType};

    fn ids(found: &[&Property]) -> Vec<String> {
        found.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn unconstrained_criteria_return_whole_catalog_in_order() {
        let catalog = Catalog::sample();
        let found = filter(catalog.all(), &FilterCriteria::any());
        assert_eq!(ids(&found), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn page_defaults_hide_commercial_and_expensive_listings() {
        let catalog = Catalog::sample();
        let found = filter(catalog.all(), &FilterCriteria::default());
        assert_eq!(ids(&found), vec!["1", "2", "4"]);
    }

    #[test]
    fn max_rent_is_inclusive() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria {
            max_rent: Some(22_000),
            ..FilterCriteria::any()
        };
        assert_eq!(ids(&filter(catalog.all(), &criteria)), vec!["1", "4"]);
    }

    #[test]
    fn bhk_constraint_excludes_listings_without_bhk() {
        let catalog = Catalog::sample();
        let mut criteria = FilterCriteria::any();
        criteria.toggle_bhk(3);
        assert_eq!(ids(&filter(catalog.all(), &criteria)), vec!["2"]);

        criteria.toggle_bhk(3);
        assert_eq!(criteria.bhk, None);
    }

    #[test]
    fn zero_bhk_is_no_constraint() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria {
            bhk: Some(0),
            ..FilterCriteria::any()
        };
        assert_eq!(ids(&filter(catalog.all(), &criteria)), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn boolean_preferences_require_the_flag() {
        let catalog = Catalog::sample();
        let pets = FilterCriteria {
            pets_allowed: true,
            ..FilterCriteria::any()
        };
        assert_eq!(ids(&filter(catalog.all(), &pets)), vec!["2"]);

        let bachelors = FilterCriteria {
            bachelor_allowed: true,
            category: Some(Category::Residential),
            ..FilterCriteria::any()
        };
        assert_eq!(ids(&filter(catalog.all(), &bachelors)), vec!["1", "4"]);
    }

    #[test]
    fn no_match_yields_empty_list() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria {
            city: "Mumbai".to_string(),
            property_type: Some(PropertyType::Shop),
            ..FilterCriteria::any()
        };
        assert!(filter(catalog.all(), &criteria).is_empty());
    }

    #[test]
    fn every_result_satisfies_every_criterion() {
        let catalog = Catalog::sample();
        let cities = ["", "Pune", "Mumbai", "Vadodara", "Delhi"];
        let categories = [None, Some(Category::Residential), Some(Category::Commercial)];
        let types = [None, Some(PropertyType::Apartment), Some(PropertyType::Office)];
        let rents = [None, Some(15_000), Some(65_000)];
        let bhks = [None, Some(0), Some(1), Some(2), Some(3)];

        for city in cities {
            for category in categories {
                for property_type in types {
                    for max_rent in rents {
                        for bhk in bhks {
                            for flags in 0..4u8 {
                                let criteria = FilterCriteria {
                                    city: city.to_string(),
                                    category,
                                    property_type,
                                    max_rent,
                                    bhk,
                                    bachelor_allowed: flags & 1 != 0,
                                    pets_allowed: flags & 2 != 0,
                                };
                                let found = filter(catalog.all(), &criteria);
                                for p in &found {
                                    assert!(catalog.all().iter().any(|c| c == *p));
                                    if !city.is_empty() {
                                        assert_eq!(p.address.city, city);
                                    }
                                    if let Some(c) = category {
                                        assert_eq!(p.category, c);
                                    }
                                    if let Some(t) = property_type {
                                        assert_eq!(p.property_type, t);
                                    }
                                    if let Some(max) = max_rent {
                                        assert!(p.rent <= max);
                                    }
                                    if let Some(bhk) = bhk.filter(|bhk| *bhk > 0) {
                                        assert_eq!(p.bhk, Some(bhk));
                                    }
                                    if criteria.bachelor_allowed {
                                        assert!(p.bachelor_allowed);
                                    }
                                    if criteria.pets_allowed {
                                        assert!(p.pets_allowed);
                                    }
                                }
                                let expected = catalog.all().iter().filter(|p| criteria.matches(p)).count();
                                assert_eq!(found.len(), expected);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn heading_names_the_city_or_country() {
        let catalog = Catalog::sample();
        let results = SearchResults::run(catalog.all(), &FilterCriteria::default());
        assert_eq!(results.heading, "3 Rentals Found in India");

        let criteria = FilterCriteria {
            city: "Pune".to_string(),
            ..FilterCriteria::default()
        };
        let results = SearchResults::run(catalog.all(), &criteria);
        assert_eq!(results.heading, "1 Rentals Found in Pune");
    }

    #[test]
    fn query_prefills_city_and_category() {
        let criteria = FilterCriteria::from_query("#/search?city=Navi%20Mumbai&category=Commercial");
        assert_eq!(criteria.city, "Navi Mumbai");
        assert_eq!(criteria.category, Some(Category::Commercial));
        assert_eq!(criteria.max_rent, Some(100_000));

        let criteria = FilterCriteria::from_query("city=&category=");
        assert_eq!(criteria.city, "");
        assert_eq!(criteria.category, Some(Category::Residential));
        assert_eq!(ids(&filter(Catalog::sample().all(), &criteria)), vec!["1", "2", "4"]);

        let criteria = FilterCriteria::from_query("category=Commercial&category=Castle");
        assert_eq!(criteria.category, Some(Category::Residential));
    }

    #[test]
    fn clearing_filters_widens_the_rent_range() {
        let cleared = FilterCriteria::cleared();
        assert_eq!(cleared.max_rent, Some(200_000));
        assert_eq!(cleared.category, Some(Category::Residential));
        assert!(cleared.city.is_empty());
    }
}
