// src/domain/filter.rs

use crate::domain::property::{Category, PriceRange, Property};
use serde::{Deserialize, Serialize};

/// What the user picked in the filter bar.
/// Empty strings and `None` mean "no constraint" for that step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub category: Option<Category>,
    pub property_type: String,
    /// Matched as a case-sensitive substring of `Property::location`.
    pub location: String,
    pub price_range: Option<PriceRange>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.property_type.is_empty()
            && self.location.is_empty()
            && self.price_range.is_none()
    }

    pub fn matches(&self, property: &Property) -> bool {
        if let Some(category) = self.category {
            if !property.has_status(category.status_label()) {
                return false;
            }
        }

        if !self.property_type.is_empty() && !property.has_status(&self.property_type) {
            return false;
        }

        if !self.location.is_empty() && !property.location.contains(self.location.as_str()) {
            return false;
        }

        if let Some(range) = &self.price_range {
            if !range.contains(property.price_value()) {
                return false;
            }
        }

        true
    }
}

/// Narrows the collection down to the properties matching `selection`.
/// Relative order is preserved.
pub fn filter<'a>(properties: &'a [Property], selection: &FilterSelection) -> Vec<&'a Property> {
    if selection.is_empty() {
        return properties.iter().collect();
    }
    properties.iter().filter(|p| selection.matches(p)).collect()
}
