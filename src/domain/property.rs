// src/domain/property.rs

use serde::{Deserialize, Serialize};

/// A single listing as it appears in the bundled fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    /// Display price, e.g. "₦1,500,000".
    pub price: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub location: String,
    pub title: String,
    /// Open label set: "For Rent", "For Sale", "House", "Duplex", ...
    pub status: Vec<String>,
    #[serde(default)]
    pub image: String,
}

impl Property {
    /// Integer value of the price, built from every digit in the display string.
    /// A price without digits (or one too large for u64) counts as 0.
    pub fn price_value(&self) -> u64 {
        let digits: String = self.price.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse().unwrap_or(0)
    }

    pub fn has_status(&self, label: &str) -> bool {
        self.status.iter().any(|s| s == label)
    }

    /// Price with the currency sign split off, as the card shows it.
    pub fn display_amount(&self) -> &str {
        self.price.trim_start_matches('₦').trim()
    }
}

/// Top-level tab in the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Buy,
    Rent,
    Lease,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Buy, Category::Rent, Category::Lease];

    /// The status label a property must carry to show up under this tab.
    pub fn status_label(self) -> &'static str {
        match self {
            Category::Buy => "For Sale",
            Category::Rent => "For Rent",
            Category::Lease => "For Lease",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Buy => "buy",
            Category::Rent => "rent",
            Category::Lease => "lease",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Buy => "Buy",
            Category::Rent => "Rent",
            Category::Lease => "Lease",
        }
    }

    pub fn parse(raw: &str) -> Option<Category> {
        match raw {
            "buy" => Some(Category::Buy),
            "rent" => Some(Category::Rent),
            "lease" => Some(Category::Lease),
            _ => None,
        }
    }
}

/// Inclusive price interval selected from the price dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    /// `None` for the open-ended "min+" form.
    pub max: Option<u64>,
}

impl PriceRange {
    /// Parses "min-max" or "min+". Anything else yields `None`, which callers
    /// treat as "no price constraint".
    pub fn parse(raw: &str) -> Option<PriceRange> {
        let raw = raw.trim();

        if let Some(min) = raw.strip_suffix('+') {
            let min = min.parse().ok()?;
            return Some(PriceRange { min, max: None });
        }

        let (min, max) = raw.split_once('-')?;
        let min: u64 = min.parse().ok()?;
        let max: u64 = max.parse().ok()?;
        if min > max {
            return None;
        }

        Some(PriceRange {
            min,
            max: Some(max),
        })
    }

    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }

    /// The query-string form, the inverse of `parse`.
    pub fn to_param(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{}", self.min, max),
            None => format!("{}+", self.min),
        }
    }
}
