use crate::domain::property::Property;
use crate::errors::ServerError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The full listing collection, loaded once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    properties: Vec<Property>,
}

impl ListingStore {
    pub fn from_properties(properties: Vec<Property>) -> Self {
        warn_on_duplicate_ids(&properties);
        Self { properties }
    }

    /// Parse a JSON array of listings.
    pub fn from_json(json: &str) -> Result<Self, ServerError> {
        let properties: Vec<Property> = serde_json::from_str(json)
            .map_err(|e| ServerError::DataError(format!("Invalid listings JSON: {e}")))?;
        Ok(Self::from_properties(properties))
    }

    /// Read and parse the fixture file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            ServerError::DataError(format!("Failed to read {}: {e}", path.display()))
        })?;

        let store = Self::from_json(&json)?;
        log::info!("Loaded {} listings from {}", store.len(), path.display());
        Ok(store)
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
}

// Ids are expected to be unique but nothing depends on it, so this only logs.
fn warn_on_duplicate_ids(properties: &[Property]) {
    let mut seen = HashSet::new();
    for p in properties {
        if !seen.insert(p.id) {
            log::warn!("Duplicate listing id {} ({})", p.id, p.title);
        }
    }
}
