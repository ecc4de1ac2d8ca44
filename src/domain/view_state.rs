// src/domain/view_state.rs

use crate::domain::filter::FilterSelection;
use crate::domain::property::{Category, PriceRange};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Tab shown when the query string does not name one.
pub const DEFAULT_CATEGORY: Category = Category::Rent;

/// Everything the listing page needs to know about the visitor's choices.
/// It lives in the query string, so it round-trips through every link and
/// htmx request instead of being held on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub selection: FilterSelection,
    pub page: usize,
    /// Render skeleton cards and lazy-load the real grid.
    pub loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selection: FilterSelection {
                category: Some(DEFAULT_CATEGORY),
                ..Default::default()
            },
            page: 1,
            loading: false,
        }
    }
}

impl ViewState {
    /// Builds the state from a raw query string.
    /// Missing or unparseable values fall back to defaults; this never fails.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut state = ViewState::default();
        let Some(query) = query else {
            return state;
        };

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                // `tab=` clears the tab, an unknown value is treated the same way.
                "tab" => state.selection.category = Category::parse(&value),
                "type" => state.selection.property_type = value.trim().to_string(),
                "location" => state.selection.location = value.trim().to_string(),
                "price" => state.selection.price_range = PriceRange::parse(&value),
                "page" => state.page = value.parse::<usize>().ok().filter(|p| *p > 0).unwrap_or(1),
                _ => {}
            }
        }

        state
    }

    /// The query-string form of this state. The loading flag is not encoded.
    pub fn to_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        let selection = &self.selection;

        out.append_pair("tab", selection.category.map_or("", |c| c.as_str()));
        if !selection.property_type.is_empty() {
            out.append_pair("type", &selection.property_type);
        }
        if !selection.location.is_empty() {
            out.append_pair("location", &selection.location);
        }
        if let Some(range) = &selection.price_range {
            out.append_pair("price", &range.to_param());
        }
        if self.page > 1 {
            out.append_pair("page", &self.page.to_string());
        }

        out.finish()
    }

    /// URL of the listings partial for this state.
    pub fn listings_url(&self) -> String {
        format!("/listings?{}", self.to_query())
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    // Every filter change lands back on the first page.

    pub fn with_selection(mut self, selection: FilterSelection) -> Self {
        self.selection = selection;
        self.page = 1;
        self
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.selection.category = category;
        self.page = 1;
        self
    }

    pub fn with_property_type(mut self, property_type: impl Into<String>) -> Self {
        self.selection.property_type = property_type.into();
        self.page = 1;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.selection.location = location.into();
        self.page = 1;
        self
    }

    pub fn with_price_range(mut self, price_range: Option<PriceRange>) -> Self {
        self.selection.price_range = price_range;
        self.page = 1;
        self
    }
}
