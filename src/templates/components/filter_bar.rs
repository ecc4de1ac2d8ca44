use crate::domain::property::Category;
use crate::domain::view_state::ViewState;
use maud::{html, Markup};

pub const PROPERTY_TYPES: [&str; 5] = ["House", "Flat", "Apartment", "Terrace", "Duplex"];

pub const LOCATIONS: [&str; 3] = ["Lagos", "Abuja", "Ogun"];

/// (query value, label) pairs for the price dropdown.
pub const PRICE_RANGES: [(&str, &str); 4] = [
    ("0-1000000", "₦0 - ₦1,000,000"),
    ("1000000-2000000", "₦1,000,000 - ₦2,000,000"),
    ("2000000-3000000", "₦2,000,000 - ₦3,000,000"),
    ("3000000+", "₦3,000,000+"),
];

/// One sync scope for every control that swaps `#listing-app`: a new request
/// aborts whichever one is still in flight.
pub const LISTING_SYNC: &str = "closest #listing-app:replace";

/// Tabs plus the filter form. Every control swaps `#listing-app` through
/// `/listings`; without JavaScript the form and tab links fall back to `/`.
pub fn filter_bar(state: &ViewState) -> Markup {
    let selection = &state.selection;
    let price = selection.price_range.map(|r| r.to_param()).unwrap_or_default();

    html! {
        div class="filter-bar" {
            nav class="tabs" aria-label="Listing category" {
                @for category in Category::ALL {
                    @let next = state.clone().with_category(Some(category));
                    @let class = if selection.category == Some(category) { "tab tab--active" } else { "tab" };
                    a
                        id=(format!("tab-{}", category.as_str()))
                        class=(class)
                        href=(format!("/?{}", next.to_query()))
                        hx-get=(next.listings_url())
                        hx-target="#listing-app"
                        hx-swap="outerHTML"
                        hx-sync=(LISTING_SYNC)
                        hx-push-url=(format!("/?{}", next.to_query()))
                    {
                        (category.label())
                    }
                }
            }

            form
                id="filter-form"
                class="filters"
                method="get"
                action="/"
                hx-get="/listings"
                hx-trigger="change, submit"
                hx-target="#listing-app"
                hx-swap="outerHTML"
                hx-sync=(LISTING_SYNC)
                hx-indicator="#listing-results"
            {
                input type="hidden" name="tab" value=(selection.category.map_or("", |c| c.as_str()));

                (filter_select("Property Type", "type", "All", &selection.property_type,
                    PROPERTY_TYPES.iter().map(|t| (*t, *t))))
                (filter_select("Location", "location", "Anywhere", &selection.location,
                    LOCATIONS.iter().map(|l| (*l, *l))))
                (filter_select("Price Range", "price", "Any Price", &price,
                    PRICE_RANGES.iter().copied()))

                div class="filters__search" {
                    button type="submit" class="btn btn-primary" { "Search" }
                }
            }
        }
    }
}

fn filter_select<'a>(
    label: &str,
    name: &str,
    any_label: &str,
    current: &str,
    options: impl Iterator<Item = (&'a str, &'a str)>,
) -> Markup {
    html! {
        label class="filter" {
            span class="filter__label" { (label) }
            select name=(name) {
                option value="" selected[current.is_empty()] { (any_label) }
                @for (value, text) in options {
                    option value=(value) selected[current == value] { (text) }
                }
            }
        }
    }
}
