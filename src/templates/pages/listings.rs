use crate::domain::pagination::Paginated;
use crate::domain::property::Property;
use crate::domain::view_state::ViewState;
use crate::templates::components::filter_bar::LISTING_SYNC;
use crate::templates::components::{filter_bar, pagination, property_card, property_skeleton};
use maud::{html, Markup};

pub struct ListingsVm<'a> {
    pub state: ViewState,
    pub results: Paginated<&'a Property>,
    pub page_size: usize,
}

impl<'a> ListingsVm<'a> {
    /// Placeholder view: skeleton cards that fetch the real grid on load.
    pub fn loading(state: ViewState, page_size: usize) -> Self {
        Self {
            state: state.with_loading(true),
            results: Paginated::new(&[], page_size, 1),
            page_size,
        }
    }
}

/// Filter bar + results grid + pagination. This is the unit htmx swaps.
pub fn listing_app(vm: &ListingsVm) -> Markup {
    let show_pagination = !vm.state.loading && vm.results.total_items > vm.page_size;

    html! {
        div id="listing-app" class="container listing-app" {
            (filter_bar(&vm.state))

            div id="listing-results" class="listing-results" {
                @if vm.state.loading {
                    div
                        id="listing-skeletons"
                        class="property-grid"
                        hx-get=(vm.state.listings_url())
                        hx-trigger="load"
                        hx-target="#listing-app"
                        hx-swap="outerHTML"
                        hx-sync=(LISTING_SYNC)
                    {
                        @for _ in 0..vm.page_size {
                            (property_skeleton())
                        }
                    }
                } @else if vm.results.items.is_empty() {
                    div class="no-results" {
                        h3 { "No properties found" }
                        p { "Try adjusting your filters to find more properties." }
                    }
                } @else {
                    p class="muted small result-count" {
                        (vm.results.total_items)
                        @if vm.results.total_items == 1 { " property" } @else { " properties" }
                    }
                    div class="property-grid" {
                        @for property in &vm.results.items {
                            (property_card(property))
                        }
                    }
                }
            }

            @if show_pagination {
                (pagination(&vm.state, &vm.results))
            }
        }
    }
}
