use crate::domain::pagination::Paginated;
use crate::domain::view_state::ViewState;
use crate::templates::components::filter_bar::LISTING_SYNC;
use maud::{html, Markup};

/// Previous / numbered / next controls. Each button swaps `#listing-app`
/// with the requested page and scrolls back to the top.
pub fn pagination<T>(state: &ViewState, page: &Paginated<T>) -> Markup {
    html! {
        nav class="pagination" aria-label="Pagination" {
            (page_button(state, page.page.saturating_sub(1), !page.has_previous(), "Previous page", chevron("M15 19l-7-7 7-7")))

            @for entry in &page.pages {
                @match entry {
                    Some(n) if *n == page.page => {
                        span class="pagination-btn active-page" aria-current="page" { (n) }
                    }
                    Some(n) => {
                        (page_button(state, *n, false, &format!("Page {n}"), html! { (n) }))
                    }
                    None => {
                        span class="pagination-btn ellipsis" { "..." }
                    }
                }
            }

            (page_button(state, page.page.saturating_add(1), !page.has_next(), "Next page", chevron("M9 5l7 7-7 7")))
        }
    }
}

fn page_button(state: &ViewState, target: usize, disabled: bool, label: &str, content: Markup) -> Markup {
    let url = state.clone().with_page(target).listings_url();

    html! {
        @if disabled {
            button type="button" class="pagination-btn" aria-label=(label) disabled { (content) }
        } @else {
            button
                type="button"
                class="pagination-btn"
                aria-label=(label)
                hx-get=(url)
                hx-target="#listing-app"
                hx-swap="outerHTML show:window:top"
                hx-sync=(LISTING_SYNC)
            {
                (content)
            }
        }
    }
}

fn chevron(d: &str) -> Markup {
    html! {
        svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" {
            path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=(d) {}
        }
    }
}
