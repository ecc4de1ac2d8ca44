use maud::{html, Markup};

/// Grey placeholder shaped like a property card.
pub fn property_skeleton() -> Markup {
    html! {
        div class="property-card skeleton" aria-hidden="true" {
            div class="skeleton-block skeleton-image" {}
            div class="property-card__body" {
                div class="skeleton-block w-third tall" {}
                div class="skeleton-block w-quarter" {}
                div class="skeleton-row" {
                    div class="skeleton-block w-6rem" {}
                    div class="skeleton-block w-6rem" {}
                }
                div class="skeleton-block w-10rem" {}
                div class="skeleton-block w-full" {}
                div class="skeleton-block w-three-quarters" {}
                div class="skeleton-block w-7rem taller" {}
            }
        }
    }
}
