use crate::domain::images::{property_image_url, CARD_IMAGE_HEIGHT, CARD_IMAGE_WIDTH};
use crate::domain::property::Property;
use maud::{html, Markup};

/// Only the first two status labels fit on the image.
const MAX_STATUS_TAGS: usize = 2;

pub fn property_card(property: &Property) -> Markup {
    let image_url = property_image_url(
        &property.image,
        property.id,
        CARD_IMAGE_WIDTH,
        CARD_IMAGE_HEIGHT,
    );

    html! {
        article class="property-card" data-property-id=(property.id) {
            div class="property-card__media" {
                div class="property-card__tags" {
                    @for status in property.status.iter().take(MAX_STATUS_TAGS) {
                        span class="tag" { (status) }
                    }
                }
                img
                    src=(image_url)
                    alt=(property.title)
                    loading=[(property.id > 4).then_some("lazy")];
            }

            div class="property-card__body" {
                div class="property-card__summary" {
                    h3 class="property-card__price" { "₦ " (property.display_amount()) }
                    p class="muted small" { "Per Annum" }

                    div class="property-card__features" {
                        span { strong { (property.bedrooms) } " Bedroom" }
                        span { strong { (property.bathrooms) } " Bathroom" }
                        span { (property.location) }
                    }

                    h4 class="property-card__title" { (property.title) }
                }

                button type="button" class="btn btn-primary" {
                    "View"
                    (arrow_right())
                }
            }
        }
    }
}

fn arrow_right() -> Markup {
    html! {
        svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" {
            path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M14 5l7 7m0 0l-7 7m7-7H3" {}
        }
    }
}
