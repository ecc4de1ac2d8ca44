// templates/pages/home.rs

use crate::templates::components::newsletter_section;
use crate::templates::desktop_layout;
use crate::templates::pages::listings::{listing_app, ListingsVm};
use maud::{html, Markup};

pub fn home_page(vm: &ListingsVm) -> Markup {
    desktop_layout(
        "Property",
        html! {
            (listing_app(vm))
            (newsletter_section("", None))
        },
    )
}
