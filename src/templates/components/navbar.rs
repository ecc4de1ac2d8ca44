use maud::{html, Markup};

const HERO_IMAGE: &str = "https://picsum.photos/seed/realestate-hero/1920/350";

pub fn navbar() -> Markup {
    html! {
        header class="site-header" style=(format!("background-image: url({HERO_IMAGE})")) {
            div class="container site-header__inner" {
                a class="logo" href="/" {
                    span class="logo__name" { "DreamDwell" }
                    span class="logo__sub" { "Estates" }
                }

                div class="site-header__nav" {
                    nav class="pill-nav" {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/" class="active" { "Property" } }
                            li { a href="#footer" { "Contact" } }
                        }
                    }
                    a href="/become-agent" class="btn btn-cta" { "Become an Agent" }
                }
            }
        }
    }
}
