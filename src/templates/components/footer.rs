use chrono::{Datelike, Utc};
use maud::{html, Markup};

const FOOTER_COLUMNS: [(&str, &[(&str, &str)]); 4] = [
    ("Home", &[("Home", "/"), ("Listing", "/listing"), ("Agent", "/agent")]),
    ("About", &[("About", "/about"), ("Blog", "/blog"), ("Contact", "/contact")]),
    ("Whitepaper", &[("Contact", "/contact"), ("FAQs", "/faqs")]),
    (
        "Social Media",
        &[
            ("Facebook", "https://facebook.com"),
            ("Twitter", "https://twitter.com"),
            ("Instagram", "https://instagram.com"),
        ],
    ),
];

pub fn footer() -> Markup {
    html! {
        footer id="footer" class="site-footer" {
            div class="container" {
                div class="site-footer__brand" {
                    h2 { "DreamDwell" }
                    p { "Estates" }
                }

                div class="site-footer__columns" {
                    @for (heading, links) in FOOTER_COLUMNS {
                        div {
                            h3 { (heading) }
                            ul {
                                @for (text, href) in links {
                                    li {
                                        @if href.starts_with("http") {
                                            a href=(href) target="_blank" rel="noopener noreferrer" { (text) }
                                        } @else {
                                            a href=(href) { (text) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                p class="site-footer__copy" { "© " (Utc::now().year()) " DreamDwell Estates" }
            }
        }
    }
}
