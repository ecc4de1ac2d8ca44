use crate::templates::components::{footer, navbar};
use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | DreamDwell Estates" }
                meta name="description" content="Find houses, flats and duplexes to buy, rent or lease.";
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) defer {}
            }
            body {
                (navbar())
                main class="page" {
                    (content)
                }
                (footer())
            }
        }
    }
}
