use maud::{html, Markup};

/// The newsletter block. `error` is shown under the field after a rejected
/// submission, with the rejected `value` kept in the input.
pub fn newsletter_section(value: &str, error: Option<&str>) -> Markup {
    html! {
        section id="newsletter" class="newsletter" {
            div class="newsletter__blob" {}
            div class="newsletter__panel" {
                div class="newsletter__copy" {
                    h2 { "Sign up for" br; "our Newsletter" }
                    p {
                        "Stay informed about our latest properties at DreamDwell Estates "
                        "by subscribing to regular updates directly to your inbox."
                    }
                }

                form
                    method="post"
                    action="/newsletter"
                    hx-post="/newsletter"
                    hx-target="#newsletter"
                    hx-swap="outerHTML"
                    hx-disabled-elt="button"
                    class="newsletter__form"
                {
                    label class="sr-only" for="newsletter-email" { "Email address" }
                    input
                        type="email"
                        id="newsletter-email"
                        name="email"
                        value=(value)
                        placeholder="Enter Your Email Address"
                        autocomplete="email"
                        required;

                    @if let Some(error) = error {
                        p class="newsletter__error" role="alert" { (error) }
                    }

                    button type="submit" class="btn btn-light" { "Subscribe" }
                }
            }
        }
    }
}

/// Replaces the newsletter block once a signup is accepted.
pub fn newsletter_thanks(email: &str) -> Markup {
    html! {
        section id="newsletter" class="newsletter" {
            div class="newsletter__panel fade-in" {
                div class="newsletter__copy" {
                    h2 { "You're subscribed" }
                    p {
                        "We'll send new listings to "
                        strong { (email) }
                        "."
                    }
                }
            }
        }
    }
}
