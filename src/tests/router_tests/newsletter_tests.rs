use crate::router::handle;
use crate::tests::utils::{body_string, init_test_app};
use astra::Body;
use http::{Method, Request};

fn post_newsletter(body_data: &str) -> (u16, String) {
    let app = init_test_app();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/newsletter")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body_data.as_bytes().to_vec()))
        .unwrap();

    let resp = handle(req, &app).expect("Failed to handle request");
    let status = resp.status().as_u16();
    (status, body_string(resp))
}

#[test]
fn valid_signup_returns_thanks_partial() {
    let (status, body) = post_newsletter("email=Buyer%40Example.com");

    assert_eq!(status, 200);
    assert!(body.contains("subscribed"));
    assert!(body.contains("buyer@example.com"));
    assert!(body.contains(r#"id="newsletter""#));

    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn invalid_signup_rerenders_form_with_error() {
    let (status, body) = post_newsletter("email=not-an-email");

    assert_eq!(status, 200);
    assert!(body.contains("Please enter a valid email address."));
    assert!(body.contains(r#"value="not-an-email""#));
    assert!(body.contains("Subscribe"));
}

#[test]
fn missing_field_is_treated_as_invalid() {
    let (status, body) = post_newsletter("");

    assert_eq!(status, 200);
    assert!(body.contains("Please enter a valid email address."));
}
