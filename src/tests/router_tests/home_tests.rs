use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, empty_body, init_test_app};
use http::{Method, Request};

#[test]
fn home_page_renders_full_layout_with_skeletons() {
    let app = init_test_app();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(empty_body())
        .unwrap();

    let resp = handle(req, &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("DreamDwell"));
    assert!(body.contains("Become an Agent"));
    assert!(body.contains(r#"id="listing-skeletons""#));
    assert_eq!(body.matches("skeleton-image").count(), 6);
    assert!(body.contains("our Newsletter"));
    assert!(body.contains(r#"id="footer""#));

    // No real cards until the grid is fetched.
    assert!(!body.contains("data-property-id="));
}

#[test]
fn home_page_lazy_loads_the_same_query() {
    let app = init_test_app();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/?tab=buy&location=Lagos&page=2")
        .body(empty_body())
        .unwrap();

    let body = body_string(handle(req, &app).unwrap());
    assert!(body.contains(r#"hx-get="/listings?tab=buy&amp;location=Lagos&amp;page=2""#));
    assert!(body.contains(r#"<option value="Lagos" selected>"#));
}

#[test]
fn stylesheet_is_served() {
    let app = init_test_app();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/static/main.css")
        .body(empty_body())
        .unwrap();

    let resp = handle(req, &app).unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/css"));
    assert!(body_string(resp).contains(".property-grid"));
}

#[test]
fn unknown_route_is_a_404_page() {
    let app = init_test_app();

    for (method, uri) in [(Method::GET, "/nope"), (Method::POST, "/")] {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(empty_body())
            .unwrap();

        let err = handle(req, &app).unwrap_err();
        let resp = error_to_response(err);
        assert_eq!(resp.status(), 404);
        assert!(body_string(resp).contains("Error 404"));
    }
}
