use crate::router::handle;
use crate::tests::utils::{
    app_with_rentals, body_string, empty_body, init_test_app, RecordingLatency,
};
use crate::app::App;
use crate::domain::latency::LoadPhase;
use http::{Method, Request};

fn get_listings(app: &App, uri: &str) -> String {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(empty_body())
        .unwrap();

    let resp = handle(req, app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

fn card_count(body: &str) -> usize {
    body.matches("data-property-id=").count()
}

#[test]
fn listings_partial_defaults_to_rent_tab() {
    let app = init_test_app();
    let body = get_listings(&app, "/listings");

    // Partial only, for htmx swapping.
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));

    assert!(body.contains(r#"id="listing-app""#));
    assert!(body.contains("tab tab--active"));
    assert_eq!(card_count(&body), 6);
    assert!(body.contains("9 properties"));
    assert!(body.contains(r#"class="pagination""#));
}

#[test]
fn second_page_has_the_remainder() {
    let app = init_test_app();
    let body = get_listings(&app, "/listings?tab=rent&page=2");

    assert_eq!(card_count(&body), 3);
    assert!(body.contains(r#"aria-current="page">2<"#));
}

#[test]
fn small_result_sets_skip_pagination() {
    let app = init_test_app();
    let body = get_listings(&app, "/listings?tab=buy");

    assert_eq!(card_count(&body), 4);
    assert!(!body.contains(r#"class="pagination""#));
}

#[test]
fn no_matches_shows_message() {
    let app = init_test_app();
    let body = get_listings(&app, "/listings?tab=lease&type=Duplex");

    assert_eq!(card_count(&body), 0);
    assert!(body.contains("No properties found"));
}

#[test]
fn open_ended_price_range_across_tabs() {
    let app = init_test_app();
    let body = get_listings(&app, "/listings?tab=&price=3000000%2B");

    assert!(body.contains("7 properties"));
    assert!(body.contains(r#"data-property-id="4""#));
    assert!(body.contains(r#"data-property-id="14""#));
    assert!(!body.contains(r#"data-property-id="1""#));
}

#[test]
fn malformed_price_range_is_ignored() {
    let app = init_test_app();
    let body = get_listings(&app, "/listings?tab=rent&price=cheap");
    assert!(body.contains("9 properties"));
}

#[test]
fn location_match_is_case_sensitive() {
    let app = init_test_app();

    let body = get_listings(&app, "/listings?tab=&location=Abuja");
    assert!(body.contains("6 properties"));

    let body = get_listings(&app, "/listings?tab=&location=abuja");
    assert!(body.contains("No properties found"));
}

#[test]
fn thirteen_items_third_page_has_one() {
    let app = app_with_rentals(13);
    let body = get_listings(&app, "/listings?page=3");

    assert_eq!(card_count(&body), 1);
    assert!(body.contains(r#"data-property-id="13""#));
    assert!(body.contains(r#"aria-label="Next page" disabled"#));
}

#[test]
fn page_past_the_end_is_empty_not_an_error() {
    let app = app_with_rentals(13);
    let body = get_listings(&app, "/listings?page=9");

    assert_eq!(card_count(&body), 0);
    assert!(body.contains("No properties found"));
}

#[test]
fn huge_page_number_renders_an_empty_page() {
    let app = init_test_app();
    let body = get_listings(&app, "/listings?tab=&page=18446744073709551615");

    assert_eq!(card_count(&body), 0);
    assert!(body.contains("No properties found"));
    assert!(body.contains(r#"aria-label="Next page" disabled"#));
}

#[test]
fn every_swap_control_shares_the_listing_sync_scope() {
    let app = init_test_app();
    let body = get_listings(&app, "/listings?page=1");
    let sync = r##"hx-sync="closest #listing-app:replace""##;

    // Three tabs, the form, and the page 2 and Next buttons.
    assert_eq!(body.matches(sync).count(), 6);
    assert_eq!(body.matches("hx-sync=").count(), 6);
}

#[test]
fn long_result_sets_compress_page_numbers() {
    let app = app_with_rentals(60);
    let body = get_listings(&app, "/listings?page=5");

    assert_eq!(body.matches("pagination-btn ellipsis").count(), 2);
    assert!(body.contains(r#"aria-label="Page 4""#));
    assert!(body.contains(r#"aria-label="Page 6""#));
    assert!(body.contains(r#"aria-label="Page 10""#));
}

#[test]
fn filter_controls_on_a_later_page_point_back_to_page_one() {
    let app = app_with_rentals(13);
    let body = get_listings(&app, "/listings?page=2");

    // Tabs and the filter form never carry the current page forward.
    let filter_bar = body.split(r#"id="listing-results""#).next().unwrap();
    assert!(!filter_bar.contains("page="));
    assert!(filter_bar.contains(r#"hx-get="/listings?tab=buy""#));
}

#[test]
fn fake_latency_only_for_loads_and_filters() {
    let recorder = RecordingLatency::default();
    let app = init_test_app().with_latency(Box::new(recorder.clone()));

    for trigger in ["listing-skeletons", "filter-form", "tab-buy"] {
        let req = Request::builder()
            .method(Method::GET)
            .uri("/listings")
            .header("HX-Trigger", trigger)
            .body(empty_body())
            .unwrap();
        handle(req, &app).unwrap();
    }

    // Page flip: no trigger id.
    get_listings(&app, "/listings?page=2");

    let phases = recorder.phases.lock().unwrap().clone();
    assert_eq!(
        phases,
        vec![LoadPhase::InitialLoad, LoadPhase::Filter, LoadPhase::Filter]
    );
}
