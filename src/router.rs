use crate::app::App;
use crate::domain::filter::filter;
use crate::domain::latency::LoadPhase;
use crate::domain::newsletter;
use crate::domain::pagination::Paginated;
use crate::domain::view_state::ViewState;
use crate::errors::ServerError;
use crate::responses::{css_response, html_response, ResultResp};
use crate::templates::{self, pages};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(&req, app),
        ("GET", "/listings") => listings(&req, app),
        ("POST", "/newsletter") => subscribe(req),
        ("GET", "/static/main.css") => css_response(templates::MAIN_CSS),
        _ => Err(ServerError::NotFound),
    }
}

/// Full page. The grid starts as skeleton cards and fetches `/listings`
/// with the same query once the page has loaded.
fn home(req: &Request, app: &App) -> ResultResp {
    let state = ViewState::from_query(req.uri().query());
    let vm = pages::ListingsVm::loading(state, app.page_size());
    html_response(pages::home_page(&vm))
}

/// Partial: filter bar, one page of results and the pagination control.
fn listings(req: &Request, app: &App) -> ResultResp {
    if let Some(phase) = load_phase(req) {
        app.latency.pause(phase);
    }

    let state = ViewState::from_query(req.uri().query());
    let filtered = filter(app.store.all(), &state.selection);
    log::debug!(
        "filter {:?} matched {} of {} listings",
        state.selection,
        filtered.len(),
        app.store.len()
    );

    let vm = pages::ListingsVm {
        results: Paginated::new(&filtered, app.page_size(), state.page),
        page_size: app.page_size(),
        state,
    };
    html_response(pages::listing_app(&vm))
}

/// Which fake delay applies, judged by the element htmx says fired the request.
/// Page flips have none.
fn load_phase(req: &Request) -> Option<LoadPhase> {
    let trigger = req.headers().get("HX-Trigger")?.to_str().ok()?;
    match trigger {
        "listing-skeletons" => Some(LoadPhase::InitialLoad),
        "filter-form" => Some(LoadPhase::Filter),
        t if t.starts_with("tab-") => Some(LoadPhase::Filter),
        _ => None,
    }
}

fn subscribe(req: Request) -> ResultResp {
    let form = parse_form(req)?;
    let raw_email = form.get("email").map(String::as_str).unwrap_or("");

    match newsletter::subscribe(raw_email) {
        Ok(email) => html_response(templates::newsletter_thanks(&email)),
        Err(ServerError::BadRequest(_)) => html_response(templates::newsletter_section(
            raw_email,
            Some("Please enter a valid email address."),
        )),
        Err(e) => Err(e),
    }
}

fn parse_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = req.into_body();
    let mut raw = String::new();
    body.reader()
        .read_to_string(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;

    Ok(form_urlencoded::parse(raw.as_bytes()).into_owned().collect())
}
