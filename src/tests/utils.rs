use crate::app::App;
use crate::db::ListingStore;
use crate::domain::latency::{LoadPhase, Latency};
use crate::domain::property::Property;
use astra::{Body, Response};
use std::io::Read;
use std::sync::{Arc, Mutex};

/// App over the bundled fixture, no delays.
pub fn init_test_app() -> App {
    let store = ListingStore::load("data/listings.json")
        .unwrap_or_else(|e| panic!("Fixture failed to load: {e}"));
    App::for_store(store)
}

/// App over `n` rent listings with ids 1..=n.
pub fn app_with_rentals(n: i64) -> App {
    let properties = (1..=n)
        .map(|id| Property {
            id,
            price: format!("₦{},000", 500 + id),
            bedrooms: 2,
            bathrooms: 1,
            location: "Yaba, Lagos".to_string(),
            title: format!("Rental number {id}"),
            status: vec!["For Rent".to_string(), "Flat".to_string()],
            image: String::new(),
        })
        .collect();
    App::for_store(ListingStore::from_properties(properties))
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn empty_body() -> Body {
    Body::empty()
}

/// Latency hook that remembers which phases were requested instead of sleeping.
#[derive(Clone, Default)]
pub struct RecordingLatency {
    pub phases: Arc<Mutex<Vec<LoadPhase>>>,
}

impl Latency for RecordingLatency {
    fn pause(&self, phase: LoadPhase) {
        self.phases.lock().unwrap().push(phase);
    }
}
