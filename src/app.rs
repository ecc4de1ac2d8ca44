use crate::config::AppConfig;
use crate::db::ListingStore;
use crate::domain::latency::{latency_from_millis, Latency, NoLatency};

/// Everything a request handler needs. Shared read-only across astra workers.
pub struct App {
    pub store: ListingStore,
    pub config: AppConfig,
    pub latency: Box<dyn Latency>,
}

impl App {
    pub fn new(store: ListingStore, config: AppConfig) -> Self {
        let latency = latency_from_millis(config.load_delay_ms, config.filter_delay_ms);
        Self {
            store,
            config,
            latency,
        }
    }

    pub fn with_latency(mut self, latency: Box<dyn Latency>) -> Self {
        self.latency = latency;
        self
    }

    /// An app over a fixed set of listings with default config and no delays.
    pub fn for_store(store: ListingStore) -> Self {
        Self::new(store, AppConfig::default()).with_latency(Box::new(NoLatency))
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }
}
