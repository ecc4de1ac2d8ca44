use crate::app::App;
use crate::config::AppConfig;
use crate::db::ListingStore;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;

mod app;
mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load the listing fixture once; it is never written to.
    let store = match ListingStore::load(&config.data_path) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Listing data could not be loaded: {e}");
            std::process::exit(1);
        }
    };

    if store.is_empty() {
        log::warn!("{} has no listings; every search will come back empty", config.data_path.display());
    }

    let addr = config.bind_addr;
    let max_workers = config.max_workers;
    let app = App::new(store, config);

    // 3️⃣ Start the server
    log::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(max_workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                log::warn!("{method} {path} failed: {err}");
                error_to_response(err)
            }
        };

        log::debug!("{method} {path} -> {}", resp.status());
        resp
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
