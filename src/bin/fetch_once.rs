//! Fetch one stop live and persist the snapshot, for development and for
//! refreshing the cached sample data without rendering the dashboard.

use std::env;
use std::path::PathBuf;

use tracing::{error, info};

use muni_dashboard::config::{
    API_KEY_ENV, DEFAULT_CACHE_DIR, STOP_ID_J_INBOUND, STOP_MONITORING_URL,
};
use muni_dashboard::parser::parse_arrivals;
use muni_dashboard::utils::muni_client::MuniClient;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let stop_code = env::args()
        .nth(1)
        .unwrap_or_else(|| STOP_ID_J_INBOUND.to_string());
    info!("Fetching data for stop {} ...", stop_code);

    let client = MuniClient::new(
        STOP_MONITORING_URL.to_string(),
        env::var(API_KEY_ENV).ok(),
        PathBuf::from(DEFAULT_CACHE_DIR),
    );

    match client.fetch(&stop_code, false).await {
        Some(data) => {
            let arrivals = parse_arrivals(&data);
            info!(
                "Saved {} arrivals to {}",
                arrivals.len(),
                client.snapshot_path(&stop_code).display()
            );
        }
        None => error!("API returned no data."),
    }
}
