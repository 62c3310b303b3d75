use std::env;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use muni_dashboard::config::{
    API_KEY_ENV, DEFAULT_CACHE_DIR, MAX_ARRIVALS, STOP_ID_33_EASTBOUND, STOP_ID_33_WESTBOUND,
    STOP_ID_J_INBOUND, STOP_ID_J_OUTBOUND, STOP_MONITORING_URL,
};
use muni_dashboard::dashboard::{build_entry, render_dashboard};
use muni_dashboard::parser::parse_arrivals;
use muni_dashboard::types::arrival::Arrival;
use muni_dashboard::utils::muni_client::MuniClient;

async fn get_arrivals(client: &MuniClient, stop_code: &str) -> Vec<Arrival> {
    match client.fetch(stop_code, false).await {
        Some(data) => parse_arrivals(&data),
        None => Vec::new(),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    info!("Fetching Muni arrivals...");

    let client = MuniClient::new(
        STOP_MONITORING_URL.to_string(),
        env::var(API_KEY_ENV).ok(),
        PathBuf::from(DEFAULT_CACHE_DIR),
    );

    let j_in = get_arrivals(&client, STOP_ID_J_INBOUND).await;
    let j_out = get_arrivals(&client, STOP_ID_J_OUTBOUND).await;
    let bus_33_w = get_arrivals(&client, STOP_ID_33_WESTBOUND).await;
    let bus_33_e = get_arrivals(&client, STOP_ID_33_EASTBOUND).await;

    let entries = vec![
        build_entry("J", "Downtown (Inbound)", &j_in, MAX_ARRIVALS),
        build_entry("J", "Balboa Park (Outbound)", &j_out, MAX_ARRIVALS),
        build_entry("33", "The Richmond (Westbound)", &bus_33_w, MAX_ARRIVALS),
        build_entry("33", "SF General Hospital (Eastbound)", &bus_33_e, MAX_ARRIVALS),
    ];

    if let Err(e) = render_dashboard(&entries, Path::new("dashboard.html")) {
        error!("Failed to write dashboard: {}", e);
    }
}
