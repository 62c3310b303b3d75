use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::MuniError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Client for the 511.org StopMonitoring endpoint. Successful live fetches
/// are snapshotted to a per-stop cache file so the dashboard can be
/// developed and tested offline.
#[derive(Clone)]
pub struct MuniClient {
    base_url: String,
    api_key: Option<String>,
    cache_dir: PathBuf,
    client: reqwest::Client,
}

impl MuniClient {
    pub fn new(base_url: String, api_key: Option<String>, cache_dir: PathBuf) -> Self {
        MuniClient {
            base_url,
            api_key,
            cache_dir,
            client: reqwest::Client::new(),
        }
    }

    /// Fetch real-time stop data for a stop code, or `None` when nothing
    /// could be retrieved. Every failure mode is logged and degrades to
    /// `None`; this boundary never propagates an error to the caller.
    pub async fn fetch(&self, stop_code: &str, use_cached: bool) -> Option<Value> {
        if use_cached {
            match self.read_snapshot(stop_code) {
                Ok(Some(cached)) => {
                    info!("Loaded cached snapshot for stop {}", stop_code);
                    return Some(cached);
                }
                Ok(None) => {
                    info!(
                        "No cached snapshot for stop {}; falling back to live request",
                        stop_code
                    );
                }
                Err(e) => {
                    warn!(
                        "Cached snapshot for stop {} is unreadable ({}); falling back to live request",
                        stop_code, e
                    );
                }
            }
        }

        match self.fetch_live(stop_code).await {
            Ok(data) => {
                if let Err(e) = self.write_snapshot(stop_code, &data) {
                    warn!("Failed to persist snapshot for stop {}: {}", stop_code, e);
                }
                Some(data)
            }
            Err(e @ MuniError::MissingApiKey) => {
                error!("{}", e);
                None
            }
            Err(e) => {
                warn!("Failed to fetch stop {}: {}", stop_code, e);
                None
            }
        }
    }

    async fn fetch_live(&self, stop_code: &str) -> Result<Value, MuniError> {
        let api_key = self.api_key.as_deref().ok_or(MuniError::MissingApiKey)?;

        let response = self
            .client
            .get(&self.base_url)
            .timeout(REQUEST_TIMEOUT)
            .query(&[
                ("api_key", api_key),
                ("agency", "SF"),
                ("stopcode", stop_code),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        // 511.org prepends a UTF-8 BOM to the body.
        let body = response.bytes().await?;
        let body = body.strip_prefix(UTF8_BOM).unwrap_or(&body);
        Ok(serde_json::from_slice(body)?)
    }

    /// Where the snapshot for a stop lives. The cache is keyed per stop so
    /// a cached read for one stop can never return another stop's data.
    pub fn snapshot_path(&self, stop_code: &str) -> PathBuf {
        self.cache_dir.join(format!("stop_{}.json", stop_code))
    }

    fn read_snapshot(&self, stop_code: &str) -> Result<Option<Value>, MuniError> {
        let path = self.snapshot_path(stop_code);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&text)?))
    }

    fn write_snapshot(&self, stop_code: &str, data: &Value) -> Result<(), MuniError> {
        fs::create_dir_all(&self.cache_dir)?;
        fs::write(
            self.snapshot_path(stop_code),
            serde_json::to_string_pretty(data)?,
        )?;
        Ok(())
    }
}
