// J Church at the 20th St Right of Way
pub const STOP_ID_J_INBOUND: &str = "16215"; // To Downtown
pub const STOP_ID_J_OUTBOUND: &str = "16214"; // To Balboa Park

// 33 Ashbury/18th at 18th & Church
pub const STOP_ID_33_WESTBOUND: &str = "13323"; // To The Richmond District
pub const STOP_ID_33_EASTBOUND: &str = "13322"; // To SF General Hospital

/// How many arrival predictions to show per dashboard entry.
pub const MAX_ARRIVALS: usize = 3;

pub const STOP_MONITORING_URL: &str = "https://api.511.org/transit/StopMonitoring";
pub const API_KEY_ENV: &str = "MUNI_API_KEY";
pub const DEFAULT_CACHE_DIR: &str = "sample_data";
