pub mod arrival;
pub mod stop_monitoring_response;
