use serde::Deserialize;

// The 511.org StopMonitoring shape. Unlike some SIRI feeds there is no
// top-level `Siri` envelope, and StopMonitoringDelivery is a single object
// rather than a list. Every field is optional: the upstream schema is only
// partially guaranteed and any key may be absent.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopMonitoringResponse {
    pub service_delivery: Option<ServiceDelivery>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceDelivery {
    pub stop_monitoring_delivery: Option<StopMonitoringDelivery>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopMonitoringDelivery {
    pub monitored_stop_visit: Option<Vec<MonitoredStopVisit>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoredStopVisit {
    pub monitored_vehicle_journey: Option<MonitoredVehicleJourney>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoredVehicleJourney {
    pub line_ref: Option<String>,
    pub monitored_call: Option<MonitoredCall>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoredCall {
    pub destination_display: Option<String>,
    pub expected_arrival_time: Option<String>,
}
