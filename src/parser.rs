use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::warn;

use crate::error::MuniError;
use crate::types::arrival::Arrival;
use crate::types::stop_monitoring_response::{MonitoredStopVisit, StopMonitoringResponse};
use crate::utils::time_math;

/// Parse a raw StopMonitoring response into arrivals, using the current
/// wall clock as the reference time. Never fails as a whole: a response
/// with an unexpected top-level shape yields an empty list, and a broken
/// visit record is skipped while the rest are processed. Upstream order
/// (soonest first) is preserved as-is.
pub fn parse_arrivals(raw: &Value) -> Vec<Arrival> {
    parse_arrivals_at(raw, Utc::now())
}

/// Same as [`parse_arrivals`] with an injected reference time.
pub fn parse_arrivals_at(raw: &Value, now: DateTime<Utc>) -> Vec<Arrival> {
    let visits = match extract_visits(raw) {
        Ok(visits) => visits,
        Err(e) => {
            warn!("{}", e);
            return Vec::new();
        }
    };

    let mut arrivals = Vec::with_capacity(visits.len());
    for visit in visits {
        match parse_visit(visit, now) {
            Ok(arrival) => arrivals.push(arrival),
            Err(e) => warn!("Skipping one visit: {}", e),
        }
    }
    arrivals
}

fn extract_visits(raw: &Value) -> Result<Vec<MonitoredStopVisit>, MuniError> {
    let response: StopMonitoringResponse = serde_json::from_value(raw.clone())?;
    response
        .service_delivery
        .ok_or(MuniError::Shape("ServiceDelivery"))?
        .stop_monitoring_delivery
        .ok_or(MuniError::Shape("StopMonitoringDelivery"))?
        .monitored_stop_visit
        .ok_or(MuniError::Shape("MonitoredStopVisit"))
}

fn parse_visit(visit: MonitoredStopVisit, now: DateTime<Utc>) -> Result<Arrival, MuniError> {
    let journey = visit
        .monitored_vehicle_journey
        .ok_or(MuniError::Shape("MonitoredVehicleJourney"))?;
    let call = journey
        .monitored_call
        .ok_or(MuniError::Shape("MonitoredCall"))?;

    let line = journey.line_ref.unwrap_or_else(|| "Unknown".to_string());
    let destination = call
        .destination_display
        .unwrap_or_else(|| "Unknown destination".to_string());
    let expected_time_utc = call
        .expected_arrival_time
        .ok_or(MuniError::Shape("ExpectedArrivalTime"))?;

    let expected_time_local = time_math::to_local_display(&expected_time_utc)?;
    let minutes_away = time_math::minutes_until(&expected_time_utc, Some(now))?;

    Ok(Arrival {
        line,
        destination,
        expected_time_utc,
        expected_time_local,
        minutes_away,
    })
}
