use std::fs;
use std::path::Path;

use chrono::Local;
use tracing::info;

use crate::error::MuniError;
use crate::types::arrival::Arrival;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardEntry {
    pub line: String,
    pub destination: String,
    /// Comma-joined minutes-away values, or "No service".
    pub times: String,
}

/// Format parsed arrivals for one dashboard row. Only the first
/// `max_items` predictions are shown.
pub fn build_entry(
    line: &str,
    destination: &str,
    arrivals: &[Arrival],
    max_items: usize,
) -> DashboardEntry {
    let times = if arrivals.is_empty() {
        "No service".to_string()
    } else {
        arrivals
            .iter()
            .take(max_items)
            .map(|a| a.minutes_away.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    DashboardEntry {
        line: line.to_string(),
        destination: destination.to_string(),
        times,
    }
}

/// Write the HTML dashboard to `output_path`.
pub fn render_dashboard(entries: &[DashboardEntry], output_path: &Path) -> Result<(), MuniError> {
    let now_str = Local::now().format("%I:%M %p").to_string();
    fs::write(output_path, render_html(entries, &now_str))?;
    info!("Dashboard updated -> {}", output_path.display());
    Ok(())
}

fn render_html(entries: &[DashboardEntry], current_time: &str) -> String {
    let mut rows = String::new();
    for entry in entries {
        rows.push_str(&format!(
            "      <tr><td class=\"line\">{}</td><td>{}</td><td>{}</td></tr>\n",
            entry.line, entry.destination, entry.times
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Muni Dashboard</title>
  <style>
    body {{ font-family: sans-serif; background: #111; color: #eee; margin: 2rem; }}
    h1 {{ font-size: 1.4rem; }}
    table {{ border-collapse: collapse; }}
    td {{ padding: 0.4rem 1rem; border-bottom: 1px solid #333; }}
    td.line {{ font-weight: bold; }}
  </style>
</head>
<body>
  <h1>Muni Departures</h1>
  <p>Updated {current_time}</p>
  <table>
    <tbody>
{rows}    </tbody>
  </table>
</body>
</html>
"#,
        current_time = current_time,
        rows = rows
    )
}
