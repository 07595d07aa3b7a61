//! Askama templates for shareable route text.

use askama::Template;

use crate::domain::RouteResult;

/// Plain-text route summary, as pasted into a message.
#[derive(Template)]
#[template(path = "route_details.txt")]
pub struct RouteDetailsTemplate {
    pub station_count: usize,
    pub time: String,
    pub fare: u32,
    pub transfer: Option<String>,
    pub direction: String,
    pub rows: Vec<String>,
}

/// How a stop is drawn in the route listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopKind {
    Start,
    Transfer,
    Intermediate,
    Destination,
}

impl StopKind {
    fn row(self, name: &str) -> String {
        match self {
            StopKind::Start => format!("🟢 {name} (Start)"),
            StopKind::Transfer => format!("🔄 {name} (Transfer)"),
            StopKind::Intermediate => format!("   ⬇️\n   {name}"),
            StopKind::Destination => format!("🔴 {name} (Destination)"),
        }
    }
}

/// Classify each stop on a route.
///
/// The first and last stops are always start and destination, even when
/// one of them is also the transfer station.
pub fn stop_kinds(route: &RouteResult) -> Vec<(StopKind, &str)> {
    let stations = route.stations();
    let last = stations.len().saturating_sub(1);

    stations
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let kind = if i == 0 {
                StopKind::Start
            } else if i == last {
                StopKind::Destination
            } else if route.transfer_station() == Some(name.as_str()) {
                StopKind::Transfer
            } else {
                StopKind::Intermediate
            };
            (kind, name.as_str())
        })
        .collect()
}

impl RouteDetailsTemplate {
    pub fn from_route(route: &RouteResult) -> Self {
        Self {
            station_count: route.station_count(),
            time: route.formatted_time(),
            fare: route.fare(),
            transfer: route.transfer_station().map(str::to_string),
            direction: route.direction().to_string(),
            rows: stop_kinds(route)
                .into_iter()
                .map(|(kind, name)| kind.row(name))
                .collect(),
        }
    }
}
