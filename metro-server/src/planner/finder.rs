//! Route search.
//!
//! Routes are either direct (one line) or change once at an interchange.
//! A direct route always wins if one exists, even when changing would be
//! shorter. Interchanges are tried in declaration order and the first one
//! that links both stations is used.

use tracing::debug;

use crate::domain::{MetroLine, RouteResult};
use crate::network::StationNetwork;

/// Finds routes on a [`StationNetwork`].
#[derive(Debug, Clone, Copy)]
pub struct RouteFinder<'a> {
    network: &'a StationNetwork,
}

impl<'a> RouteFinder<'a> {
    pub fn new(network: &'a StationNetwork) -> Self {
        Self { network }
    }

    /// Find a route from `start` to `end`.
    ///
    /// Names are matched case-insensitively, ignoring surrounding
    /// whitespace. Blank, unknown or identical stations, and pairs with no
    /// route, all produce [`RouteResult::invalid`]; this never fails.
    pub fn find_route(&self, start: &str, end: &str) -> RouteResult {
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            debug!("route request with a blank station");
            return RouteResult::invalid();
        }
        if start.to_lowercase() == end.to_lowercase() {
            debug!(start, "route request to the same station");
            return RouteResult::invalid();
        }

        let (Some(start), Some(end)) = (self.network.resolve(start), self.network.resolve(end))
        else {
            debug!(start, end, "route request for an unknown station");
            return RouteResult::invalid();
        };

        if let Some(route) = self.direct_route(start, end) {
            return route;
        }
        if let Some(route) = self.transfer_route(start, end) {
            return route;
        }

        debug!(start, end, "no route found");
        RouteResult::invalid()
    }

    /// A route on the first line serving both stations.
    fn direct_route(&self, start: &str, end: &str) -> Option<RouteResult> {
        let (line, stations) = self.line_serving(start, end)?;
        let path = sub_route(stations, start, end)?;
        let direction = direction_of_travel(stations, start, end)?;

        debug!(start, end, %line, hops = path.len() - 1, "direct route");
        Some(RouteResult::direct(path, direction, line))
    }

    /// A route changing at the first interchange that links both stations
    /// on two different lines.
    fn transfer_route(&self, start: &str, end: &str) -> Option<RouteResult> {
        for interchange in self.network.interchanges() {
            let Some((first_line, first_stations)) = self.line_serving(start, interchange) else {
                continue;
            };
            let Some((second_line, second_stations)) = self.line_serving(interchange, end) else {
                continue;
            };
            if first_line == second_line {
                continue;
            }

            let (Some(mut path), Some(second_leg), Some(direction)) = (
                sub_route(first_stations, start, interchange),
                sub_route(second_stations, interchange, end),
                direction_of_travel(second_stations, interchange, end),
            ) else {
                continue;
            };
            // The second leg starts at the interchange, which is already
            // the last stop of the first leg.
            path.extend(second_leg.into_iter().skip(1));

            debug!(
                start,
                end,
                interchange = interchange.as_str(),
                from = %first_line,
                to = %second_line,
                hops = path.len() - 1,
                "transfer route"
            );
            return RouteResult::with_transfer(
                path,
                interchange.clone(),
                direction,
                first_line,
                second_line,
            );
        }

        None
    }

    /// The first line (in declaration order) serving both stations.
    fn line_serving(&self, a: &str, b: &str) -> Option<(MetroLine, &'a [String])> {
        self.network.lines().find(|(_, stations)| {
            stations.iter().any(|s| s == a) && stations.iter().any(|s| s == b)
        })
    }
}

/// The stops from `start` to `end` along `line`, inclusive.
///
/// The result always begins with `start` and ends with `end`, whichever
/// way round they sit on the line. Returns `None` if either station is
/// not on the line.
///
/// # Examples
///
/// ```
/// use metro_server::planner::sub_route;
///
/// let line: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
///
/// assert_eq!(sub_route(&line, "B", "D").unwrap(), ["B", "C", "D"]);
/// assert_eq!(sub_route(&line, "D", "B").unwrap(), ["D", "C", "B"]);
/// assert!(sub_route(&line, "A", "Z").is_none());
/// ```
pub fn sub_route(line: &[String], start: &str, end: &str) -> Option<Vec<String>> {
    let start_idx = line.iter().position(|s| s == start)?;
    let end_idx = line.iter().position(|s| s == end)?;

    let (lo, hi) = if start_idx <= end_idx {
        (start_idx, end_idx)
    } else {
        (end_idx, start_idx)
    };

    let mut path = line[lo..=hi].to_vec();
    if start_idx > end_idx {
        path.reverse();
    }
    Some(path)
}

/// The terminal station a train from `from` to `to` is heading for.
fn direction_of_travel(line: &[String], from: &str, to: &str) -> Option<String> {
    let from_idx = line.iter().position(|s| s == from)?;
    let to_idx = line.iter().position(|s| s == to)?;

    let terminal = if from_idx < to_idx {
        line.last()
    } else {
        line.first()
    };
    terminal.cloned()
}
