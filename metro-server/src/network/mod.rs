//! The static station network.
//!
//! A network is a fixed set of lines, each an ordered list of station
//! names, plus an explicit list of interchange stations. It is built once
//! at start-up and never changes afterwards.

mod cairo;
mod error;
mod nearest;

use std::collections::HashMap;

use crate::domain::{Coordinate, MetroLine, Station};

pub use cairo::cairo_metro;
pub use error::NetworkError;
pub use nearest::{NearestStation, nearest_station};

/// An immutable metro network.
///
/// Station names are the unique key: a name that appears on two lines is
/// one physical station.
#[derive(Debug, Clone)]
pub struct StationNetwork {
    /// Lines in declaration order, each with stations in track order.
    lines: Vec<(MetroLine, Vec<String>)>,

    /// Interchanges in declaration order. Route search tries them in
    /// this order.
    interchanges: Vec<String>,

    /// Every station once, in order of first appearance.
    stations: Vec<Station>,

    /// Lines serving each station, in declaration order.
    lines_by_station: HashMap<String, Vec<MetroLine>>,
}

impl StationNetwork {
    /// Start defining a network.
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::new()
    }

    /// All station names, each once, in order of first appearance.
    pub fn station_names(&self) -> impl Iterator<Item = &str> {
        self.stations.iter().map(|s| s.name.as_str())
    }

    /// All stations, each once, in order of first appearance.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Lines with their ordered stations, in declaration order.
    pub fn lines(&self) -> impl Iterator<Item = (MetroLine, &[String])> {
        self.lines
            .iter()
            .map(|(line, stations)| (*line, stations.as_slice()))
    }

    /// Ordered stations of one line.
    pub fn stations_on(&self, line: MetroLine) -> Option<&[String]> {
        self.lines
            .iter()
            .find(|(l, _)| *l == line)
            .map(|(_, stations)| stations.as_slice())
    }

    /// Interchange stations, in declaration order.
    pub fn interchanges(&self) -> &[String] {
        &self.interchanges
    }

    pub fn is_interchange(&self, name: &str) -> bool {
        self.interchanges.iter().any(|i| i == name)
    }

    /// Lines serving `name`; empty for unknown stations.
    pub fn lines_for(&self, name: &str) -> &[MetroLine] {
        self.lines_by_station
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The first line (in declaration order) serving `name`.
    pub fn line_of(&self, name: &str) -> Option<MetroLine> {
        self.lines_for(name).first().copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lines_by_station.contains_key(name)
    }

    /// Map user input to a canonical station name.
    ///
    /// Surrounding whitespace is ignored and the match is
    /// case-insensitive. Returns `None` for unknown or blank input.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if let Some(station) = self.stations.iter().find(|s| s.name == input) {
            return Some(&station.name);
        }
        let folded = input.to_lowercase();
        self.stations
            .iter()
            .find(|s| s.name.to_lowercase() == folded)
            .map(|s| s.name.as_str())
    }

    pub fn coordinate_of(&self, name: &str) -> Option<Coordinate> {
        self.stations
            .iter()
            .find(|s| s.name == name)
            .and_then(|s| s.coordinate)
    }

    /// Stations that have a known location.
    pub fn stations_with_coordinates(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter().filter(|s| s.coordinate.is_some())
    }

    /// The located station closest to `observed`.
    pub fn nearest(&self, observed: &Coordinate) -> Option<NearestStation<'_>> {
        nearest_station(self.stations_with_coordinates(), observed)
    }

    /// Number of distinct stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Builder for a [`StationNetwork`].
///
/// Collects lines, interchanges and coordinates, then checks them all in
/// [`build`](NetworkBuilder::build).
///
/// # Example
///
/// ```
/// use metro_server::domain::MetroLine;
/// use metro_server::network::StationNetwork;
///
/// let network = StationNetwork::builder()
///     .line(MetroLine::Line1, &["A", "B", "C", "D"])
///     .line(MetroLine::Line2, &["E", "B", "F", "G"])
///     .interchanges(&["B"])
///     .build()
///     .unwrap();
///
/// assert_eq!(network.len(), 7);
/// assert!(network.is_interchange("B"));
/// assert_eq!(network.lines_for("B").len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    lines: Vec<(MetroLine, Vec<String>)>,
    interchanges: Vec<String>,
    coordinates: Vec<(String, Coordinate)>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line with its stations in track order.
    pub fn line(mut self, line: MetroLine, stations: &[&str]) -> Self {
        self.lines
            .push((line, stations.iter().map(|s| (*s).to_string()).collect()));
        self
    }

    /// Declare interchange stations, in the order route search should try
    /// them.
    pub fn interchanges(mut self, names: &[&str]) -> Self {
        self.interchanges
            .extend(names.iter().map(|s| (*s).to_string()));
        self
    }

    /// Attach a location to a station.
    pub fn coordinate(mut self, name: &str, coordinate: Coordinate) -> Self {
        self.coordinates.push((name.to_string(), coordinate));
        self
    }

    /// Validate and build the network.
    pub fn build(self) -> Result<StationNetwork, NetworkError> {
        let mut lines_by_station: HashMap<String, Vec<MetroLine>> = HashMap::new();
        let mut stations: Vec<Station> = Vec::new();
        let mut seen_lines: Vec<MetroLine> = Vec::new();

        for (line, names) in &self.lines {
            if seen_lines.contains(line) {
                return Err(NetworkError::DuplicateLine(*line));
            }
            seen_lines.push(*line);

            if names.len() < 2 {
                return Err(NetworkError::LineTooShort(*line));
            }

            for name in names {
                let serving = lines_by_station.entry(name.clone()).or_default();
                if serving.contains(line) {
                    return Err(NetworkError::DuplicateStation {
                        line: *line,
                        station: name.clone(),
                    });
                }
                if serving.is_empty() {
                    stations.push(Station::unlocated(name.clone()));
                }
                serving.push(*line);
            }
        }

        for (i, name) in self.interchanges.iter().enumerate() {
            if self.interchanges[..i].contains(name) {
                return Err(NetworkError::DuplicateInterchange(name.clone()));
            }
            let serving = lines_by_station.get(name).map_or(0, Vec::len);
            if serving < 2 {
                return Err(NetworkError::NotAnInterchange(name.clone()));
            }
        }

        for (name, coordinate) in self.coordinates {
            let station = stations
                .iter_mut()
                .find(|s| s.name == name)
                .ok_or_else(|| NetworkError::UnknownStation(name.clone()))?;
            station.coordinate = Some(coordinate);
        }

        Ok(StationNetwork {
            lines: self.lines,
            interchanges: self.interchanges,
            stations,
            lines_by_station,
        })
    }
}
