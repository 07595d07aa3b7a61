//! Station and coordinate types.

use std::fmt;
use std::hash::{Hash, Hasher};

use geo::{HaversineDistance, Point};

/// Error returned when a latitude/longitude pair is out of range.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({latitude}, {longitude}): {reason}")]
pub struct InvalidCoordinate {
    latitude: f64,
    longitude: f64,
    reason: &'static str,
}

/// A point on the earth's surface, in degrees.
///
/// # Examples
///
/// ```
/// use metro_server::domain::Coordinate;
///
/// let sadat = Coordinate::new(30.0444, 31.2357).unwrap();
/// assert_eq!(sadat.latitude(), 30.0444);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, -181.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, checking both components are in range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(InvalidCoordinate {
                latitude,
                longitude,
                reason: "components must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinate {
                latitude,
                longitude,
                reason: "latitude must be within -90..=90",
            });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinate {
                latitude,
                longitude,
                reason: "longitude must be within -180..=180",
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a coordinate from trusted static data without range checks.
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other` in metres.
    pub fn distance_m(&self, other: &Coordinate) -> f64 {
        self.as_point().haversine_distance(&other.as_point())
    }

    fn as_point(&self) -> Point<f64> {
        // geo points are (x, y) = (longitude, latitude)
        Point::new(self.longitude, self.latitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// A metro station.
///
/// The name is the station's identity: two `Station`s with the same name
/// are the same physical node, whatever their coordinates.
#[derive(Debug, Clone)]
pub struct Station {
    pub name: String,
    pub coordinate: Option<Coordinate>,
}

impl Station {
    /// A station with a known location.
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate: Some(coordinate),
        }
    }

    /// A station without location data.
    pub fn unlocated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coordinate: None,
        }
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundaries() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Coordinate::new(90.5, 0.0).is_err());
        assert!(Coordinate::new(-91.0, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.1).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn error_display_names_reason() {
        let err = Coordinate::new(100.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn distance_to_self_is_zero() {
        let c = Coordinate::new_unchecked(30.0444, 31.2357);
        assert!(c.distance_m(&c).abs() < 1e-6);
    }

    #[test]
    fn distance_is_roughly_right() {
        // One degree of latitude is about 111 km.
        let a = Coordinate::new_unchecked(30.0, 31.0);
        let b = Coordinate::new_unchecked(31.0, 31.0);
        let d = a.distance_m(&b);
        assert!((110_000.0..112_500.0).contains(&d), "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new_unchecked(30.0444, 31.2357);
        let b = Coordinate::new_unchecked(30.0611, 31.2461);
        assert!((a.distance_m(&b) - b.distance_m(&a)).abs() < 1e-6);
    }

    #[test]
    fn station_equality_is_by_name() {
        let a = Station::new("Sadat", Coordinate::new_unchecked(30.0444, 31.2357));
        let b = Station::unlocated("Sadat");
        let c = Station::unlocated("Attaba");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Station::unlocated("Sadat"));
        assert!(set.contains(&Station::new(
            "Sadat",
            Coordinate::new_unchecked(0.0, 0.0)
        )));
        assert!(!set.contains(&Station::unlocated("Opera")));
    }
}
