//! Nearest-station lookup.

use crate::domain::{Coordinate, Station};

/// A station picked by [`nearest_station`], with its distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestStation<'a> {
    pub station: &'a Station,
    /// Great-circle distance from the observed point, in metres.
    pub distance_m: f64,
}

/// Find the candidate closest to `observed`.
///
/// Candidates without a coordinate are skipped. When two candidates are
/// equally close the one that comes first wins. Returns `None` if no
/// candidate has a coordinate.
pub fn nearest_station<'a, I>(candidates: I, observed: &Coordinate) -> Option<NearestStation<'a>>
where
    I: IntoIterator<Item = &'a Station>,
{
    let mut best: Option<NearestStation<'a>> = None;

    for station in candidates {
        let Some(coordinate) = station.coordinate else {
            continue;
        };
        let distance_m = coordinate.distance_m(observed);
        let closer = best.is_none_or(|b| distance_m < b.distance_m);
        if closer {
            best = Some(NearestStation {
                station,
                distance_m,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(name: &str, lat: f64, lon: f64) -> Station {
        Station::new(name, Coordinate::new_unchecked(lat, lon))
    }

    #[test]
    fn empty_candidates() {
        let observed = Coordinate::new_unchecked(30.0, 31.0);
        assert!(nearest_station(&[], &observed).is_none());
    }

    #[test]
    fn unlocated_candidates_are_skipped() {
        let candidates = [Station::unlocated("Nowhere")];
        let observed = Coordinate::new_unchecked(30.0, 31.0);
        assert!(nearest_station(&candidates, &observed).is_none());
    }

    #[test]
    fn picks_closest() {
        let candidates = [
            at("Far", 30.2, 31.2),
            at("Near", 30.01, 31.0),
            at("Middle", 30.1, 31.0),
        ];
        let observed = Coordinate::new_unchecked(30.0, 31.0);
        let nearest = nearest_station(&candidates, &observed).unwrap();
        assert_eq!(nearest.station.name, "Near");
        assert!(nearest.distance_m > 1_000.0 && nearest.distance_m < 1_200.0);
    }

    #[test]
    fn ties_go_to_first() {
        let candidates = [
            at("First", 30.0, 31.0),
            at("Second", 30.0, 31.0),
        ];
        let observed = Coordinate::new_unchecked(30.05, 31.0);
        let nearest = nearest_station(&candidates, &observed).unwrap();
        assert_eq!(nearest.station.name, "First");
    }

    #[test]
    fn exact_position_has_zero_distance() {
        let candidates = [at("A", 30.0, 31.0), at("B", 30.5, 31.5)];
        let observed = Coordinate::new_unchecked(30.5, 31.5);
        let nearest = nearest_station(&candidates, &observed).unwrap();
        assert_eq!(nearest.station.name, "B");
        assert!(nearest.distance_m.abs() < 1e-6);
    }
}
