//! Trip metrics.
//!
//! Pure derivations from a station sequence: how many hops, how long,
//! and which fare band. Nothing here looks at the network.

/// Average travel time between two adjacent stations, in minutes.
pub const MINUTES_PER_STATION: u32 = 2;

/// Fare bands as `(max stations inclusive, fare in EGP)`, ascending.
/// Anything longer than the last band pays [`MAX_FARE`].
pub const FARE_BANDS: [(usize, u32); 2] = [(9, 8), (16, 10)];

/// Fare for trips longer than every band in [`FARE_BANDS`].
pub const MAX_FARE: u32 = 15;

/// Number of hops in a sequence of `len` stations.
pub fn station_count(len: usize) -> usize {
    len.saturating_sub(1)
}

/// Estimated travel time for `station_count` hops.
pub fn estimated_minutes(station_count: usize) -> u32 {
    u32::try_from(station_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(MINUTES_PER_STATION)
}

/// Flat fare for a trip of `station_count` hops.
///
/// # Examples
///
/// ```
/// use metro_server::metrics::fare_for;
///
/// assert_eq!(fare_for(9), 8);
/// assert_eq!(fare_for(10), 10);
/// assert_eq!(fare_for(17), 15);
/// ```
pub fn fare_for(station_count: usize) -> u32 {
    FARE_BANDS
        .iter()
        .find(|(max, _)| station_count <= *max)
        .map(|(_, fare)| *fare)
        .unwrap_or(MAX_FARE)
}

/// Render a duration as "H hr M min", or "M min" under an hour.
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{hours} hr {mins} min")
    } else {
        format!("{mins} min")
    }
}

/// Stations left to ride from `current` to the end of `route`.
///
/// Returns `None` when `current` is not on the route. The count assumes
/// the rider travels in the order the route was recorded; a rider going
/// the other way gets a wrong answer rather than `None`.
pub fn remaining_stations<S: AsRef<str>>(route: &[S], current: &str) -> Option<usize> {
    let index = route.iter().position(|s| s.as_ref() == current)?;
    Some(route.len() - 1 - index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_of_short_sequences() {
        assert_eq!(station_count(0), 0);
        assert_eq!(station_count(1), 0);
        assert_eq!(station_count(2), 1);
        assert_eq!(station_count(35), 34);
    }

    #[test]
    fn minutes_are_two_per_hop() {
        assert_eq!(estimated_minutes(0), 0);
        assert_eq!(estimated_minutes(3), 6);
        assert_eq!(estimated_minutes(34), 68);
    }

    #[test]
    fn fare_band_edges() {
        assert_eq!(fare_for(0), 8);
        assert_eq!(fare_for(1), 8);
        assert_eq!(fare_for(9), 8);
        assert_eq!(fare_for(10), 10);
        assert_eq!(fare_for(16), 10);
        assert_eq!(fare_for(17), 15);
        assert_eq!(fare_for(60), 15);
    }

    #[test]
    fn formatted_time() {
        assert_eq!(format_minutes(0), "0 min");
        assert_eq!(format_minutes(6), "6 min");
        assert_eq!(format_minutes(59), "59 min");
        assert_eq!(format_minutes(60), "1 hr 0 min");
        assert_eq!(format_minutes(68), "1 hr 8 min");
        assert_eq!(format_minutes(125), "2 hr 5 min");
    }

    #[test]
    fn remaining_on_route() {
        let route = ["A", "B", "C", "D"];
        assert_eq!(remaining_stations(&route, "A"), Some(3));
        assert_eq!(remaining_stations(&route, "C"), Some(1));
        assert_eq!(remaining_stations(&route, "D"), Some(0));
    }

    #[test]
    fn remaining_off_route() {
        let route = ["A", "B", "C", "D"];
        assert_eq!(remaining_stations(&route, "Z"), None);
        assert_eq!(remaining_stations::<&str>(&[], "A"), None);
    }

    #[test]
    fn remaining_is_case_sensitive() {
        let route = vec!["Sadat".to_string(), "Opera".to_string()];
        assert_eq!(remaining_stations(&route, "sadat"), None);
        assert_eq!(remaining_stations(&route, "Sadat"), Some(1));
    }
}
