//! Saved (favourite or recent) routes.

use std::hash::{Hash, Hasher};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A start/end pair the rider saved or searched for.
///
/// Two saved routes are equal when they share start and end stations;
/// nickname and timestamp are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRoute {
    pub start_station: String,
    pub end_station: String,
    #[serde(default)]
    pub nickname: String,
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp_millis: i64,
}

impl SavedRoute {
    /// A route saved now.
    pub fn new(
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        nickname: Option<&str>,
    ) -> Self {
        Self::at(
            start_station,
            end_station,
            nickname,
            Utc::now().timestamp_millis(),
        )
    }

    /// A route saved at a given time.
    pub fn at(
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        nickname: Option<&str>,
        timestamp_millis: i64,
    ) -> Self {
        Self {
            start_station: start_station.into(),
            end_station: end_station.into(),
            nickname: nickname.unwrap_or_default().to_string(),
            timestamp_millis,
        }
    }

    /// Whether this route goes from `start` to `end`.
    pub fn is_between(&self, start: &str, end: &str) -> bool {
        self.start_station == start && self.end_station == end
    }

    /// Label for lists: the nickname, or "start → end".
    pub fn display_name(&self) -> String {
        if self.nickname.is_empty() {
            format!("{} → {}", self.start_station, self.end_station)
        } else {
            self.nickname.clone()
        }
    }
}

impl PartialEq for SavedRoute {
    fn eq(&self, other: &Self) -> bool {
        self.start_station == other.start_station && self.end_station == other.end_station
    }
}

impl Eq for SavedRoute {}

impl Hash for SavedRoute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start_station.hash(state);
        self.end_station.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_nickname_and_time() {
        let a = SavedRoute::at("Helwan", "Sadat", Some("work"), 1);
        let b = SavedRoute::at("Helwan", "Sadat", None, 2);
        let c = SavedRoute::at("Sadat", "Helwan", Some("work"), 1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_name() {
        let named = SavedRoute::at("Helwan", "Sadat", Some("work"), 0);
        assert_eq!(named.display_name(), "work");

        let unnamed = SavedRoute::at("Helwan", "Sadat", None, 0);
        assert_eq!(unnamed.display_name(), "Helwan → Sadat");
    }

    #[test]
    fn record_schema() {
        let route = SavedRoute::at("Helwan", "Sadat", Some("work"), 1_700_000_000_000);
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "startStation": "Helwan",
                "endStation": "Sadat",
                "nickname": "work",
                "timestampMillis": 1_700_000_000_000_i64,
            })
        );
    }

    #[test]
    fn missing_nickname_defaults_to_empty() {
        let route: SavedRoute = serde_json::from_str(
            r#"{"startStation":"A","endStation":"B","timestampMillis":5}"#,
        )
        .unwrap();
        assert_eq!(route.nickname, "");
        assert_eq!(route.timestamp_millis, 5);
    }

    #[test]
    fn new_stamps_current_time() {
        let before = Utc::now().timestamp_millis();
        let route = SavedRoute::new("A", "B", None);
        assert!(route.timestamp_millis >= before);
        assert!(route.is_between("A", "B"));
        assert!(!route.is_between("B", "A"));
    }
}
