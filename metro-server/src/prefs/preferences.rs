//! Rider preferences: favourite routes, recent searches and settings.
//!
//! Lists are stored JSON-encoded under a single key each. Every change
//! reads the whole list, edits it in memory and writes it back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::SavedRoute;

use super::error::PrefsError;
use super::store::KeyValueStore;

const KEY_FAVORITES: &str = "favorite_routes";
const KEY_RECENT_SEARCHES: &str = "recent_searches";
const KEY_LANGUAGE: &str = "language";
const KEY_THEME: &str = "theme";

/// Most favourites kept; older ones fall off the end.
pub const MAX_FAVORITES: usize = 20;

/// Most recent searches kept.
pub const MAX_RECENT_SEARCHES: usize = 10;

/// Interface language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// The other language.
    pub const fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unsupported language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Encode a route list in the stored record format.
pub fn encode_routes(routes: &[SavedRoute]) -> Result<String, PrefsError> {
    Ok(serde_json::to_string(routes)?)
}

/// Decode a stored route list.
pub fn decode_routes(key: &str, json: &str) -> Result<Vec<SavedRoute>, PrefsError> {
    serde_json::from_str(json).map_err(|e| PrefsError::Corrupt {
        key: key.to_string(),
        message: e.to_string(),
    })
}

/// Preferences over any [`KeyValueStore`].
pub struct Preferences {
    store: Box<dyn KeyValueStore + Send + Sync>,
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preferences").finish_non_exhaustive()
    }
}

impl Preferences {
    pub fn new(store: impl KeyValueStore + Send + Sync + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    /// Interface language; English until set.
    pub fn language(&self) -> Result<Language, PrefsError> {
        match self.store.get(KEY_LANGUAGE)? {
            None => Ok(Language::default()),
            Some(code) => code.parse().map_err(|e: UnknownLanguage| PrefsError::Corrupt {
                key: KEY_LANGUAGE.to_string(),
                message: e.to_string(),
            }),
        }
    }

    pub fn set_language(&mut self, language: Language) -> Result<(), PrefsError> {
        self.store.put(KEY_LANGUAGE, language.code().to_string())
    }

    /// Switch between English and Arabic, returning the new language.
    pub fn toggle_language(&mut self) -> Result<Language, PrefsError> {
        let next = self.language()?.toggled();
        self.set_language(next)?;
        Ok(next)
    }

    pub fn is_dark_mode(&self) -> Result<bool, PrefsError> {
        match self.store.get(KEY_THEME)? {
            None => Ok(false),
            Some(value) => value.parse().map_err(|_| PrefsError::Corrupt {
                key: KEY_THEME.to_string(),
                message: format!("expected true or false, got {value:?}"),
            }),
        }
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<(), PrefsError> {
        self.store.put(KEY_THEME, enabled.to_string())
    }

    // ------------------------------------------------------------------
    // Favourites
    // ------------------------------------------------------------------

    /// Favourite routes, newest first.
    pub fn favorites(&self) -> Result<Vec<SavedRoute>, PrefsError> {
        self.read_routes(KEY_FAVORITES)
    }

    /// Save a favourite at the front of the list.
    ///
    /// Returns `false` (and changes nothing) if the start/end pair is
    /// already a favourite.
    pub fn add_favorite(
        &mut self,
        start: &str,
        end: &str,
        nickname: Option<&str>,
    ) -> Result<bool, PrefsError> {
        let mut favorites = self.favorites()?;
        if favorites.iter().any(|r| r.is_between(start, end)) {
            return Ok(false);
        }

        favorites.insert(0, SavedRoute::new(start, end, nickname));
        favorites.truncate(MAX_FAVORITES);
        self.write_routes(KEY_FAVORITES, &favorites)?;

        debug!(start, end, "added favourite");
        Ok(true)
    }

    /// Remove a favourite. Returns whether anything was removed.
    pub fn remove_favorite(&mut self, start: &str, end: &str) -> Result<bool, PrefsError> {
        let mut favorites = self.favorites()?;
        let before = favorites.len();
        favorites.retain(|r| !r.is_between(start, end));
        if favorites.len() == before {
            return Ok(false);
        }

        self.write_routes(KEY_FAVORITES, &favorites)?;
        Ok(true)
    }

    pub fn is_favorite(&self, start: &str, end: &str) -> Result<bool, PrefsError> {
        Ok(self.favorites()?.iter().any(|r| r.is_between(start, end)))
    }

    // ------------------------------------------------------------------
    // Recent searches
    // ------------------------------------------------------------------

    /// Recent searches, newest first.
    pub fn recent_searches(&self) -> Result<Vec<SavedRoute>, PrefsError> {
        self.read_routes(KEY_RECENT_SEARCHES)
    }

    /// Record a search, moving a repeated pair back to the front.
    pub fn add_recent_search(&mut self, start: &str, end: &str) -> Result<(), PrefsError> {
        let mut recent = self.recent_searches()?;
        recent.retain(|r| !r.is_between(start, end));
        recent.insert(0, SavedRoute::new(start, end, None));
        recent.truncate(MAX_RECENT_SEARCHES);
        self.write_routes(KEY_RECENT_SEARCHES, &recent)
    }

    pub fn clear_recent_searches(&mut self) -> Result<(), PrefsError> {
        self.write_routes(KEY_RECENT_SEARCHES, &[])
    }

    fn read_routes(&self, key: &str) -> Result<Vec<SavedRoute>, PrefsError> {
        match self.store.get(key)? {
            None => Ok(Vec::new()),
            Some(json) => decode_routes(key, &json),
        }
    }

    fn write_routes(&mut self, key: &str, routes: &[SavedRoute]) -> Result<(), PrefsError> {
        let json = encode_routes(routes)?;
        self.store.put(key, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{FileStore, MemoryStore};
    use tempfile::tempdir;

    fn prefs() -> Preferences {
        Preferences::new(MemoryStore::new())
    }

    fn pairs(routes: &[SavedRoute]) -> Vec<(&str, &str)> {
        routes
            .iter()
            .map(|r| (r.start_station.as_str(), r.end_station.as_str()))
            .collect()
    }

    #[test]
    fn language_defaults_and_toggles() {
        let mut p = prefs();
        assert_eq!(p.language().unwrap(), Language::En);

        assert_eq!(p.toggle_language().unwrap(), Language::Ar);
        assert_eq!(p.language().unwrap(), Language::Ar);

        assert_eq!(p.toggle_language().unwrap(), Language::En);
    }

    #[test]
    fn language_parse() {
        assert_eq!("AR".parse::<Language>(), Ok(Language::Ar));
        assert_eq!(" en ".parse::<Language>(), Ok(Language::En));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn corrupt_language_is_reported() {
        let mut store = MemoryStore::new();
        store.put(KEY_LANGUAGE, "klingon".into()).unwrap();
        let p = Preferences::new(store);
        assert!(matches!(p.language(), Err(PrefsError::Corrupt { .. })));
    }

    #[test]
    fn dark_mode() {
        let mut p = prefs();
        assert!(!p.is_dark_mode().unwrap());
        p.set_dark_mode(true).unwrap();
        assert!(p.is_dark_mode().unwrap());
    }

    #[test]
    fn favorites_newest_first_without_duplicates() {
        let mut p = prefs();
        assert!(p.add_favorite("Helwan", "Sadat", Some("work")).unwrap());
        assert!(p.add_favorite("Giza", "Attaba", None).unwrap());
        assert!(!p.add_favorite("Helwan", "Sadat", Some("again")).unwrap());

        let favorites = p.favorites().unwrap();
        assert_eq!(pairs(&favorites), [("Giza", "Attaba"), ("Helwan", "Sadat")]);
        assert_eq!(favorites[1].nickname, "work");
        assert!(p.is_favorite("Helwan", "Sadat").unwrap());
        assert!(!p.is_favorite("Sadat", "Helwan").unwrap());
    }

    #[test]
    fn favorites_capped() {
        let mut p = prefs();
        for i in 0..(MAX_FAVORITES + 5) {
            p.add_favorite(&format!("S{i}"), "End", None).unwrap();
        }

        let favorites = p.favorites().unwrap();
        assert_eq!(favorites.len(), MAX_FAVORITES);
        assert_eq!(favorites[0].start_station, format!("S{}", MAX_FAVORITES + 4));
        assert!(!p.is_favorite("S0", "End").unwrap());
    }

    #[test]
    fn remove_favorite() {
        let mut p = prefs();
        p.add_favorite("Helwan", "Sadat", None).unwrap();

        assert!(p.remove_favorite("Helwan", "Sadat").unwrap());
        assert!(!p.remove_favorite("Helwan", "Sadat").unwrap());
        assert!(p.favorites().unwrap().is_empty());
    }

    #[test]
    fn recent_searches_move_to_front() {
        let mut p = prefs();
        p.add_recent_search("A", "B").unwrap();
        p.add_recent_search("C", "D").unwrap();
        p.add_recent_search("A", "B").unwrap();

        let recent = p.recent_searches().unwrap();
        assert_eq!(pairs(&recent), [("A", "B"), ("C", "D")]);
    }

    #[test]
    fn recent_searches_capped_and_cleared() {
        let mut p = prefs();
        for i in 0..(MAX_RECENT_SEARCHES + 3) {
            p.add_recent_search(&format!("S{i}"), "End").unwrap();
        }
        assert_eq!(p.recent_searches().unwrap().len(), MAX_RECENT_SEARCHES);

        p.clear_recent_searches().unwrap();
        assert!(p.recent_searches().unwrap().is_empty());
    }

    #[test]
    fn corrupt_list_is_reported() {
        let mut store = MemoryStore::new();
        store.put(KEY_FAVORITES, "{not json".into()).unwrap();
        let p = Preferences::new(store);

        match p.favorites() {
            Err(PrefsError::Corrupt { key, .. }) => assert_eq!(key, KEY_FAVORITES),
            other => panic!("expected corrupt error, got {other:?}"),
        }
    }

    #[test]
    fn stored_format_is_record_list() {
        let mut store = MemoryStore::new();
        store
            .put(
                KEY_RECENT_SEARCHES,
                r#"[{"startStation":"Giza","endStation":"Opera","nickname":"","timestampMillis":42}]"#
                    .into(),
            )
            .unwrap();
        let p = Preferences::new(store);

        let recent = p.recent_searches().unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].timestamp_millis, 42);
        assert_eq!(recent[0].display_name(), "Giza → Opera");
    }

    #[test]
    fn encode_decode_pair() {
        let routes = vec![SavedRoute::at("A", "B", Some("x"), 7)];
        let json = encode_routes(&routes).unwrap();
        assert!(json.contains("\"startStation\":\"A\""));

        let decoded = decode_routes(KEY_FAVORITES, &json).unwrap();
        assert_eq!(decoded, routes);
        assert_eq!(decoded[0].nickname, "x");
    }

    #[test]
    fn failed_save_can_be_retried() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        let path = blocker.join("prefs.json");

        let mut p = Preferences::new(FileStore::open(&path).unwrap());
        std::fs::write(&blocker, "").unwrap();

        assert!(p.add_favorite("Helwan", "Sadat", None).is_err());
        assert!(!p.is_favorite("Helwan", "Sadat").unwrap());

        std::fs::remove_file(&blocker).unwrap();
        assert!(p.add_favorite("Helwan", "Sadat", None).unwrap());

        let reopened = Preferences::new(FileStore::open(&path).unwrap());
        assert!(reopened.is_favorite("Helwan", "Sadat").unwrap());
    }

    #[test]
    fn file_backed_preferences_survive_restart() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        {
            let mut p = Preferences::new(FileStore::open(&path).unwrap());
            p.add_favorite("Helwan", "Sadat", Some("work")).unwrap();
            p.set_language(Language::Ar).unwrap();
        }

        let p = Preferences::new(FileStore::open(&path).unwrap());
        assert!(p.is_favorite("Helwan", "Sadat").unwrap());
        assert_eq!(p.language().unwrap(), Language::Ar);
    }
}
