//! Local preference storage.
//!
//! Favourite routes, recent searches and interface settings, kept in a
//! simple string key-value namespace. The server uses a JSON file; tests
//! use an in-memory map.

mod error;
mod preferences;
mod store;

pub use error::PrefsError;
pub use preferences::{
    Language, MAX_FAVORITES, MAX_RECENT_SEARCHES, Preferences, UnknownLanguage, decode_routes,
    encode_routes,
};
pub use store::{FileStore, KeyValueStore, MemoryStore};
