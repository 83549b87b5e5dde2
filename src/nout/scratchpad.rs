//! The scratchpad: one free-form buffer stored under its own key.
//!
//! It has no note identity, belongs to no folder and is untouched by anything
//! that happens to the notes collection. Values are stored as JSON strings so
//! markup and unicode survive byte for byte.

use crate::error::{NoutError, Result};
use crate::store::{KeyValueStore, SCRATCHPAD_KEY};

pub const DEFAULT_SCRATCHPAD: &str = "Welcome to Nout!\n\nThis is your scratchpad. You can write down quick notes here that won't be saved permanently.\n\nFeel free to type anything you want, and it will be saved automatically as you type.";

/// Returns the stored buffer, or `initial` if nothing was ever written.
/// Reading never writes.
pub fn load<S: KeyValueStore>(store: &S, initial: &str) -> Result<String> {
    match store.load(SCRATCHPAD_KEY)? {
        Some(raw) => serde_json::from_str(&raw).map_err(NoutError::Serialization),
        None => Ok(initial.to_string()),
    }
}

pub fn save<S: KeyValueStore>(store: &mut S, text: &str) -> Result<()> {
    let raw = serde_json::to_string(text).map_err(NoutError::Serialization)?;
    store.save(SCRATCHPAD_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn first_read_yields_initial_value_without_writing() {
        let store = InMemoryStore::new();
        assert_eq!(load(&store, DEFAULT_SCRATCHPAD).unwrap(), DEFAULT_SCRATCHPAD);
        assert_eq!(store.raw(SCRATCHPAD_KEY), None);
    }

    #[test]
    fn written_value_round_trips_exactly() {
        let mut store = InMemoryStore::new();
        let text = "<p>\"quoted\" \\ back</p>\n\t✓ 日本語";
        save(&mut store, text).unwrap();
        assert_eq!(load(&store, DEFAULT_SCRATCHPAD).unwrap(), text);
    }

    #[test]
    fn empty_string_is_a_real_value() {
        let mut store = InMemoryStore::new();
        save(&mut store, "").unwrap();
        assert_eq!(load(&store, DEFAULT_SCRATCHPAD).unwrap(), "");
    }

    #[test]
    fn corrupt_value_is_a_persistence_error() {
        let store = InMemoryStore::new().with_value(SCRATCHPAD_KEY, "not json");
        let err = load(&store, "").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Persistence);
    }
}
