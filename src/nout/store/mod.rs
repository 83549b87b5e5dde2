//! # Storage Layer
//!
//! Persistence is a plain key-value contract: a value is loaded or saved as a
//! whole string under a string key. The engine uses exactly two keys:
//!
//! - [`COLLECTION_KEY`]: the whole notes/folders collection as JSON
//! - [`SCRATCHPAD_KEY`]: the scratchpad buffer as a JSON string
//!
//! Keeping the contract this small means the engine never depends on how or
//! where bytes end up, and lets tests swap in [`memory::InMemoryStore`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one `<key>.json` file per key inside a data directory,
//!   replaced atomically (temp file + rename) on every save.
//! - [`memory::InMemoryStore`]: a map in memory, with a switch to simulate
//!   failing writes.
//!
//! ```text
//! ~/.local/share/nout/
//! ├── notes.json        # {"notes": {...}, "folders": {...}}
//! ├── scratchpad.json   # "Welcome to Nout! ..."
//! └── config.json       # see config.rs
//! ```

use crate::error::{NoutError, Result};

pub mod fs;
pub mod memory;

pub const COLLECTION_KEY: &str = "notes";
pub const SCRATCHPAD_KEY: &str = "scratchpad";

/// Abstract key-value interface for persisted state.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when nothing was ever saved under `key`.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value under `key`. Either the whole value is stored or the
    /// previous value stays in place.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Keys end up in file names, so they are restricted to a safe alphabet.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(NoutError::Store(format!("Invalid store key: {:?}", key)))
    }
}
