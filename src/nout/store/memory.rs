use super::{validate_key, KeyValueStore};
use crate::error::{NoutError, Result};
use std::cell::Cell;
use std::collections::HashMap;

/// In-memory store for tests and embedding.
///
/// The write-failure switch is a `Cell` so it can be flipped through a shared
/// reference while the engine owns the store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    simulate_write_error: Cell<bool>,
    writes: Cell<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing validation and failure simulation.
    pub fn with_value(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful saves so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for InMemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        if self.simulate_write_error.get() {
            return Err(NoutError::Store("Simulated write error".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
