use crate::error::{NoutError, Result};
use crate::scratchpad::DEFAULT_SCRATCHPAD;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIST_WIDTH: usize = 72;

/// Configuration for nout, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoutConfig {
    /// Text shown in the scratchpad before anything has been written to it
    #[serde(default = "default_scratchpad_initial")]
    pub scratchpad_initial: String,

    /// Column budget for note labels in listings
    #[serde(default = "default_list_width")]
    pub list_width: usize,
}

fn default_scratchpad_initial() -> String {
    DEFAULT_SCRATCHPAD.to_string()
}

fn default_list_width() -> usize {
    DEFAULT_LIST_WIDTH
}

impl Default for NoutConfig {
    fn default() -> Self {
        Self {
            scratchpad_initial: default_scratchpad_initial(),
            list_width: DEFAULT_LIST_WIDTH,
        }
    }
}

impl NoutConfig {
    /// Reads `config.json` from the data directory. A directory without one
    /// yields the defaults; missing fields fall back individually.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let path = data_dir.as_ref().join(CONFIG_FILENAME);
        if !path.exists() {
            tracing::trace!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path).map_err(NoutError::Io)?;
        serde_json::from_str(&raw).map_err(NoutError::Serialization)
    }

    /// Writes `config.json` through a temp file and a rename, creating the
    /// data directory if needed.
    pub fn save<P: AsRef<Path>>(&self, data_dir: P) -> Result<()> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir).map_err(NoutError::Io)?;

        let raw = serde_json::to_string_pretty(self).map_err(NoutError::Serialization)?;
        let tmp = data_dir.join(format!(".{}.{}.tmp", CONFIG_FILENAME, Uuid::new_v4()));
        let written = fs::write(&tmp, raw)
            .and_then(|_| fs::rename(&tmp, data_dir.join(CONFIG_FILENAME)));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(NoutError::Io(e));
        }
        tracing::debug!(dir = %data_dir.display(), "config saved");
        Ok(())
    }

    /// Sets the listing width; anything below 10 columns is rejected.
    pub fn set_list_width(&mut self, width: usize) -> Result<()> {
        if width < 10 {
            return Err(NoutError::Validation(format!(
                "List width must be at least 10 columns, got {}",
                width
            )));
        }
        self.list_width = width;
        Ok(())
    }
}
