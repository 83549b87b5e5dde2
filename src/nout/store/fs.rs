use super::{validate_key, KeyValueStore};
use crate::error::{NoutError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed store: each key is a `<key>.json` file under `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NoutError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(NoutError::Io)?;
        Ok(Some(content))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.ensure_dir()?;

        // Write next to the target, then rename over it.
        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, value) {
            let _ = fs::remove_file(&tmp_file);
            return Err(NoutError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_file, self.path_for(key)) {
            let _ = fs::remove_file(&tmp_file);
            return Err(NoutError::Io(e));
        }
        Ok(())
    }
}
