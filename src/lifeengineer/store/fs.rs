use super::KeyValueStore;
use crate::error::{CmsError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-based storage: each key maps to `<root>/<key>.json`.
///
/// Writes go to a temp file first and are renamed into place, so readers
/// never observe a partially written value.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Open a store at the platform data directory for the site.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(default_root()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CmsError::Io)?;
        }
        Ok(())
    }
}

/// Platform data directory for the site's content store.
pub fn default_root() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "lifeengineer", "lifeengineer-cms")
        .ok_or_else(|| CmsError::Store("Could not determine a data directory".to_string()))?;
    Ok(dirs.data_dir().to_path_buf())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(CmsError::Io(err)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;

        // Atomic write: tmp then rename
        let tmp = self.root.join(format!(".{}-{}.tmp", key, std::process::id()));
        fs::write(&tmp, value).map_err(CmsError::Io)?;
        fs::rename(&tmp, self.key_path(key)).map_err(CmsError::Io)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(CmsError::Io(err)),
        }
    }
}
