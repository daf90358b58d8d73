//! Directory of recorded interactions, one JSON file per URL.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::format::CachedInteraction;
use super::key::safe_filename;
use crate::error::{Error, Result};

/// Reads and writes recorded interactions under a single directory.
///
/// There is no locking: two processes writing the same URL race and the
/// last write wins.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory of the store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds the interaction for `url`.
    #[must_use]
    pub fn path_for(&self, url: &str) -> PathBuf {
        self.dir.join(safe_filename(url))
    }

    /// Write `interaction`, replacing any earlier one for the same URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, interaction: &CachedInteraction) -> Result<PathBuf> {
        let path = self.path_for(&interaction.url);
        let json = serde_json::to_string(interaction)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, json)?;
        debug!(url = %interaction.url, path = %path.display(), "recorded interaction");
        Ok(path)
    }

    /// Read the interaction recorded for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CacheMiss`] if nothing was recorded, or an error if
    /// the file cannot be read or parsed.
    pub fn load(&self, url: &str) -> Result<CachedInteraction> {
        let path = self.path_for(url);
        debug!(url, path = %path.display(), "loading recorded interaction");
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::CacheMiss { url: url.to_string(), path });
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CachedResponse;
    use crate::ports::HttpRequest;
    use serde_json::json;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path());

        let request = HttpRequest::get("https://bmc/org/openbmc/control/flash/bios", false);
        let response = CachedResponse::new(200, json!({"data": {"version": "2.1"}})).unwrap();
        let interaction = CachedInteraction::capture(&request, &response);

        let path = store.save(&interaction).unwrap();
        assert_eq!(path, dir.path().join(safe_filename(&request.url)));
        assert_eq!(store.load(&request.url).unwrap(), interaction);
    }

    #[test]
    fn last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path());
        let request = HttpRequest::get("https://bmc/x", false);

        for n in 1..=2 {
            let response = CachedResponse::new(200, json!({"data": n})).unwrap();
            store.save(&CachedInteraction::capture(&request, &response)).unwrap();
        }

        assert_eq!(store.load("https://bmc/x").unwrap().json_struct, json!({"data": 2}));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_file_is_a_cache_miss() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path());
        assert!(matches!(store.load("https://bmc/login"), Err(Error::CacheMiss { .. })));
    }

    #[test]
    fn save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().join("nested").join("cache"));
        let request = HttpRequest::get("https://bmc/x", false);
        let response = CachedResponse::new(200, json!({"data": null})).unwrap();
        store.save(&CachedInteraction::capture(&request, &response)).unwrap();
        assert!(store.dir().is_dir());
    }
}
