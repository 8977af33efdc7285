//! File-backed session store
//!
//! All keys live in one JSON object (`storage.json`) inside the Greenify
//! directory, the local equivalent of a browser profile's storage:
//! ```json
//! { "ecoUser": "{\"name\":\"Leyla\",...}", "theme": "dark", "language": "az" }
//! ```
//! Writers take an exclusive lock on `storage.lock` and replace the file by
//! atomic rename, so a crash mid-write never leaves a truncated file and two
//! CLI processes cannot interleave read-modify-write cycles.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::domain::result::{Error, Result};
use crate::ports::SessionStore;

const STORAGE_FILE: &str = "storage.json";
const LOCK_FILE: &str = "storage.lock";

pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Open (or lazily create) the store in `dir`
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Path of the JSON file holding all keys
    pub fn path(&self) -> PathBuf {
        self.dir.join(STORAGE_FILE)
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let path = self.path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path)?;
        // An unreadable file is treated like empty storage, the same way a
        // browser hands back nothing for a cleared profile.
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let content = serde_json::to_string_pretty(values)?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.path()).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }

    /// Run a read-modify-write cycle under the writer lock
    fn update<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let lock = self.lock_file()?;
        lock.lock_exclusive()?;

        let result = self.read_all().and_then(|mut values| {
            change(&mut values);
            self.write_all(&values)
        });

        // Dropping `lock` releases the flock.
        drop(lock);
        result
    }

    fn lock_file(&self) -> Result<File> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.dir.join(LOCK_FILE))?;
        Ok(file)
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.update(|values| {
            values.insert(key.to_string(), value.to_string());
        })
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|values| {
            values.remove(key);
        })
    }
}
