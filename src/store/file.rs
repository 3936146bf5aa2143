//! JSON-file-backed workspace store.
//!
//! Keeps one JSON object per workspace on disk and rewrites it on every
//! update. Writes are atomic (temp file then rename) so the backing file
//! is never left in a partially written state.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use super::WorkspaceStore;

/// Durable workspace store backed by a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileStore {
    /// Opens (or initializes) the store at `path`.
    ///
    /// A missing file yields an empty store. An unreadable file or one
    /// whose contents are not a JSON object is treated as empty with a
    /// warning; the corrupted contents are replaced on the next update.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create store directory")?;
        }

        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Value>(&contents) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    log::warn!(
                        "store file {} is not a JSON object, starting empty",
                        path.display()
                    );
                    Map::new()
                }
                Err(err) => {
                    log::warn!(
                        "store file {} is not valid JSON ({}), starting empty",
                        path.display(),
                        err
                    );
                    Map::new()
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    log::warn!(
                        "could not read store file {} ({}), starting empty",
                        path.display(),
                        err
                    );
                }
                Map::new()
            }
        };

        Ok(Self { path, values })
    }

    /// Default store path for a named workspace, under the platform data
    /// directory (e.g. `~/.local/share/filetrail/<workspace>.json`).
    pub fn default_path(workspace: &str) -> Option<PathBuf> {
        dirs::data_dir().map(|mut path| {
            path.push("filetrail");
            path.push(format!("{workspace}.json"));
            path
        })
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&Value::Object(self.values.clone()))
            .context("Failed to serialize store contents")?;

        let mut temp_path = self.path.clone();
        temp_path.set_extension("json.tmp");

        fs::write(&temp_path, contents).context("Failed to write store temp file")?;
        fs::rename(&temp_path, &self.path).context("Failed to replace store file")?;
        Ok(())
    }
}

impl WorkspaceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn update(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);

        // The store contract is non-failing; a write error is logged and
        // the in-memory copy stays authoritative for this session.
        if let Err(err) = self.flush() {
            log::error!("failed to persist {}: {err:#}", self.path.display());
        }
    }
}
