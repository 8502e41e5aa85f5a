//! Path-addressed document store contract and the JSON-file implementation.
//!
//! The bot keeps all durable state in one JSON document. Components never see
//! the file; they address values by a path of object keys through [`Store`]
//! and the store owns loading, navigation, and atomic writes.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::debug;

/// Path-addressed access to a shared document store.
///
/// A path is a sequence of object keys from the root; the empty path
/// addresses the root itself. Reads of absent paths yield `Value::Null`,
/// writes create missing intermediate objects. Implementations take `&self`
/// so one store can back many views at once.
pub trait Store {
    /// Read the value at `path`, or `Value::Null` when nothing is stored there.
    fn get(&self, path: &[&str]) -> Result<Value>;

    /// Replace the value at `path`, creating intermediate objects as needed.
    fn set(&self, path: &[&str], value: Value) -> Result<()>;
}

/// Walk `path` through nested objects, cloning the value found there.
///
/// Any missing key or non-object intermediate resolves to `Value::Null`.
pub(crate) fn value_at(root: &Value, path: &[&str]) -> Value {
    let mut current = root;
    for segment in path {
        match current.get(segment) {
            Some(next) => current = next,
            None => return Value::Null,
        }
    }
    current.clone()
}

/// Write `value` at `path` inside `slot`, replacing non-object intermediates
/// with fresh objects along the way.
pub(crate) fn set_at(slot: &mut Value, path: &[&str], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        *slot = value;
        return;
    };
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    if let Value::Object(map) = slot {
        let child = map.entry(first.to_string()).or_insert(Value::Null);
        set_at(child, rest, value);
    }
}

/// Store backed by a single JSON document file.
///
/// Every access re-reads the file and every write replaces it atomically
/// (temp file + rename), so the file is the only copy of the state and
/// concurrent readers never observe a partial write. A missing file reads as
/// an empty object; nothing is created on disk until the first write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing document file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_root(&self) -> Result<Value> {
        if !self.path.exists() {
            return Ok(Value::Object(Map::new()));
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("read database {}", self.path.display()))?;
        let root: Value = serde_json::from_str(&contents)
            .with_context(|| format!("parse database {}", self.path.display()))?;
        Ok(root)
    }

    /// Atomically write the whole document to disk (temp file + rename).
    fn write_root(&self, root: &Value) -> Result<()> {
        let mut buf = serde_json::to_string_pretty(root)?;
        buf.push('\n');
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, buf)
            .with_context(|| format!("write temp database {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("replace database {}", self.path.display()))?;
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn get(&self, path: &[&str]) -> Result<Value> {
        let root = self.load_root()?;
        Ok(value_at(&root, path))
    }

    fn set(&self, path: &[&str], value: Value) -> Result<()> {
        debug!(path = ?path, file = %self.path.display(), "writing store value");
        let mut root = self.load_root()?;
        set_at(&mut root, path, value);
        self.write_root(&root)
    }
}
