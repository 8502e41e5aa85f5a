//! Test-only in-memory implementation of the store contract.

use std::cell::RefCell;

use anyhow::Result;
use serde_json::{Map, Value};

use crate::store::{Store, set_at, value_at};

/// In-process [`Store`] holding one JSON document behind a `RefCell`.
///
/// Single-threaded by construction, which matches how the bot uses its store.
/// `root()` exposes a snapshot so tests can assert on the exact persisted
/// layout.
#[derive(Debug)]
pub struct MemoryStore {
    root: RefCell<Value>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Empty store (root is an empty object).
    pub fn new() -> Self {
        Self {
            root: RefCell::new(Value::Object(Map::new())),
        }
    }

    /// Store pre-seeded with `root`, for repair-path tests.
    pub fn with_root(root: Value) -> Self {
        Self {
            root: RefCell::new(root),
        }
    }

    /// Snapshot of the whole stored document.
    pub fn root(&self) -> Value {
        self.root.borrow().clone()
    }
}

impl Store for MemoryStore {
    fn get(&self, path: &[&str]) -> Result<Value> {
        Ok(value_at(&self.root.borrow(), path))
    }

    fn set(&self, path: &[&str], value: Value) -> Result<()> {
        set_at(&mut self.root.borrow_mut(), path, value);
        Ok(())
    }
}
