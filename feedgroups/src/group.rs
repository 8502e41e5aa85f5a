//! Per-group view over the shared document store.
//!
//! A group collects feed names whose submissions share a theme ("art",
//! "tech", ...) together with a pool of comment texts the bot may post on any
//! submission from those feeds. [`GroupStore`] binds one group name to an
//! injected [`Store`] and keeps the stored document well-shaped; it caches
//! nothing, so every operation round-trips to the store.

use std::collections::BTreeSet;
use std::slice;

use anyhow::{Result, bail};
use serde_json::{Map, Value};
use tracing::debug;

use crate::normalize::{normalize, normalize_all};
use crate::store::Store;

/// Top-level namespace segment for all group documents.
const NAMESPACE: &str = "subreddits";
/// Namespace segment under which each group document lives by name.
const GROUPS_KEY: &str = "groups";
/// Stored field key for the feed set. This is the legacy `subreddits` name,
/// the same word as the namespace segment above; both spellings are part of
/// the persisted schema.
const FEEDS_KEY: &str = "subreddits";
/// Stored field key for the comment set.
const COMMENTS_KEY: &str = "comments";

/// View of one named group inside a shared store.
///
/// Binding repairs the stored document shape (both field keys present as
/// arrays), so reads never observe a missing field in practice. The
/// `add_feeds`/`add_comments` operations are read-modify-write without any
/// locking: two concurrent writers to the same field can lose an update
/// (last write wins at full-field granularity). Serializing writers, when it
/// matters, is the caller's job.
pub struct GroupStore<'a, S: Store + ?Sized> {
    store: &'a S,
    name: String,
}

impl<'a, S: Store + ?Sized> GroupStore<'a, S> {
    /// Bind to the group called `name`, creating or repairing its document.
    ///
    /// A missing or non-object stored value is replaced with a fresh document
    /// carrying both fields empty. An object merely missing a field gets that
    /// field filled with an empty array while unrelated keys are preserved.
    /// The repaired document is written back even when nothing changed.
    pub fn bind(store: &'a S, name: impl Into<String>) -> Result<Self> {
        let group = Self {
            store,
            name: name.into(),
        };
        group.repair()?;
        Ok(group)
    }

    /// The group's name, fixed at bind time. Usually the common theme of its
    /// feeds: "art", "tech", "news", ...
    pub fn name(&self) -> &str {
        &self.name
    }

    fn doc_path(&self) -> [&str; 3] {
        [NAMESPACE, GROUPS_KEY, self.name.as_str()]
    }

    fn field_path(&self, key: &'static str) -> [&str; 4] {
        [NAMESPACE, GROUPS_KEY, self.name.as_str(), key]
    }

    fn repair(&self) -> Result<()> {
        let stored = self.store.get(&self.doc_path())?;
        let mut doc = match stored {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for key in [FEEDS_KEY, COMMENTS_KEY] {
            doc.entry(key).or_insert_with(|| Value::Array(Vec::new()));
        }
        debug!(group = %self.name, "ensured group document shape");
        self.store.set(&self.doc_path(), Value::Object(doc))
    }

    // - - feeds - - //

    /// The feed names in this group, without any source-site prefix.
    pub fn feeds(&self) -> Result<BTreeSet<String>> {
        self.read_field(FEEDS_KEY)
    }

    /// Replace the group's feed set with the strings found in `values`.
    ///
    /// Accepts any mix of strings and nested arrays; non-string leaves are
    /// dropped silently. Fully overwrites the stored field.
    pub fn set_feeds(&self, values: &[Value]) -> Result<()> {
        self.write_field(FEEDS_KEY, normalize_all(values))
    }

    /// Add the strings found in `values` to the group's feed set.
    pub fn add_feeds(&self, values: &[Value]) -> Result<()> {
        self.extend_field(FEEDS_KEY, values)
    }

    /// Add exactly one feed name. Unlike [`add_feeds`](Self::add_feeds), a
    /// non-string value is an error here rather than silently dropped.
    pub fn add_feed(&self, value: &Value) -> Result<()> {
        if !value.is_string() {
            bail!("feed name must be a string (got {value})");
        }
        self.add_feeds(slice::from_ref(value))
    }

    // - - comments - - //

    /// The candidate comment texts attached to this group.
    pub fn comments(&self) -> Result<BTreeSet<String>> {
        self.read_field(COMMENTS_KEY)
    }

    /// Replace the group's comment set with the strings found in `values`.
    ///
    /// Same input handling as [`set_feeds`](Self::set_feeds).
    pub fn set_comments(&self, values: &[Value]) -> Result<()> {
        self.write_field(COMMENTS_KEY, normalize_all(values))
    }

    /// Add the strings found in `values` to the group's comment set.
    pub fn add_comments(&self, values: &[Value]) -> Result<()> {
        self.extend_field(COMMENTS_KEY, values)
    }

    /// Add exactly one comment text. A non-string value is an error.
    pub fn add_comment(&self, value: &Value) -> Result<()> {
        if !value.is_string() {
            bail!("comment must be a string (got {value})");
        }
        self.add_comments(slice::from_ref(value))
    }

    // - - shared field plumbing - - //

    fn read_field(&self, key: &'static str) -> Result<BTreeSet<String>> {
        let stored = self.store.get(&self.field_path(key))?;
        Ok(normalize(&stored))
    }

    fn write_field(&self, key: &'static str, values: BTreeSet<String>) -> Result<()> {
        debug!(group = %self.name, key, count = values.len(), "writing group field");
        let items = values.into_iter().map(Value::String).collect();
        self.store.set(&self.field_path(key), Value::Array(items))
    }

    fn extend_field(&self, key: &'static str, values: &[Value]) -> Result<()> {
        let mut merged = self.read_field(key)?;
        merged.extend(normalize_all(values));
        self.write_field(key, merged)
    }
}

/// Names of every group present in `store`, sorted.
///
/// Empty when the group namespace is absent or malformed.
pub fn group_names<S: Store + ?Sized>(store: &S) -> Result<Vec<String>> {
    let stored = store.get(&[NAMESPACE, GROUPS_KEY])?;
    let mut names: Vec<String> = match stored {
        Value::Object(map) => map.keys().cloned().collect(),
        _ => Vec::new(),
    };
    names.sort();
    Ok(names)
}
