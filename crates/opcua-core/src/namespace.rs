//! Namespace table: the per-endpoint mapping between namespace URIs and the
//! small indices carried in every [`NodeId`](crate::NodeId).
//!
//! Index 0 is always the OPC UA base namespace. Other URIs receive the lowest
//! free index when added. All operations take one table-wide lock; namespace
//! changes are rare, so contention is not a concern.

use std::collections::BTreeMap;

use log::{debug, warn};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::error::NamespaceError;
use crate::identifiers::OPC_UA_NAMESPACE;
use crate::limits::MAX_NAMESPACE_ENTRIES;

/// Options for constructing a [`NamespaceTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceTableOptions {
    /// Maximum number of entries `add` will assign, including index 0.
    ///
    /// Values above [`MAX_NAMESPACE_ENTRIES`] are clamped to it; values below
    /// 1 are raised to 1 so the base namespace always fits.
    pub max_entries: usize,
}

impl Default for NamespaceTableOptions {
    fn default() -> Self {
        Self {
            max_entries: MAX_NAMESPACE_ENTRIES,
        }
    }
}

impl NamespaceTableOptions {
    /// Creates default options (65535 entries).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry limit.
    pub fn max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }
}

#[derive(Debug, Default)]
struct Entries {
    by_index: BTreeMap<u16, String>,
    by_uri: FxHashMap<String, u16>,
}

impl Entries {
    fn seeded() -> Self {
        let mut entries = Entries::default();
        entries.bind(0, OPC_UA_NAMESPACE.to_string());
        entries
    }

    fn add(&mut self, uri: &str, max_entries: usize) -> Result<u16, NamespaceError> {
        if let Some(&index) = self.by_uri.get(uri) {
            return Ok(index);
        }

        let free = (0..max_entries)
            .map(|i| i as u16)
            .find(|i| !self.by_index.contains_key(i));

        match free {
            Some(index) => {
                self.bind(index, uri.to_string());
                debug!("namespace {:?} registered at index {}", uri, index);
                Ok(index)
            }
            None => {
                warn!("namespace table full ({} entries), cannot add {:?}", max_entries, uri);
                Err(NamespaceError::TableFull {
                    uri: uri.to_string(),
                    max: max_entries,
                })
            }
        }
    }

    fn set(&mut self, index: u16, uri: String) -> Option<String> {
        let previous = self.by_index.insert(index, uri.clone());

        if let Some(prev) = &previous {
            if self.by_uri.get(prev) == Some(&index) {
                self.by_uri.remove(prev);
                // The old URI may still be bound elsewhere after an earlier duplicate set.
                if let Some((&other, _)) = self.by_index.iter().find(|(_, u)| *u == prev) {
                    self.by_uri.insert(prev.clone(), other);
                }
            }
        }

        if let Some(other) = self.by_uri.insert(uri.clone(), index) {
            if other != index && self.by_index.get(&other) == Some(&uri) {
                warn!(
                    "namespace {:?} now bound at both index {} and index {}",
                    uri, other, index
                );
            }
        }

        debug!("namespace index {} rebound to {:?} (was {:?})", index, uri, previous);
        previous
    }

    fn bind(&mut self, index: u16, uri: String) {
        self.by_uri.insert(uri.clone(), index);
        self.by_index.insert(index, uri);
    }
}

/// A mutable, thread-safe bidirectional map between namespace URIs and indices.
///
/// Share it between threads with `Arc<NamespaceTable>`; every method takes
/// `&self`.
#[derive(Debug)]
pub struct NamespaceTable {
    entries: Mutex<Entries>,
    max_entries: usize,
}

impl Default for NamespaceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceTable {
    /// Creates a table holding only the OPC UA namespace at index 0.
    pub fn new() -> Self {
        Self::with_options(NamespaceTableOptions::default())
    }

    /// Creates a table with the given options.
    pub fn with_options(options: NamespaceTableOptions) -> Self {
        Self {
            entries: Mutex::new(Entries::seeded()),
            max_entries: options.max_entries.clamp(1, MAX_NAMESPACE_ENTRIES),
        }
    }

    /// Creates a table and adds `uris` in order, so they receive indices 1, 2, ...
    ///
    /// URIs already present (including the base URI) keep their first index.
    pub fn with_uris<I, S>(uris: I) -> Result<Self, NamespaceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let table = Self::new();
        for uri in uris {
            table.add(uri.as_ref())?;
        }
        Ok(table)
    }

    /// Adds `uri`, returning its index.
    ///
    /// Returns the existing index if `uri` is already present. Otherwise binds
    /// the lowest unused index.
    pub fn add(&self, uri: &str) -> Result<u16, NamespaceError> {
        self.entries.lock().add(uri, self.max_entries)
    }

    /// Returns the URI at `index`.
    pub fn get_uri(&self, index: u16) -> Option<String> {
        self.entries.lock().by_index.get(&index).cloned()
    }

    /// Returns the index of `uri`.
    pub fn get_index(&self, uri: &str) -> Option<u16> {
        self.entries.lock().by_uri.get(uri).copied()
    }

    /// Binds `index` to `uri`, returning the URI previously at `index`.
    ///
    /// No uniqueness check is made: if `uri` is already bound at another
    /// index, both indices resolve to it and [`get_index`](Self::get_index)
    /// returns the one set last.
    pub fn set(&self, index: u16, uri: impl Into<String>) -> Option<String> {
        self.entries.lock().set(index, uri.into())
    }

    /// Returns true if `uri` is bound at any index.
    pub fn contains_uri(&self, uri: &str) -> bool {
        self.entries.lock().by_uri.contains_key(uri)
    }

    /// Number of bound indices.
    pub fn len(&self) -> usize {
        self.entries.lock().by_index.len()
    }

    /// True when no index is bound.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().by_index.is_empty()
    }

    /// Returns all URIs ordered by index.
    pub fn to_array(&self) -> Vec<String> {
        self.entries.lock().by_index.values().cloned().collect()
    }

    /// Replaces the whole table with a server's namespace array.
    ///
    /// `uris[i]` is bound at index `i` for `i > 0`. Index 0 always keeps the
    /// base namespace; a different `uris[0]` is logged and ignored. Entries
    /// beyond the table limit are dropped.
    pub fn replace_all<I, S>(&self, uris: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries = self.entries.lock();
        *entries = Entries::seeded();

        let mut dropped = 0usize;
        for (i, uri) in uris.into_iter().enumerate() {
            let uri: String = uri.into();
            if i == 0 {
                if uri != OPC_UA_NAMESPACE {
                    warn!(
                        "namespace array index 0 is {:?}, keeping {:?}",
                        uri, OPC_UA_NAMESPACE
                    );
                }
            } else if i < self.max_entries {
                entries.set(i as u16, uri);
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            warn!(
                "namespace array truncated, {} entries beyond index {} dropped",
                dropped,
                self.max_entries - 1
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_fresh_table_assigns_sequential_indices() {
        let table = NamespaceTable::new();
        assert_eq!(table.add("urn:example:a").unwrap(), 1);
        assert_eq!(table.add("urn:example:b").unwrap(), 2);
        assert_eq!(table.add("urn:example:a").unwrap(), 1);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_base_namespace_seeded() {
        let table = NamespaceTable::new();
        assert_eq!(table.get_uri(0).as_deref(), Some(OPC_UA_NAMESPACE));
        assert_eq!(table.get_index(OPC_UA_NAMESPACE), Some(0));
        assert_eq!(table.add(OPC_UA_NAMESPACE).unwrap(), 0);

        let table = NamespaceTable::with_uris(["urn:x", "urn:y", OPC_UA_NAMESPACE]).unwrap();
        assert_eq!(table.get_uri(0).as_deref(), Some(OPC_UA_NAMESPACE));
        assert_eq!(table.get_index("urn:x"), Some(1));
        assert_eq!(table.get_index("urn:y"), Some(2));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_add_fills_lowest_gap() {
        let table = NamespaceTable::new();
        table.set(2, "urn:two");
        assert_eq!(table.add("urn:one").unwrap(), 1);
        assert_eq!(table.add("urn:three").unwrap(), 3);
    }

    #[test]
    fn test_table_full() {
        let table = NamespaceTable::with_options(NamespaceTableOptions::new().max_entries(3));
        assert_eq!(table.add("urn:a").unwrap(), 1);
        assert_eq!(table.add("urn:b").unwrap(), 2);

        let err = table.add("urn:c").unwrap_err();
        assert_eq!(
            err,
            NamespaceError::TableFull {
                uri: "urn:c".to_string(),
                max: 3,
            }
        );

        // Existing URIs still resolve once full.
        assert_eq!(table.add("urn:a").unwrap(), 1);
        assert_eq!(table.get_index("urn:c"), None);
    }

    #[test]
    fn test_options_clamped() {
        let table = NamespaceTable::with_options(NamespaceTableOptions::new().max_entries(0));
        assert!(table.add("urn:a").is_err());
        assert_eq!(table.len(), 1);

        let options = NamespaceTableOptions::new().max_entries(usize::MAX);
        let table = NamespaceTable::with_options(options);
        assert_eq!(table.max_entries, MAX_NAMESPACE_ENTRIES);
    }

    #[test]
    fn test_set_returns_previous() {
        let table = NamespaceTable::new();
        table.add("urn:a").unwrap();

        assert_eq!(table.set(1, "urn:b").as_deref(), Some("urn:a"));
        assert_eq!(table.get_uri(1).as_deref(), Some("urn:b"));
        assert_eq!(table.get_index("urn:b"), Some(1));
        assert_eq!(table.get_index("urn:a"), None);

        assert_eq!(table.set(5, "urn:c"), None);
        assert_eq!(table.to_array(), vec![OPC_UA_NAMESPACE, "urn:b", "urn:c"]);
    }

    #[test]
    fn test_set_allows_duplicate_uris() {
        let table = NamespaceTable::new();
        table.add("urn:a").unwrap();
        table.set(2, "urn:a");

        // Both indices keep the URI; the reverse lookup follows the last set.
        assert_eq!(table.get_uri(1).as_deref(), Some("urn:a"));
        assert_eq!(table.get_uri(2).as_deref(), Some("urn:a"));
        assert_eq!(table.get_index("urn:a"), Some(2));
        assert_eq!(table.to_array(), vec![OPC_UA_NAMESPACE, "urn:a", "urn:a"]);

        // Overwriting one of the duplicates keeps the other reachable.
        table.set(2, "urn:z");
        assert_eq!(table.get_index("urn:a"), Some(1));
        assert_eq!(table.get_index("urn:z"), Some(2));
    }

    #[test]
    fn test_set_same_uri_is_noop() {
        let table = NamespaceTable::new();
        table.add("urn:a").unwrap();
        assert_eq!(table.set(1, "urn:a").as_deref(), Some("urn:a"));
        assert_eq!(table.get_index("urn:a"), Some(1));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_replace_all() {
        let table = NamespaceTable::new();
        table.add("urn:old").unwrap();

        table.replace_all([OPC_UA_NAMESPACE, "urn:server:1", "urn:server:2"]);
        assert_eq!(table.get_index("urn:old"), None);
        assert_eq!(table.get_index("urn:server:2"), Some(2));
        assert_eq!(table.len(), 3);

        table.replace_all(Vec::<String>::new());
        assert_eq!(table.to_array(), vec![OPC_UA_NAMESPACE]);
    }

    #[test]
    fn test_replace_all_truncates() {
        let table = NamespaceTable::with_options(NamespaceTableOptions::new().max_entries(2));
        table.replace_all([OPC_UA_NAMESPACE, "urn:1", "urn:2"]);
        assert_eq!(table.to_array(), vec![OPC_UA_NAMESPACE, "urn:1"]);
    }

    #[test]
    fn test_replace_all_keeps_base_namespace() {
        let table = NamespaceTable::new();
        table.replace_all(["urn:foo", "urn:bar"]);

        assert_eq!(table.get_uri(0).as_deref(), Some(OPC_UA_NAMESPACE));
        assert_eq!(table.get_index(OPC_UA_NAMESPACE), Some(0));
        assert_eq!(table.get_index("urn:foo"), None);
        assert_eq!(table.get_index("urn:bar"), Some(1));
        assert_eq!(table.to_array(), vec![OPC_UA_NAMESPACE, "urn:bar"]);
    }

    #[test]
    fn test_default_ceiling() {
        let table = NamespaceTable::new();
        table.replace_all((0..70_000).map(|i| format!("urn:bulk:{}", i)));
        assert_eq!(table.len(), MAX_NAMESPACE_ENTRIES);

        match table.add("urn:new") {
            Err(NamespaceError::TableFull { max, .. }) => assert_eq!(max, MAX_NAMESPACE_ENTRIES),
            other => panic!("expected TableFull, got {:?}", other),
        }
    }

    #[test]
    fn test_concurrent_adds_agree() {
        let table = Arc::new(NamespaceTable::new());
        let uris: Vec<String> = (0..50).map(|i| format!("urn:concurrent:{}", i)).collect();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let table = Arc::clone(&table);
                let uris = uris.clone();
                thread::spawn(move || {
                    uris.iter()
                        .map(|uri| table.add(uri).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let results: Vec<Vec<u16>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for result in &results[1..] {
            assert_eq!(result, &results[0]);
        }
        assert_eq!(table.len(), 51);
    }

    proptest! {
        #[test]
        fn prop_add_is_a_bijection(uris in prop::collection::vec("urn:[a-z]{1,8}", 1..40)) {
            let table = NamespaceTable::new();
            let mut assigned = FxHashMap::default();

            for uri in &uris {
                let index = table.add(uri).unwrap();
                prop_assert_eq!(table.add(uri).unwrap(), index);
                let bound = table.get_uri(index);
                prop_assert_eq!(bound.as_deref(), Some(uri.as_str()));
                prop_assert_eq!(table.get_index(uri), Some(index));
                prop_assert!(index > 0);
                assigned.insert(uri.clone(), index);
            }

            let mut indices: Vec<u16> = assigned.values().copied().collect();
            indices.sort_unstable();
            indices.dedup();
            prop_assert_eq!(indices.len(), assigned.len());
            prop_assert_eq!(table.len(), assigned.len() + 1);
        }
    }
}
