//! Prefix-searchable keyword indexes: item vocabulary and trade direction.
//!
//! [`PrefixIndex`] is an ordered map with bounded prefix iteration, so a scan
//! step costs a range seek rather than a pass over the whole vocabulary.
//! Built once, read-only afterwards; share via `Arc` across threads.

use crate::types::ItemId;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Vocabulary index: lowercase item name -> item id.
pub type VocabIndex = PrefixIndex<ItemId>;

/// Direction index: keyword -> is_selling.
pub type DirectionIndex = PrefixIndex<bool>;

/// Immutable prefix-searchable mapping from lowercase key to a value.
#[derive(Clone, Debug)]
pub struct PrefixIndex<V> {
    map: BTreeMap<String, V>,
}

impl<V: Copy + PartialEq> PrefixIndex<V> {
    /// Builds the index. Keys are lowercased here.
    ///
    /// Returns `Err` if two entries map distinct values to the same lowercase
    /// key (silent overwrite would make parses nondeterministic) or if a key
    /// is empty. An exact duplicate pair is deduplicated.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, V)>) -> Result<Self, String> {
        let mut map = BTreeMap::new();
        for (key, value) in entries {
            let key = key.to_lowercase();
            if key.is_empty() {
                return Err("empty key in index".into());
            }
            match map.get(&key) {
                Some(existing) if *existing != value => {
                    return Err(format!("duplicate key '{}' with conflicting values", key));
                }
                _ => {
                    map.insert(key, value);
                }
            }
        }
        Ok(Self { map })
    }

    /// All `(key, value)` pairs whose key starts with `prefix`, in key order.
    pub fn lookup_prefix(&self, prefix: &str) -> Vec<(&str, V)> {
        self.range_from(prefix)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.as_str(), *value))
            .collect()
    }

    /// True if at least one key starts with `prefix`. Does not allocate.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.range_from(prefix)
            .next()
            .map(|(key, _)| key.starts_with(prefix))
            .unwrap_or(false)
    }

    /// Value for an exact key match. Keys are unique, so an exact match is
    /// always the unique one.
    pub fn get(&self, key: &str) -> Option<V> {
        self.map.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn range_from(&self, prefix: &str) -> std::collections::btree_map::Range<'_, String, V> {
        self.map
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
    }
}

impl PrefixIndex<ItemId> {
    /// Builds the vocabulary from catalog `(item_id, display_name)` pairs.
    pub fn from_catalog(items: impl IntoIterator<Item = (ItemId, String)>) -> Result<Self, String> {
        Self::from_entries(items.into_iter().map(|(id, name)| (name, id)))
    }
}

/// The fixed trade-direction keyword table. `true` means selling.
pub fn direction_index() -> DirectionIndex {
    let entries = [
        ("wts", true),
        ("selling", true),
        ("wtb", false),
        ("buying", false),
    ];
    PrefixIndex::from_entries(entries.into_iter().map(|(k, v)| (k.to_string(), v)))
        .expect("direction table is duplicate-free")
}
