use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single dictionary entry filed under some lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Original surface form of the term, as it appeared in the input.
    pub term: String,
    /// Definition text, after the `getdef` transform.
    pub definition: String,
    /// True when the lookup key equals the normalized term.
    pub exact_match: bool,
}

/// Lookup key -> entries in input order. Multiple terms may share a key
/// (homographs, inflected forms). Keys iterate in ascending order.
pub type KeyedEntries = BTreeMap<String, Vec<Entry>>;

/// Partition label -> keys assigned to that partition. Labels iterate in
/// ascending order; each key belongs to exactly one partition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionSet {
    pub groups: BTreeMap<String, Vec<String>>,
}

impl PartitionSet {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Partition labels in output order.
    pub fn labels(&self) -> Vec<String> {
        self.groups.keys().cloned().collect()
    }
}

/// Output of the transform stage, consumed by the page and manifest writers.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub entries: KeyedEntries,
    pub partitions: PartitionSet,
}
