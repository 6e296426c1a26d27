use crate::domain::model::{KeyedEntries, PartitionSet};

/// Soft limit on keys per partition. Exceeding it is only reported; the
/// prefix scheme never splits a partition.
pub const PARTITION_KEY_WARN_LIMIT: usize = 10_000;

/// Label a key by the decimal code points of its first two characters, each
/// zero-padded to three digits: "ab" -> "097-098", "a" -> "097-". Code
/// points above 999 render wider than three digits.
pub fn partition_label(key: &str) -> String {
    let mut chars = key.chars();
    let first = match chars.next() {
        // The reader never produces empty keys.
        None => return String::new(),
        Some(c) => c,
    };
    match chars.next() {
        Some(second) => format!("{:03}-{:03}", first as u32, second as u32),
        None => format!("{:03}-", first as u32),
    }
}

/// Group every key into its prefix partition. Labels come out in ascending
/// lexicographic order; keys inside a partition stay in ascending key order.
pub fn partition(entries: &KeyedEntries) -> PartitionSet {
    let mut set = PartitionSet::default();
    for key in entries.keys() {
        set.groups
            .entry(partition_label(key))
            .or_default()
            .push(key.clone());
    }

    for (label, keys) in &set.groups {
        if keys.len() > PARTITION_KEY_WARN_LIMIT {
            tracing::warn!(
                "Partition {} holds {} keys (soft limit {})",
                label,
                keys.len(),
                PARTITION_KEY_WARN_LIMIT
            );
        }
    }

    set
}
