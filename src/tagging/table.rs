//! Tag lookup table keyed by (destination port, protocol name)

use crate::records::TagRecord;
use crate::Result;
use std::collections::btree_map::{self, BTreeMap};

/// Join key shared by tag mappings and flow records
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct TagKey {
    pub dst_port: i64,
    pub protocol: String,
}

impl TagKey {
    pub fn new(dst_port: i64, protocol: impl Into<String>) -> Self {
        Self {
            dst_port,
            protocol: protocol.into(),
        }
    }
}

/// A mapping rule and the number of flow records that matched it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub record: TagRecord,
    pub count: u64,
}

/// Tag mappings keyed by join key.
///
/// Keys are fixed once built; only the per-entry counters change afterwards.
/// A later mapping for the same key replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct TagTable {
    entries: BTreeMap<TagKey, TagEntry>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the reader's output, stopping at the first I/O error.
    pub fn try_from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<TagRecord>>,
    {
        let mut table = Self::new();
        for record in records {
            table.insert(record?);
        }
        Ok(table)
    }

    /// Insert a mapping with a zero count, replacing any previous mapping for the key
    pub fn insert(&mut self, record: TagRecord) {
        let key = TagKey::new(record.dst_port, record.protocol.clone());
        self.entries.insert(key, TagEntry { record, count: 0 });
    }

    /// Count one hit against the key. Returns false when no mapping exists.
    pub fn record_hit(&mut self, key: &TagKey) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.count += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &TagKey) -> Option<&TagEntry> {
        self.entries.get(key)
    }

    /// Entries in ascending (port, protocol) order
    pub fn iter(&self) -> btree_map::Iter<'_, TagKey, TagEntry> {
        self.entries.iter()
    }

    /// Sum of all per-key counters
    pub fn total_hits(&self) -> u64 {
        self.entries.values().map(|entry| entry.count).sum()
    }

    /// Counts summed per distinct tag, in ascending tag order
    pub fn tag_counts(&self) -> BTreeMap<&str, u64> {
        let mut counts = BTreeMap::new();
        for entry in self.entries.values() {
            *counts.entry(entry.record.tag.as_str()).or_insert(0) += entry.count;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<TagRecord> for TagTable {
    fn from_iter<I: IntoIterator<Item = TagRecord>>(records: I) -> Self {
        let mut table = Self::new();
        for record in records {
            table.insert(record);
        }
        table
    }
}

impl<'a> IntoIterator for &'a TagTable {
    type Item = (&'a TagKey, &'a TagEntry);
    type IntoIter = btree_map::Iter<'a, TagKey, TagEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlowTagError;
    use std::path::PathBuf;

    #[test]
    fn test_insert_starts_at_zero() {
        let table: TagTable = vec![TagRecord::new(25, "tcp", "email")]
            .into_iter()
            .collect();

        let entry = table.get(&TagKey::new(25, "tcp")).expect("entry present");
        assert_eq!(entry.count, 0);
        assert_eq!(entry.record.tag, "email");
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let mut table: TagTable = vec![
            TagRecord::new(80, "tcp", "web"),
            TagRecord::new(80, "tcp", "http"),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 1);
        assert!(table.record_hit(&TagKey::new(80, "tcp")));

        let entry = table.get(&TagKey::new(80, "tcp")).unwrap();
        assert_eq!(entry.record.tag, "http");
        assert_eq!(entry.count, 1);
        assert!(!table.tag_counts().contains_key("web"));
    }

    #[test]
    fn test_overwrite_resets_count() {
        let mut table = TagTable::new();
        table.insert(TagRecord::new(443, "tcp", "web"));
        table.record_hit(&TagKey::new(443, "tcp"));
        table.insert(TagRecord::new(443, "tcp", "https"));

        assert_eq!(table.get(&TagKey::new(443, "tcp")).unwrap().count, 0);
    }

    #[test]
    fn test_miss_leaves_counts_untouched() {
        let mut table: TagTable = vec![TagRecord::new(25, "tcp", "email")]
            .into_iter()
            .collect();

        assert!(!table.record_hit(&TagKey::new(25, "udp")));
        assert_eq!(table.total_hits(), 0);
    }

    #[test]
    fn test_tag_counts_merge_keys() {
        let mut table: TagTable = vec![
            TagRecord::new(68, "udp", "sv_p2"),
            TagRecord::new(31, "udp", "sv_p3"),
            TagRecord::new(23, "tcp", "sv_p1"),
            TagRecord::new(25, "tcp", "sv_p1"),
        ]
        .into_iter()
        .collect();

        table.record_hit(&TagKey::new(23, "tcp"));
        table.record_hit(&TagKey::new(25, "tcp"));
        table.record_hit(&TagKey::new(25, "tcp"));

        let counts = table.tag_counts();
        assert_eq!(counts.get("sv_p1"), Some(&3));
        assert_eq!(counts.get("sv_p2"), Some(&0));
        assert_eq!(counts.keys().copied().collect::<Vec<_>>(), ["sv_p1", "sv_p2", "sv_p3"]);
    }

    #[test]
    fn test_iteration_is_ordered() {
        let table: TagTable = vec![
            TagRecord::new(443, "tcp", "web"),
            TagRecord::new(25, "tcp", "email"),
            TagRecord::new(25, "icmp", "ping"),
        ]
        .into_iter()
        .collect();

        let keys: Vec<(i64, &str)> = table
            .iter()
            .map(|(key, _)| (key.dst_port, key.protocol.as_str()))
            .collect();
        assert_eq!(keys, vec![(25, "icmp"), (25, "tcp"), (443, "tcp")]);
    }

    #[test]
    fn test_try_from_records_propagates_io_error() {
        let records = vec![
            Ok(TagRecord::new(25, "tcp", "email")),
            Err(FlowTagError::Read {
                path: PathBuf::from("tags.csv"),
                source: std::io::Error::other("disk gone"),
            }),
        ];

        assert!(TagTable::try_from_records(records).is_err());
    }
}
