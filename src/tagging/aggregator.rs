//! Flow aggregator joining flow records against the tag table
//!
//! Each flow record is keyed by (dst_port, protocol name) and counted
//! against the matching tag entry, or against the untagged counter.
//! Packet and byte columns are not consulted: counts are per record.

use crate::records::FlowRecord;
use crate::report::TagReport;
use crate::tagging::{TagKey, TagTable};
use tracing::info;

/// Outcome of joining one flow record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowMatch {
    Tagged,
    Untagged,
}

/// Owns the tag table and the counters for one aggregation pass
#[derive(Debug)]
pub struct FlowAggregator {
    table: TagTable,
    untagged: u64,
    processed: u64,
}

impl FlowAggregator {
    pub fn new(table: TagTable) -> Self {
        Self {
            table,
            untagged: 0,
            processed: 0,
        }
    }

    /// Join a single flow record
    pub fn process_record(&mut self, record: &FlowRecord) -> FlowMatch {
        self.processed += 1;

        info!("{},{}", record.dst_port, record.protocol);

        if self.table.record_hit(&join_key(record)) {
            FlowMatch::Tagged
        } else {
            self.untagged += 1;
            FlowMatch::Untagged
        }
    }

    pub fn process_all<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a FlowRecord>,
    {
        for record in records {
            self.process_record(record);
        }
    }

    pub fn table(&self) -> &TagTable {
        &self.table
    }

    /// Total number of flow records processed
    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn tagged(&self) -> u64 {
        self.processed - self.untagged
    }

    pub fn untagged(&self) -> u64 {
        self.untagged
    }

    /// End the pass and hand the counts to the report writer
    pub fn finish(self) -> TagReport {
        TagReport::new(self.table, self.untagged)
    }
}

/// Join key for a flow record, using the canonical lowercase protocol name
pub fn join_key(record: &FlowRecord) -> TagKey {
    TagKey::new(record.dst_port, record.protocol.name())
}
