use crate::cli::Cli;
use crate::parser::{LineTransform, RecordReader};
use crate::records::{FlowRecord, TagRecord};
use crate::tagging::{FlowAggregator, TagTable};
use crate::Result;
use tracing::info;

/// Counts from one completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub tag_keys: usize,
    pub flows_processed: u64,
    pub flows_tagged: u64,
    pub flows_untagged: u64,
}

/// Load tag mappings, aggregate the flow log against them, write the report
pub fn run(cli: &Cli) -> Result<RunSummary> {
    info!("Loading tag mappings from {}", cli.tag_mappings.display());
    // Mapping lines are lowercased so protocol matching is case-insensitive
    let tags = RecordReader::<TagRecord>::open(&cli.tag_mappings, LineTransform::TrimLowercase)?;
    let table = TagTable::try_from_records(tags)?;
    info!("Loaded {} tag keys", table.len());

    info!("Aggregating flow logs from {}", cli.flow_logs.display());
    let mut aggregator = FlowAggregator::new(table);
    for record in RecordReader::<FlowRecord>::open(&cli.flow_logs, LineTransform::Trim)? {
        aggregator.process_record(&record?);
    }

    let summary = RunSummary {
        tag_keys: aggregator.table().len(),
        flows_processed: aggregator.processed(),
        flows_tagged: aggregator.tagged(),
        flows_untagged: aggregator.untagged(),
    };
    info!(
        "Processed {} flow records: {} tagged, {} untagged",
        summary.flows_processed, summary.flows_tagged, summary.flows_untagged
    );

    aggregator.finish().write_file(&cli.output)?;

    Ok(summary)
}
