pub mod aggregator;
pub mod table;

pub use aggregator::{join_key, FlowAggregator, FlowMatch};
pub use table::{TagEntry, TagKey, TagTable};
