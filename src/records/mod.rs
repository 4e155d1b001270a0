//! Record shapes read from the two CSV inputs

pub mod flow;
pub mod tag;

pub use flow::{Action, FlowRecord, LogStatus, ParseEnumError};
pub use tag::TagRecord;
