pub mod cli;
pub mod error;
pub mod parser;
pub mod records;
pub mod report;
pub mod tagging;

pub use error::{FlowTagError, RecordError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
