pub mod writer;

pub use writer::TagReport;
