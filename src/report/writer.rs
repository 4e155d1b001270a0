use crate::error::{FlowTagError, Result};
use crate::tagging::TagTable;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

pub const TAG_HEADER: &str = "Tag,Count";
pub const PORT_HEADER: &str = "Port,Protocol,Count";
pub const UNTAGGED_LABEL: &str = "Untagged";

/// Final counts of one run, written as a three-section text report
#[derive(Debug, Clone)]
pub struct TagReport {
    table: TagTable,
    untagged: u64,
}

impl TagReport {
    pub fn new(table: TagTable, untagged: u64) -> Self {
        Self { table, untagged }
    }

    pub fn table(&self) -> &TagTable {
        &self.table
    }

    pub fn untagged(&self) -> u64 {
        self.untagged
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    /// Create or truncate `path` and write the report to it
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let to_error = |source| FlowTagError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut out = BufWriter::new(File::create(path).map_err(to_error)?);
        self.write_to(&mut out).map_err(to_error)?;
        out.flush().map_err(to_error)?;

        info!(
            "Wrote report for {} tag keys to {}",
            self.table.len(),
            path.display()
        );
        Ok(())
    }
}

/// Renders the three report sections, one record per line
impl fmt::Display for TagReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TAG_HEADER)?;
        for (tag, count) in self.table.tag_counts() {
            writeln!(f, "{},{}", tag, count)?;
        }

        writeln!(f, "{}", PORT_HEADER)?;
        for (key, entry) in &self.table {
            writeln!(f, "{},{},{}", key.dst_port, key.protocol, entry.count)?;
        }

        writeln!(f, "{},{}", UNTAGGED_LABEL, self.untagged)
    }
}
