use crate::error::{FlowTagError, Result};
use crate::parser::{LineTransform, Record, DEFAULT_DELIMITER};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Per-file parse outcome counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub ok: u64,
    pub skipped: u64,
}

impl ParseStats {
    pub fn total(&self) -> u64 {
        self.ok + self.skipped
    }
}

/// Lazy, single-pass reader yielding the well-formed records of a CSV file.
///
/// The header line is consumed on construction. Malformed lines are logged
/// and skipped; only I/O failures are yielded as errors, after which the
/// reader is exhausted.
pub struct RecordReader<T, R = BufReader<File>> {
    lines: Lines<R>,
    source: PathBuf,
    transform: LineTransform,
    delimiter: char,
    stats: ParseStats,
    finished: bool,
    _record: PhantomData<T>,
}

impl<T: Record> RecordReader<T> {
    pub fn open(path: &Path, transform: LineTransform) -> Result<Self> {
        let file = File::open(path).map_err(|source| FlowTagError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Self::new(BufReader::new(file), path, transform)
    }
}

impl<T: Record, R: BufRead> RecordReader<T, R> {
    pub fn new(reader: R, source: impl Into<PathBuf>, transform: LineTransform) -> Result<Self> {
        let source = source.into();
        let mut lines = reader.lines();

        match lines.next() {
            Some(Ok(header)) => info!("{} CSV header: {}", T::NAME, header.trim()),
            Some(Err(e)) => {
                return Err(FlowTagError::Read {
                    path: source,
                    source: e,
                })
            }
            None => info!("{} input {} is empty", T::NAME, source.display()),
        }

        Ok(Self {
            lines,
            source,
            transform,
            delimiter: DEFAULT_DELIMITER,
            stats: ParseStats::default(),
            finished: false,
            _record: PhantomData,
        })
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    fn finish(&mut self) {
        self.finished = true;
        info!(
            "Completed parsing {} records from {}. ok={}, skipped={}, total={}",
            T::NAME,
            self.source.display(),
            self.stats.ok,
            self.stats.skipped,
            self.stats.total()
        );
    }
}

impl<T: Record, R: BufRead> Iterator for RecordReader<T, R> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(source)) => {
                    self.finished = true;
                    return Some(Err(FlowTagError::Read {
                        path: self.source.clone(),
                        source,
                    }));
                }
                None => {
                    self.finish();
                    return None;
                }
            };

            let line = self.transform.apply(&line);
            let parts: Vec<&str> = line.split(self.delimiter).collect();

            match T::parse(&parts) {
                Ok(record) => {
                    self.stats.ok += 1;
                    return Some(Ok(record));
                }
                Err(e) => {
                    self.stats.skipped += 1;
                    warn!("Skipping {} line {:?}: {}", T::NAME, line, e);
                }
            }
        }
    }
}
