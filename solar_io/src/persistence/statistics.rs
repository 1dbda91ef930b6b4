//! Append-only per-tick statistics log
//!
//! Every [`StatisticsLog::record_tick`] call appends one wire line per body
//! followed by a single blank line, so the file is a sequence of blocks:
//!
//! ```text
//! Star 30 yellow 1000.000000 0.000000 0.000000 0.000000 0.000000
//! Planet 5 blue 1.000000 100.000000 0.000000 0.000000 2.000000
//!
//! Star 30 yellow 1000.000000 0.000000 0.000000 0.000000 0.000000
//! Planet 5 blue 1.000000 100.000000 0.200000 -0.004000 2.000000
//!
//! ```
//!
//! Appends take `&mut self` and the handle is not `Clone`, so one handle is
//! one writer and its blank-line framing stays intact. Separate handles
//! opened on the same path are not coordinated.

use std::borrow::Borrow;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::configuration::config::IoConfig;
use crate::error::{IoError, IoResult};
use crate::persistence::parser::parse_record;
use crate::persistence::record::BodyRecord;
use crate::persistence::writer::{validate_records, write_records, DEFAULT_PRECISION};

pub const DEFAULT_STATS_PATH: &str = "stats.txt";

#[derive(Debug)]
pub struct StatisticsLog {
    path: PathBuf,
    precision: usize,
    ticks_written: usize, // ticks appended through this handle
}

impl Default for StatisticsLog {
    fn default() -> Self {
        Self::new(DEFAULT_STATS_PATH)
    }
}

impl StatisticsLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            precision: DEFAULT_PRECISION,
            ticks_written: 0,
        }
    }

    pub fn from_config(cfg: &IoConfig) -> Self {
        Self::new(&cfg.statistics.path).with_precision(cfg.writer.precision)
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ticks_written(&self) -> usize {
        self.ticks_written
    }

    /// Append one block: a line per record, then a blank separator line.
    /// The file is created if it does not exist yet.
    /// An invalid record fails the call before anything is appended.
    pub fn record_tick<B: Borrow<BodyRecord>>(&mut self, records: &[B]) -> IoResult<()> {
        validate_records(records)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(IoError::io(&self.path))?;
        let mut out = BufWriter::new(file);

        write_records(&mut out, records, self.precision)
            .and_then(|_| writeln!(out))
            .and_then(|_| out.flush())
            .map_err(IoError::io(&self.path))?;

        self.ticks_written += 1;
        debug!(path = %self.path.display(), bodies = records.len(), tick = self.ticks_written, "statistics tick appended");
        Ok(())
    }

    /// Truncate the log to empty, keeping the file in place
    pub fn clear(&mut self) -> IoResult<()> {
        File::create(&self.path).map_err(IoError::io(&self.path))?;
        self.ticks_written = 0;
        debug!(path = %self.path.display(), "statistics cleared");
        Ok(())
    }

    /// Read the log back as one `Vec` of records per tick.
    ///
    /// Blocks are split on blank lines; a tick with no bodies leaves just a
    /// blank line and comes back as an empty batch.
    pub fn read_ticks(&self) -> IoResult<Vec<Vec<BodyRecord>>> {
        let file = File::open(&self.path).map_err(IoError::io(&self.path))?;
        let reader = BufReader::new(file);

        let mut ticks = Vec::new();
        let mut current = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| IoError::io(&self.path)(e))?;
            if line.trim().is_empty() {
                ticks.push(std::mem::take(&mut current));
                continue;
            }
            let record = parse_record(&line).map_err(|source| IoError::Parse { line: idx + 1, source })?;
            current.push(record);
        }
        // trailing block without its separator, e.g. an interrupted append
        if !current.is_empty() {
            ticks.push(current);
        }
        Ok(ticks)
    }
}

/// Append a tick to the default `stats.txt` log
pub fn log_tick<B: Borrow<BodyRecord>>(records: &[B]) -> IoResult<()> {
    StatisticsLog::default().record_tick(records)
}

/// Truncate the default `stats.txt` log
pub fn clear_log() -> IoResult<()> {
    StatisticsLog::default().clear()
}
