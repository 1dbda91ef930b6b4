//! Scenario writer: records -> wire lines
//!
//! Each record becomes one line
//! `<Kind> <radius> <color> <mass> <x> <y> <vx> <vy> ` followed by `\n`:
//! - `Kind` is capitalized (`Star` / `Planet`)
//! - `radius` is truncated to an integer
//! - `color` is written lower-case
//! - the remaining numbers are fixed-point with `precision` decimals, so
//!   magnitudes below `0.5 * 10^-precision` come back as zero
//!
//! Records are validated before the file is opened; an empty or
//! whitespace-containing color, or a non-finite radius, fails the call
//! instead of producing a line the loader would skip.
//!
//! The statistics log reuses [`write_records`] so both files share one layout.

use std::borrow::Borrow;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::configuration::config::IoConfig;
use crate::error::{IoError, IoResult};
use crate::persistence::record::BodyRecord;

pub const DEFAULT_PRECISION: usize = 6;

/// Format one record as a wire line, without the newline.
/// Does not validate; see [`validate_records`].
pub fn format_record(record: &BodyRecord, precision: usize) -> String {
    format!(
        "{} {:.0} {} {:.p$} {:.p$} {:.p$} {:.p$} {:.p$} ",
        record.kind().tag(),
        record.radius.trunc(),
        record.color.to_lowercase(),
        record.mass,
        record.position.x,
        record.position.y,
        record.velocity.x,
        record.velocity.y,
        p = precision,
    )
}

impl fmt::Display for BodyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_record(self, DEFAULT_PRECISION))
    }
}

/// Check every record before anything is written
pub fn validate_records<B: Borrow<BodyRecord>>(records: &[B]) -> IoResult<()> {
    records
        .iter()
        .enumerate()
        .try_for_each(|(index, record)| {
            record
                .borrow()
                .validate()
                .map_err(|source| IoError::Record { index, source })
        })
}

/// Write one line per record to `out`
pub fn write_records<W, B>(out: &mut W, records: &[B], precision: usize) -> std::io::Result<()>
where
    W: Write,
    B: Borrow<BodyRecord>,
{
    for record in records {
        writeln!(out, "{}", format_record(record.borrow(), precision))?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub struct ScenarioWriter {
    pub precision: usize, // decimals for mass, position and velocity
}

impl Default for ScenarioWriter {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl ScenarioWriter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    pub fn from_config(cfg: &IoConfig) -> Self {
        Self::new(cfg.writer.precision)
    }

    /// Overwrite `path` with `records`. A failure part way through leaves
    /// the file partially written.
    pub fn save<B: Borrow<BodyRecord>>(&self, path: impl AsRef<Path>, records: &[B]) -> IoResult<()> {
        let path = path.as_ref();
        validate_records(records)?;
        let file = File::create(path).map_err(IoError::io(path))?;
        let mut out = BufWriter::new(file);

        write_records(&mut out, records, self.precision)
            .and_then(|_| out.flush())
            .map_err(IoError::io(path))?;

        debug!(path = %path.display(), count = records.len(), "scenario saved");
        Ok(())
    }
}

/// Save with the default precision
pub fn save<B: Borrow<BodyRecord>>(path: impl AsRef<Path>, records: &[B]) -> IoResult<()> {
    ScenarioWriter::default().save(path, records)
}
