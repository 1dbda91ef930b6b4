//! Configuration types for the scenario and statistics I/O layer.
//!
//! This module defines a thin, `serde`-deserializable representation of the
//! I/O settings. A config consists of:
//!
//! - [`LoaderConfig`]     – how malformed scenario lines are handled
//! - [`WriterConfig`]     – numeric formatting of written records
//! - [`StatisticsConfig`] – where the per-tick statistics log lives
//! - [`PointStyle`]       – marker style for sampled plot points
//! - [`IoConfig`]         – top-level wrapper loaded from YAML
//!
//! # YAML format
//! Every section is optional; missing keys fall back to the defaults shown:
//!
//! ```yaml
//! loader:
//!   policy: lenient       # or "strict"
//!
//! writer:
//!   precision: 6          # decimals for mass, x, y, vx, vy
//!
//! statistics:
//!   path: stats.txt       # append-only per-tick log
//!
//! plot:
//!   color: red
//!   size: 1.0
//! ```
//!
//! Runtime types (`ScenarioLoader`, `ScenarioWriter`, `StatisticsLog`,
//! `SampleCollector`) are built from this via their `from_config`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{IoError, IoResult};
use crate::persistence::loader::LinePolicy;
use crate::persistence::statistics::DEFAULT_STATS_PATH;
use crate::persistence::writer::DEFAULT_PRECISION;
use crate::telemetry::plot::PointStyle;

/// Scenario loading options
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LoaderConfig {
    pub policy: LinePolicy, // lenient: skip lines with a bad token count, strict: abort
}

/// Record formatting options
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WriterConfig {
    pub precision: usize, // fixed-point decimals
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Statistics log location
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct StatisticsConfig {
    pub path: PathBuf,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STATS_PATH),
        }
    }
}

/// Top-level I/O configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct IoConfig {
    pub loader: LoaderConfig,
    pub writer: WriterConfig,
    pub statistics: StatisticsConfig,
    pub plot: PointStyle,
}

impl IoConfig {
    pub fn from_reader<R: Read>(reader: R) -> IoResult<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> IoResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(IoError::io(path))?;
        Self::from_reader(BufReader::new(file))
    }
}
