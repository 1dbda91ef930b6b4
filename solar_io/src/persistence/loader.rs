//! Scenario loader: text file -> ordered list of wrapped bodies
//!
//! Reads the file line by line and
//! - skips blank lines and `#` comments,
//! - dispatches on the first token (`star` / `planet`),
//! - reports unknown kinds through a [`DiagnosticSink`] and carries on,
//! - hands every record to a [`Wrapper`] in file order.
//!
//! Whether a recognised line with the wrong token count is skipped or
//! aborts the load is decided by [`LinePolicy`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::configuration::config::IoConfig;
use crate::error::{IoError, IoResult, RecordError};
use crate::persistence::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink};
use crate::persistence::parser::parse_line;
use crate::persistence::record::BodyKind;
use crate::visualization::drawable::{DrawableBody, DrawableWrapper, Wrapper};

/// What to do with a recognised line that has the wrong number of tokens
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LinePolicy {
    /// Skip the line with a `Malformed` diagnostic
    #[default]
    Lenient,
    /// Abort the load
    Strict,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioLoader {
    pub policy: LinePolicy,
}

impl ScenarioLoader {
    pub fn new(policy: LinePolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(cfg: &IoConfig) -> Self {
        Self::new(cfg.loader.policy)
    }

    /// Load `path`, wrapping each record with `wrapper` and reporting
    /// skipped lines to `sink`. Any I/O, number or wrap error aborts the
    /// whole load; nothing partial is returned.
    pub fn load_with<W, S>(&self, path: impl AsRef<Path>, wrapper: &W, sink: &mut S) -> IoResult<Vec<W::Handle>>
    where
        W: Wrapper,
        S: DiagnosticSink + ?Sized,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(IoError::io(path))?;
        let reader = BufReader::new(file);

        let mut handles = Vec::new();
        let mut skipped = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| IoError::io(path)(e))?;
            let line_no = idx + 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            // trimmed is non-empty, so there is a first token
            let keyword = trimmed.split_whitespace().next().unwrap_or_default();
            let Some(kind) = BodyKind::from_keyword(keyword) else {
                sink.emit(Diagnostic {
                    line: line_no,
                    kind: DiagnosticKind::UnknownKind {
                        keyword: keyword.to_lowercase(),
                    },
                });
                skipped += 1;
                continue;
            };

            let record = match parse_line(trimmed, kind) {
                Ok(record) => record,
                Err(error @ RecordError::Format { .. }) if self.policy == LinePolicy::Lenient => {
                    sink.emit(Diagnostic {
                        line: line_no,
                        kind: DiagnosticKind::Malformed { error },
                    });
                    skipped += 1;
                    continue;
                }
                Err(source) => return Err(IoError::Parse { line: line_no, source }),
            };

            let handle = wrapper
                .wrap(record)
                .map_err(|source| IoError::Wrap { line: line_no, source })?;
            handles.push(handle);
        }

        debug!(path = %path.display(), loaded = handles.len(), skipped, "scenario loaded");
        Ok(handles)
    }

    /// Load with the default drawable wrapper, logging diagnostics via `tracing`
    pub fn load(&self, path: impl AsRef<Path>) -> IoResult<Vec<DrawableBody>> {
        self.load_with(path, &DrawableWrapper::default(), &mut TracingSink)
    }
}

/// Load a scenario file with the lenient policy and default wrapper
pub fn load(path: impl AsRef<Path>) -> IoResult<Vec<DrawableBody>> {
    ScenarioLoader::default().load(path)
}
