//! Non-fatal load diagnostics
//!
//! Skipped lines are reported as [`Diagnostic`] events through a
//! [`DiagnosticSink`]. `TracingSink` forwards them to the `tracing`
//! subscriber; `CollectingSink` keeps them for the caller to inspect.

use std::fmt;

use tracing::warn;

use crate::error::RecordError;

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    /// First token is not a known body kind
    UnknownKind { keyword: String },
    /// Recognised kind, but the line could not be used
    Malformed { error: RecordError },
}

/// A skipped line, 1-based `line` number
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::UnknownKind { keyword } => {
                write!(f, "line {}: unknown space object {:?}, skipped", self.line, keyword)
            }
            DiagnosticKind::Malformed { error } => {
                write!(f, "line {}: malformed record ({}), skipped", self.line, error)
            }
        }
    }
}

pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Emits every diagnostic as a `warn!` event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        warn!(line = diagnostic.line, "{}", diagnostic);
    }
}

/// Stores diagnostics in emission order
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink for CollectingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}
