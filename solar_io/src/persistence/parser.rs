//! Line parser: one wire line -> one `BodyRecord`
//!
//! A record line has the layout
//! `<Kind> <radius> <color> <mass> <x> <y> <vx> <vy>`.
//! The line is lower-cased before splitting so kind keywords and colors
//! match case-insensitively; numbers parse the same either way.

use crate::error::RecordError;
use crate::persistence::record::{BodyKind, BodyRecord, NVec2, FIELDS, TOKENS_PER_RECORD};

/// Parse `line` as a record of the given `kind`.
///
/// The first token is the kind keyword and is not re-checked here; the
/// caller has already dispatched on it.
pub fn parse_line(line: &str, kind: BodyKind) -> Result<BodyRecord, RecordError> {
    let folded = line.to_lowercase();
    let tokens: Vec<&str> = folded.split_whitespace().collect();
    if tokens.len() != TOKENS_PER_RECORD {
        return Err(RecordError::Format {
            expected: TOKENS_PER_RECORD,
            found: tokens.len(),
        });
    }

    let radius = number(&tokens, 1)?;
    let color = tokens[2].to_string();
    let mass = number(&tokens, 3)?;
    let x = number(&tokens, 4)?;
    let y = number(&tokens, 5)?;
    let vx = number(&tokens, 6)?;
    let vy = number(&tokens, 7)?;

    Ok(BodyRecord::new(kind, radius, color, mass, NVec2::new(x, y), NVec2::new(vx, vy)))
}

/// Parse a line whose kind is taken from its first token
pub fn parse_record(line: &str) -> Result<BodyRecord, RecordError> {
    let keyword = line.split_whitespace().next().unwrap_or("");
    let kind = BodyKind::from_keyword(keyword).ok_or_else(|| RecordError::UnknownKind {
        keyword: keyword.to_lowercase(),
    })?;
    parse_line(line, kind)
}

fn number(tokens: &[&str], idx: usize) -> Result<f64, RecordError> {
    tokens[idx].parse::<f64>().map_err(|_| RecordError::Number {
        field: FIELDS[idx],
        token: tokens[idx].to_string(),
    })
}
