//! Fixed-count array readers shared by the record dispatcher.
//!
//! Each reader consumes whole lines until the promised element count is
//! reached. A malformed token or a count mismatch records one diagnostic and
//! yields an empty result; the dispatcher decides whether that is fatal.

use super::stream::LineStream;
use crate::domain::{DiagnosticSink, NumericKind, ParseDiagnostic};

/// Width of one packed double field on an array line.
const DOUBLE_FIELD_WIDTH: usize = 16;

/// Declared counts come straight from the file; capacity reserved before any
/// value lines arrive is capped at this many elements.
const MAX_RESERVED_CAPACITY: usize = 4096;

pub(super) fn read_integer_array(
    stream: &mut LineStream<'_>,
    count: usize,
    sink: &mut DiagnosticSink,
) -> Vec<i64> {
    read_token_array(stream, count, sink, NumericKind::Integer, |token| {
        token.parse::<i64>().ok()
    })
}

pub(super) fn read_unsigned_array(
    stream: &mut LineStream<'_>,
    count: usize,
    sink: &mut DiagnosticSink,
) -> Vec<usize> {
    read_token_array(stream, count, sink, NumericKind::UnsignedInteger, |token| {
        token.parse::<usize>().ok()
    })
}

/// Doubles are packed in consecutive 16-character fields with no separator,
/// left to right until each line runs out.
pub(super) fn read_double_array(
    stream: &mut LineStream<'_>,
    count: usize,
    sink: &mut DiagnosticSink,
) -> Vec<f64> {
    let mut values = Vec::with_capacity(count.min(MAX_RESERVED_CAPACITY));
    while values.len() < count {
        let Some(line) = stream.next_line() else {
            sink.record(ParseDiagnostic::ArrayLengthMismatch {
                line: stream.line_number(),
                kind: NumericKind::Real,
                expected: count,
                found: values.len(),
            });
            return Vec::new();
        };

        for field in fixed_width_fields(line) {
            match parse_double_token(field) {
                Some(value) => values.push(value),
                None => {
                    sink.record(ParseDiagnostic::MalformedToken {
                        line: stream.line_number(),
                        kind: NumericKind::Real,
                    });
                    return Vec::new();
                }
            }
        }
    }

    finish_array(stream, count, values, NumericKind::Real, sink)
}

/// Scalar double parsing shared with the dispatcher's value-field tokens.
/// Fortran writers emit `D` exponents, which `f64` parsing does not accept.
pub(super) fn parse_double_token(token: &str) -> Option<f64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.contains(['D', 'd']) {
        trimmed.replace(['D', 'd'], "E").parse::<f64>().ok()
    } else {
        trimmed.parse::<f64>().ok()
    }
}

fn read_token_array<T>(
    stream: &mut LineStream<'_>,
    count: usize,
    sink: &mut DiagnosticSink,
    kind: NumericKind,
    parse: impl Fn(&str) -> Option<T>,
) -> Vec<T> {
    let mut values = Vec::with_capacity(count.min(MAX_RESERVED_CAPACITY));
    while values.len() < count {
        let Some(line) = stream.next_line() else {
            sink.record(ParseDiagnostic::ArrayLengthMismatch {
                line: stream.line_number(),
                kind,
                expected: count,
                found: values.len(),
            });
            return Vec::new();
        };

        for token in line.split_whitespace() {
            match parse(token) {
                Some(value) => values.push(value),
                None => {
                    sink.record(ParseDiagnostic::MalformedToken {
                        line: stream.line_number(),
                        kind,
                    });
                    return Vec::new();
                }
            }
        }
    }

    finish_array(stream, count, values, kind, sink)
}

/// A final line holding more elements than the count promised is malformed,
/// not silently truncated.
fn finish_array<T>(
    stream: &LineStream<'_>,
    count: usize,
    values: Vec<T>,
    kind: NumericKind,
    sink: &mut DiagnosticSink,
) -> Vec<T> {
    if values.len() == count {
        values
    } else {
        sink.record(ParseDiagnostic::ArrayLengthMismatch {
            line: stream.line_number(),
            kind,
            expected: count,
            found: values.len(),
        });
        Vec::new()
    }
}

fn fixed_width_fields(line: &str) -> impl Iterator<Item = &str> {
    line.as_bytes()
        .chunks(DOUBLE_FIELD_WIDTH)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
}
