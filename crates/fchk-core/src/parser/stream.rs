//! Forward-only line source over borrowed checkpoint text.

/// Wraps the source text as a sequence of lines with a 1-based position
/// counter for diagnostics. Never rewinds.
#[derive(Debug)]
pub struct LineStream<'a> {
    lines: std::str::Lines<'a>,
    line_number: usize,
}

impl<'a> LineStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines(),
            line_number: 0,
        }
    }

    /// The next line without its terminator, advancing the counter. Returns
    /// `None` once the source is exhausted.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.line_number += 1;
        Some(line)
    }

    /// 1-based number of the line most recently returned; 0 before the first
    /// read.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
