use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type FchkResult<T> = Result<T, FchkError>;

/// Failures of the crate's own operations, as opposed to diagnostics recorded
/// against the input text (`ParseDiagnostic`).
#[derive(Debug, thiserror::Error)]
pub enum FchkError {
    #[error("failed to read checkpoint file '{}'", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize checkpoint summary")]
    SerializeSummary {
        #[from]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric kind requested from an array reader, named in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Integer,
    UnsignedInteger,
    Real,
}

impl NumericKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::UnsignedInteger => "unsigned integer",
            Self::Real => "real",
        }
    }
}

impl Display for NumericKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the parse diagnostic list. `Display` renders the
/// human-readable message surfaced to callers; no machine codes leak out.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseDiagnostic {
    #[error("expected {kind} value around line {line}")]
    MalformedToken { line: usize, kind: NumericKind },
    #[error("array around line {line} holds {found} {kind} values; expected {expected}")]
    ArrayLengthMismatch {
        line: usize,
        kind: NumericKind,
        expected: usize,
        found: usize,
    },
    #[error("malformed '{key}' record around line {line}")]
    MalformedRecord { line: usize, key: &'static str },
    #[error("'{key}' record around line {line} appears before any geometry")]
    RecordBeforeGeometry { line: usize, key: &'static str },
    #[error("geometry around line {line} declares {atoms} atoms but carries {coordinates} coordinate values")]
    GeometryShapeMismatch {
        line: usize,
        atoms: usize,
        coordinates: usize,
    },
    #[error("shell {shell} maps to atom {atom}, outside the {atom_count} atoms of the geometry (around line {line})")]
    ShellAtomOutOfRange {
        line: usize,
        shell: usize,
        atom: usize,
        atom_count: usize,
    },
    #[error("shell arrays around line {line} disagree: {types} types, {atom_maps} atom map entries, {primitive_counts} primitive counts")]
    ShellCountMismatch {
        line: usize,
        types: usize,
        atom_maps: usize,
        primitive_counts: usize,
    },
    #[error("shells around line {line} declare {total} primitives but {exponents} exponents and {coefficients} coefficients are present")]
    PrimitiveTotalMismatch {
        line: usize,
        total: usize,
        exponents: usize,
        coefficients: usize,
    },
    #[error("secondary SP coefficient array around line {line} holds {found} values; expected {expected} or none")]
    SpCoefficientMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown shell type {code} for shell {shell} (around line {line})")]
    UnknownShellType { line: usize, shell: usize, code: i64 },
    #[error("orbital data around line {line} does not fit the basis: {basis_functions} basis functions, {orbitals} orbitals, {coefficients} coefficients")]
    OrbitalShapeMismatch {
        line: usize,
        basis_functions: usize,
        orbitals: usize,
        coefficients: usize,
    },
    #[error("force constant array around line {line} holds {found} values; expected {expected} for {atoms} atoms")]
    HessianSizeMismatch {
        line: usize,
        atoms: usize,
        expected: usize,
        found: usize,
    },
}

impl ParseDiagnostic {
    /// Error-severity entries force overall parse failure; warning-severity
    /// entries are local to one frame's shell or orbital construction.
    pub const fn severity(&self) -> Severity {
        match self {
            Self::MalformedToken { .. }
            | Self::ArrayLengthMismatch { .. }
            | Self::MalformedRecord { .. }
            | Self::RecordBeforeGeometry { .. }
            | Self::GeometryShapeMismatch { .. } => Severity::Error,
            Self::ShellAtomOutOfRange { .. }
            | Self::ShellCountMismatch { .. }
            | Self::PrimitiveTotalMismatch { .. }
            | Self::SpCoefficientMismatch { .. }
            | Self::UnknownShellType { .. }
            | Self::OrbitalShapeMismatch { .. }
            | Self::HessianSizeMismatch { .. } => Severity::Warning,
        }
    }

    pub const fn line(&self) -> usize {
        match self {
            Self::MalformedToken { line, .. }
            | Self::ArrayLengthMismatch { line, .. }
            | Self::MalformedRecord { line, .. }
            | Self::RecordBeforeGeometry { line, .. }
            | Self::GeometryShapeMismatch { line, .. }
            | Self::ShellAtomOutOfRange { line, .. }
            | Self::ShellCountMismatch { line, .. }
            | Self::PrimitiveTotalMismatch { line, .. }
            | Self::SpCoefficientMismatch { line, .. }
            | Self::UnknownShellType { line, .. }
            | Self::OrbitalShapeMismatch { line, .. }
            | Self::HessianSizeMismatch { line, .. } => *line,
        }
    }

    pub fn diagnostic_line(&self) -> String {
        format!("{}: {}", self.severity(), self)
    }
}

/// Ordered collection of parse diagnostics. A parse succeeds iff no
/// error-severity entry was recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagnosticSink {
    entries: Vec<ParseDiagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, diagnostic: ParseDiagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[ParseDiagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.severity() == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ParseDiagnostic> {
        self.entries
            .iter()
            .filter(|entry| entry.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ParseDiagnostic> {
        self.entries
            .iter()
            .filter(|entry| entry.severity() == Severity::Warning)
    }

    pub fn render_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(ParseDiagnostic::diagnostic_line)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{DiagnosticSink, NumericKind, ParseDiagnostic, Severity};

    #[test]
    fn reader_and_structure_diagnostics_are_error_severity() {
        let cases = [
            ParseDiagnostic::MalformedToken {
                line: 4,
                kind: NumericKind::Real,
            },
            ParseDiagnostic::ArrayLengthMismatch {
                line: 4,
                kind: NumericKind::Real,
                expected: 6,
                found: 4,
            },
            ParseDiagnostic::MalformedRecord {
                line: 2,
                key: "Shell types",
            },
            ParseDiagnostic::GeometryShapeMismatch {
                line: 9,
                atoms: 2,
                coordinates: 4,
            },
        ];

        for diagnostic in cases {
            assert_eq!(diagnostic.severity(), Severity::Error);
        }
    }

    #[test]
    fn frame_local_diagnostics_are_warning_severity() {
        let cases = [
            ParseDiagnostic::UnknownShellType {
                line: 20,
                shell: 1,
                code: 5,
            },
            ParseDiagnostic::ShellAtomOutOfRange {
                line: 20,
                shell: 0,
                atom: 3,
                atom_count: 2,
            },
            ParseDiagnostic::OrbitalShapeMismatch {
                line: 31,
                basis_functions: 5,
                orbitals: 2,
                coefficients: 9,
            },
        ];

        for diagnostic in cases {
            assert_eq!(diagnostic.severity(), Severity::Warning);
        }
    }

    #[test]
    fn sink_tracks_error_presence_and_order() {
        let mut sink = DiagnosticSink::new();
        assert!(!sink.has_errors());
        assert!(sink.is_empty());

        sink.record(ParseDiagnostic::UnknownShellType {
            line: 12,
            shell: 2,
            code: 5,
        });
        assert!(!sink.has_errors(), "warnings alone should not flip failure");

        sink.record(ParseDiagnostic::MalformedToken {
            line: 15,
            kind: NumericKind::Integer,
        });
        assert!(sink.has_errors());
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.errors().count(), 1);
        assert_eq!(sink.warnings().count(), 1);
        assert_eq!(sink.entries()[0].line(), 12);
    }

    #[test]
    fn rendered_lines_carry_severity_and_message() {
        let mut sink = DiagnosticSink::new();
        sink.record(ParseDiagnostic::UnknownShellType {
            line: 7,
            shell: 3,
            code: 5,
        });

        let lines = sink.render_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            "warning: unknown shell type 5 for shell 3 (around line 7)"
        );
    }
}
