pub mod errors;

pub use errors::{
    DiagnosticSink, FchkError, FchkResult, NumericKind, ParseDiagnostic, Severity,
};

use std::fmt::{Display, Formatter};

/// Spin channel of an orbital set. Closed-shell data carries identical alpha
/// and beta channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Alpha,
    Beta,
}

impl Spin {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
        }
    }
}

impl Display for Spin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
