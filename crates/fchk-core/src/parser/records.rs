//! The closed set of recognized checkpoint record keys and the fixed-column
//! line layout they share.

/// Width of the key window at the start of each record line.
const KEY_WIDTH: usize = 42;
/// Column where the value field begins; the field runs to column 80.
const VALUE_START: usize = 43;
const VALUE_END: usize = 80;

/// One recognized record key. Unrecognized keys map to `None` and are
/// skipped, so unknown records never abort a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    AlphaElectronCount,
    BetaElectronCount,
    AtomicNumbers,
    CartesianCoordinates,
    BasisFunctionCount,
    ShellTypes,
    ShellPrimitiveCounts,
    ShellToAtomMap,
    PrimitiveExponents,
    ContractionCoefficients,
    SpContractionCoefficients,
    ScfEnergy,
    TotalEnergy,
    AlphaOrbitalCoefficients,
    BetaOrbitalCoefficients,
    AlphaOrbitalEnergies,
    BetaOrbitalEnergies,
    DipoleMoment,
    ForceConstants,
}

impl RecordKind {
    /// Exact key text as emitted in checkpoint files. Matching is
    /// case-sensitive.
    pub const fn key(self) -> &'static str {
        match self {
            Self::AlphaElectronCount => "Number of alpha electrons",
            Self::BetaElectronCount => "Number of beta electrons",
            Self::AtomicNumbers => "Atomic numbers",
            Self::CartesianCoordinates => "Current cartesian coordinates",
            Self::BasisFunctionCount => "Number of basis functions",
            Self::ShellTypes => "Shell types",
            Self::ShellPrimitiveCounts => "Number of primitives per shell",
            Self::ShellToAtomMap => "Shell to atom map",
            Self::PrimitiveExponents => "Primitive exponents",
            Self::ContractionCoefficients => "Contraction coefficients",
            Self::SpContractionCoefficients => "P(S=P) Contraction coefficients",
            Self::ScfEnergy => "SCF Energy",
            Self::TotalEnergy => "Total Energy",
            Self::AlphaOrbitalCoefficients => "Alpha MO coefficients",
            Self::BetaOrbitalCoefficients => "Beta MO coefficients",
            Self::AlphaOrbitalEnergies => "Alpha Orbital Energies",
            Self::BetaOrbitalEnergies => "Beta Orbital Energies",
            Self::DipoleMoment => "Dipole_Data",
            Self::ForceConstants => "Cartesian Force Constants",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let kind = match key {
            "Number of alpha electrons" => Self::AlphaElectronCount,
            "Number of beta electrons" => Self::BetaElectronCount,
            "Atomic numbers" => Self::AtomicNumbers,
            "Current cartesian coordinates" => Self::CartesianCoordinates,
            "Number of basis functions" => Self::BasisFunctionCount,
            "Shell types" => Self::ShellTypes,
            "Number of primitives per shell" => Self::ShellPrimitiveCounts,
            "Shell to atom map" => Self::ShellToAtomMap,
            "Primitive exponents" => Self::PrimitiveExponents,
            "Contraction coefficients" => Self::ContractionCoefficients,
            "P(S=P) Contraction coefficients" => Self::SpContractionCoefficients,
            "SCF Energy" => Self::ScfEnergy,
            "Total Energy" => Self::TotalEnergy,
            "Alpha MO coefficients" => Self::AlphaOrbitalCoefficients,
            "Beta MO coefficients" => Self::BetaOrbitalCoefficients,
            "Alpha Orbital Energies" => Self::AlphaOrbitalEnergies,
            "Beta Orbital Energies" => Self::BetaOrbitalEnergies,
            "Dipole_Data" => Self::DipoleMoment,
            "Cartesian Force Constants" => Self::ForceConstants,
            _ => return None,
        };
        Some(kind)
    }
}

/// Splits a record line into its trimmed key (columns 0..42) and raw value
/// field (columns 43..80). Short lines yield empty windows rather than
/// errors.
pub fn split_record_line(line: &str) -> (&str, &str) {
    let key = line.get(..KEY_WIDTH).unwrap_or(line).trim();
    let value = if line.len() > VALUE_START {
        let end = line.len().min(VALUE_END);
        line.get(VALUE_START..end).unwrap_or("")
    } else {
        ""
    };
    (key, value)
}

#[cfg(test)]
mod tests {
    use super::{RecordKind, split_record_line};

    const ALL_KINDS: [RecordKind; 19] = [
        RecordKind::AlphaElectronCount,
        RecordKind::BetaElectronCount,
        RecordKind::AtomicNumbers,
        RecordKind::CartesianCoordinates,
        RecordKind::BasisFunctionCount,
        RecordKind::ShellTypes,
        RecordKind::ShellPrimitiveCounts,
        RecordKind::ShellToAtomMap,
        RecordKind::PrimitiveExponents,
        RecordKind::ContractionCoefficients,
        RecordKind::SpContractionCoefficients,
        RecordKind::ScfEnergy,
        RecordKind::TotalEnergy,
        RecordKind::AlphaOrbitalCoefficients,
        RecordKind::BetaOrbitalCoefficients,
        RecordKind::AlphaOrbitalEnergies,
        RecordKind::BetaOrbitalEnergies,
        RecordKind::DipoleMoment,
        RecordKind::ForceConstants,
    ];

    #[test]
    fn every_kind_round_trips_through_its_key() {
        for kind in ALL_KINDS {
            assert_eq!(
                RecordKind::from_key(kind.key()),
                Some(kind),
                "key '{}' should map back to its kind",
                kind.key()
            );
        }
    }

    #[test]
    fn unknown_and_miscased_keys_are_rejected() {
        assert_eq!(RecordKind::from_key("Route"), None);
        assert_eq!(RecordKind::from_key("SCF ENERGY"), None);
        assert_eq!(RecordKind::from_key("shell types"), None);
        assert_eq!(RecordKind::from_key(""), None);
    }

    #[test]
    fn record_line_splitting_respects_fixed_columns() {
        let line = format!("{:<43}I   N=          12   trailing", "Atomic numbers");
        let (key, value) = split_record_line(&line);
        assert_eq!(key, "Atomic numbers");
        assert_eq!(value, "I   N=          12   trailing");

        let (short_key, short_value) = split_record_line("Total Energy");
        assert_eq!(short_key, "Total Energy");
        assert_eq!(short_value, "");
    }

    #[test]
    fn value_field_stops_at_column_eighty() {
        let mut line = format!("{:<43}", "SCF Energy");
        line.push_str(&"x".repeat(60));
        let (_, value) = split_record_line(&line);
        assert_eq!(value.len(), 80 - 43);
    }
}
