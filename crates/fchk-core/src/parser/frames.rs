//! Transient staging for the records of one parse, mutated by the dispatcher
//! and consumed by the builders at frame boundaries.

/// Geometry under accumulation. Atomic numbers appear once per file;
/// coordinates are replaced at every frame boundary.
#[derive(Debug, Default)]
pub(super) struct GeometryFrame {
    pub atomic_numbers: Vec<usize>,
    /// Flat `3N` Cartesian coordinates in Bohr, as read.
    pub coordinates: Vec<f64>,
}

/// Basis metadata under accumulation. Never reset: the format emits shell
/// data once and reuses it for every frame.
#[derive(Debug, Default)]
pub(super) struct BasisFrame {
    pub shell_types: Vec<i64>,
    pub primitive_counts: Vec<usize>,
    /// 1-based atom index per shell.
    pub atom_map: Vec<usize>,
    /// Flat primitive exponents in Bohr^-2, concatenated in shell order.
    pub exponents: Vec<f64>,
    pub coefficients: Vec<f64>,
    /// Secondary coefficients for combined S+P shells; empty when the basis
    /// has none.
    pub sp_coefficients: Vec<f64>,
}

impl BasisFrame {
    pub fn total_primitives(&self) -> usize {
        self.primitive_counts.iter().sum()
    }
}

/// Orbital data under accumulation. Alpha records seed the beta side so
/// closed-shell files need no beta block; an explicit beta record overwrites
/// the copy.
#[derive(Debug, Default)]
pub(super) struct OrbitalFrame {
    pub alpha_electrons: usize,
    pub beta_electrons: usize,
    pub alpha_coefficients: Vec<f64>,
    pub beta_coefficients: Vec<f64>,
    pub alpha_energies: Vec<f64>,
    pub beta_energies: Vec<f64>,
}

impl OrbitalFrame {
    /// Frame-boundary reset: coefficients and energies are per-frame,
    /// electron counts hold for the whole file.
    pub fn clear_frame_data(&mut self) {
        self.alpha_coefficients.clear();
        self.beta_coefficients.clear();
        self.alpha_energies.clear();
        self.beta_energies.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{BasisFrame, OrbitalFrame};

    #[test]
    fn clearing_frame_data_keeps_electron_counts() {
        let mut frame = OrbitalFrame {
            alpha_electrons: 5,
            beta_electrons: 4,
            alpha_coefficients: vec![1.0],
            beta_coefficients: vec![1.0],
            alpha_energies: vec![-0.5],
            beta_energies: vec![-0.4],
        };

        frame.clear_frame_data();

        assert_eq!(frame.alpha_electrons, 5);
        assert_eq!(frame.beta_electrons, 4);
        assert!(frame.alpha_coefficients.is_empty());
        assert!(frame.beta_coefficients.is_empty());
        assert!(frame.alpha_energies.is_empty());
        assert!(frame.beta_energies.is_empty());
    }

    #[test]
    fn total_primitives_sums_per_shell_counts() {
        let frame = BasisFrame {
            primitive_counts: vec![3, 1, 2],
            ..BasisFrame::default()
        };
        assert_eq!(frame.total_primitives(), 6);
    }
}
