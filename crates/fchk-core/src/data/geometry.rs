//! Persisted geometry records and their attached properties.

use crate::common::elements::element_symbol;
use faer::Mat;
use std::collections::BTreeMap;

/// One geometry frame, coordinates in Angstrom. Properties are attached by
/// the dispatcher as their records stream in; charges are derived at build
/// time.
#[derive(Debug, Clone)]
pub struct Geometry {
    pub atomic_numbers: Vec<usize>,
    pub positions: Vec<[f64; 3]>,
    pub partial_charges: Vec<f64>,
    /// Hartree.
    pub scf_energy: Option<f64>,
    /// Hartree. Mirrors the SCF energy unless a dedicated total-energy record
    /// overrides it.
    pub total_energy: Option<f64>,
    /// Atomic units, as stored in the file.
    pub dipole_moment: Option<[f64; 3]>,
    /// Full symmetric `3N x 3N` force-constant matrix, expanded from the
    /// packed lower triangle in the file.
    pub hessian: Option<Mat<f64>>,
}

impl Geometry {
    pub fn new(atomic_numbers: Vec<usize>, positions: Vec<[f64; 3]>) -> Self {
        let charge_count = atomic_numbers.len();
        Self {
            atomic_numbers,
            positions,
            partial_charges: vec![0.0; charge_count],
            scf_energy: None,
            total_energy: None,
            dipole_moment: None,
            hessian: None,
        }
    }

    pub fn atom_count(&self) -> usize {
        self.atomic_numbers.len()
    }

    /// Molecular formula in Hill order: carbon, then hydrogen, then the rest
    /// alphabetically (all alphabetical when no carbon is present).
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for &atomic_number in &self.atomic_numbers {
            let symbol = element_symbol(atomic_number)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Z{}", atomic_number));
            *counts.entry(symbol).or_insert(0) += 1;
        }

        let mut parts: Vec<(String, usize)> = Vec::with_capacity(counts.len());
        if counts.contains_key("C") {
            for symbol in ["C", "H"] {
                if let Some(count) = counts.remove(symbol) {
                    parts.push((symbol.to_string(), count));
                }
            }
        }
        parts.extend(counts);

        let mut formula = String::new();
        for (symbol, count) in parts {
            formula.push_str(&symbol);
            if count > 1 {
                formula.push_str(&count.to_string());
            }
        }
        formula
    }

    pub fn total_charge(&self) -> f64 {
        self.partial_charges.iter().sum()
    }

    pub fn has_hessian(&self) -> bool {
        self.hessian.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Geometry;

    #[test]
    fn new_geometry_starts_with_zero_charges_and_no_properties() {
        let positions = vec![[0.0, 0.0, 0.0], [0.9, 0.0, 0.0], [-0.3, 0.9, 0.0]];
        let geometry = Geometry::new(vec![8, 1, 1], positions);

        assert_eq!(geometry.atom_count(), 3);
        assert_eq!(geometry.partial_charges, vec![0.0; 3]);
        assert_eq!(geometry.scf_energy, None);
        assert_eq!(geometry.total_energy, None);
        assert_eq!(geometry.dipole_moment, None);
        assert!(!geometry.has_hessian());
    }

    #[test]
    fn formula_uses_hill_order() {
        let methane = Geometry::new(vec![6, 1, 1, 1, 1], vec![[0.0; 3]; 5]);
        assert_eq!(methane.formula(), "CH4");

        let water = Geometry::new(vec![1, 8, 1], vec![[0.0; 3]; 3]);
        assert_eq!(water.formula(), "H2O");

        let ethanol = Geometry::new(vec![6, 6, 8, 1, 1, 1, 1, 1, 1], vec![[0.0; 3]; 9]);
        assert_eq!(ethanol.formula(), "C2H6O");
    }

    #[test]
    fn formula_falls_back_to_numeric_labels_for_unknown_elements() {
        let exotic = Geometry::new(vec![104], vec![[0.0; 3]]);
        assert_eq!(exotic.formula(), "Z104");
    }
}
