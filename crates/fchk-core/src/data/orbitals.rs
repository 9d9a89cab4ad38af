//! Molecular-orbital records combining coefficients, energies, electron
//! counts, and the owning frame's shell list.

use crate::data::shell::ShellList;
use crate::domain::Spin;
use faer::Mat;

#[derive(Debug, Clone)]
pub struct MolecularOrbitals {
    pub alpha_electrons: usize,
    pub beta_electrons: usize,
    pub alpha_energies: Vec<f64>,
    pub beta_energies: Vec<f64>,
    /// Basis functions by orbitals; column `j` holds orbital `j`'s expansion
    /// over the basis functions implied by `shells`.
    pub alpha_coefficients: Mat<f64>,
    pub beta_coefficients: Mat<f64>,
    pub shells: ShellList,
}

impl MolecularOrbitals {
    pub fn basis_function_count(&self) -> usize {
        self.shells.basis_function_count()
    }

    pub fn electron_count(&self, spin: Spin) -> usize {
        match spin {
            Spin::Alpha => self.alpha_electrons,
            Spin::Beta => self.beta_electrons,
        }
    }

    pub fn energies(&self, spin: Spin) -> &[f64] {
        match spin {
            Spin::Alpha => &self.alpha_energies,
            Spin::Beta => &self.beta_energies,
        }
    }

    pub fn coefficients(&self, spin: Spin) -> &Mat<f64> {
        match spin {
            Spin::Alpha => &self.alpha_coefficients,
            Spin::Beta => &self.beta_coefficients,
        }
    }

    pub fn orbital_count(&self, spin: Spin) -> usize {
        self.energies(spin).len()
    }

    /// Both coefficient matrices must span the shell-implied basis in rows
    /// and the per-spin orbital count in columns.
    pub fn is_consistent(&self) -> bool {
        let basis_functions = self.basis_function_count();
        basis_functions > 0
            && self.alpha_coefficients.nrows() == basis_functions
            && self.beta_coefficients.nrows() == basis_functions
            && self.alpha_coefficients.ncols() == self.alpha_energies.len()
            && self.beta_coefficients.ncols() == self.beta_energies.len()
    }
}
