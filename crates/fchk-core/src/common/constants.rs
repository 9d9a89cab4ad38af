//! Physical constants shared across the checkpoint data model.
//!
//! Values match the conventions of the quantum-chemistry packages that emit
//! formatted checkpoint files, to avoid ad hoc per-module literal constants.

pub const BOHR_TO_ANGSTROM: f64 = 0.529_177_249_f64;
pub const ANGSTROM_TO_BOHR: f64 = 1.0 / BOHR_TO_ANGSTROM;
pub const HARTREE_TO_EV: f64 = 27.211_396_1_f64;

/// Primitive Gaussian exponents carry units of inverse length squared, so a
/// coordinate rescale by `f` rescales exponents by `f^-2`.
pub const EXPONENT_BOHR_TO_ANGSTROM: f64 =
    1.0 / (BOHR_TO_ANGSTROM * BOHR_TO_ANGSTROM);
