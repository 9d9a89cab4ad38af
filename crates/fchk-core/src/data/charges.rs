//! Approximate partial atomic charges by partial equalization of orbital
//! electronegativity (Gasteiger-Marsili), over bonds inferred from covalent
//! radii.
//!
//! The model is a best-effort annotation on published geometries and never
//! fails: degenerate input (no bonds, unparameterized elements, shape
//! mismatches) yields all-zero charges.

use crate::common::elements::{covalent_radius, electronegativity_parameters};

const BOND_TOLERANCE: f64 = 1.3;
const DAMPING: f64 = 0.5;
const ROUNDS: usize = 6;
/// Cation electronegativity of hydrogen; the polynomial value underestimates
/// it, the conventional fixed value is used instead.
const HYDROGEN_CATION_CHI: f64 = 20.02;

/// Charges in electron units, one per atom, positions in Angstrom.
pub fn gasteiger_charges(atomic_numbers: &[usize], positions: &[[f64; 3]]) -> Vec<f64> {
    let atom_count = atomic_numbers.len();
    let mut charges = vec![0.0; atom_count];
    if atom_count == 0 || positions.len() != atom_count {
        return charges;
    }

    let bonds = infer_bonds(atomic_numbers, positions);
    if bonds.is_empty() {
        return charges;
    }

    let cation_chi: Vec<Option<f64>> = atomic_numbers
        .iter()
        .map(|&atomic_number| {
            electronegativity_parameters(atomic_number).map(|(a, b, c)| {
                if atomic_number == 1 {
                    HYDROGEN_CATION_CHI
                } else {
                    a + b + c
                }
            })
        })
        .collect();

    let mut damping = 1.0;
    for _ in 0..ROUNDS {
        damping *= DAMPING;

        let chi: Vec<Option<f64>> = atomic_numbers
            .iter()
            .zip(&charges)
            .map(|(&atomic_number, &charge)| electronegativity(atomic_number, charge))
            .collect();

        let mut transfer = vec![0.0; atom_count];
        for &(left, right) in &bonds {
            let (Some(chi_left), Some(chi_right)) = (chi[left], chi[right]) else {
                continue;
            };
            if chi_left == chi_right {
                continue;
            }

            // Electron density flows toward the more electronegative atom;
            // the donor side charges up positively.
            let (donor, acceptor, delta) = if chi_left < chi_right {
                (left, right, chi_right - chi_left)
            } else {
                (right, left, chi_left - chi_right)
            };
            let Some(denominator) = cation_chi[donor] else {
                continue;
            };
            if denominator <= 0.0 {
                continue;
            }

            let moved = delta / denominator * damping;
            transfer[donor] += moved;
            transfer[acceptor] -= moved;
        }

        for (charge, moved) in charges.iter_mut().zip(&transfer) {
            *charge += moved;
        }
    }

    charges
}

fn electronegativity(atomic_number: usize, charge: f64) -> Option<f64> {
    let (a, b, c) = electronegativity_parameters(atomic_number)?;
    Some(a + b * charge + c * charge * charge)
}

fn infer_bonds(atomic_numbers: &[usize], positions: &[[f64; 3]]) -> Vec<(usize, usize)> {
    let radii: Vec<Option<f64>> = atomic_numbers
        .iter()
        .map(|&atomic_number| covalent_radius(atomic_number))
        .collect();

    let mut bonds = Vec::new();
    for left in 0..atomic_numbers.len() {
        for right in (left + 1)..atomic_numbers.len() {
            let (Some(radius_left), Some(radius_right)) = (radii[left], radii[right]) else {
                continue;
            };
            let cutoff = BOND_TOLERANCE * (radius_left + radius_right);
            if distance(positions[left], positions[right]) < cutoff {
                bonds.push((left, right));
            }
        }
    }
    bonds
}

fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}
