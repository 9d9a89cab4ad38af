//! Element dataset and lookup helpers keyed by atomic number.
//!
//! Symbols cover H through Lr; covalent radii and electronegativity
//! parameters cover the subset of elements the partial-charge model supports.

pub const MAX_ATOMIC_NUMBER: usize = 103;

const ELEMENT_SYMBOLS: [&str; MAX_ATOMIC_NUMBER] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr",
];

pub fn element_symbol(atomic_number: usize) -> Option<&'static str> {
    let index = index_for_atomic_number(atomic_number)?;
    Some(ELEMENT_SYMBOLS[index])
}

pub fn atomic_number_for_symbol(symbol: &str) -> Option<usize> {
    let normalized = symbol.trim();
    if normalized.is_empty() {
        return None;
    }

    ELEMENT_SYMBOLS
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(normalized))
        .map(|index| index + 1)
}

/// Single-bond covalent radius in Angstrom, for the bond-perception distance
/// criterion. Elements outside the table form no inferred bonds.
pub fn covalent_radius(atomic_number: usize) -> Option<f64> {
    let radius = match atomic_number {
        1 => 0.37,
        2 => 0.32,
        3 => 1.34,
        4 => 0.90,
        5 => 0.82,
        6 => 0.77,
        7 => 0.75,
        8 => 0.73,
        9 => 0.71,
        10 => 0.69,
        11 => 1.54,
        12 => 1.30,
        13 => 1.18,
        14 => 1.11,
        15 => 1.06,
        16 => 1.02,
        17 => 0.99,
        18 => 0.97,
        19 => 1.96,
        20 => 1.74,
        26 => 1.25,
        29 => 1.38,
        30 => 1.31,
        35 => 1.14,
        53 => 1.33,
        _ => return None,
    };
    Some(radius)
}

/// Polynomial electronegativity coefficients `(a, b, c)` in eV for the
/// sigma-framework Gasteiger model, `chi(q) = a + b*q + c*q^2`.
pub fn electronegativity_parameters(atomic_number: usize) -> Option<(f64, f64, f64)> {
    let parameters = match atomic_number {
        1 => (7.17, 6.24, -0.56),
        6 => (7.98, 9.18, 1.88),
        7 => (11.54, 10.82, 1.36),
        8 => (14.18, 12.92, 1.39),
        9 => (14.66, 13.85, 2.31),
        15 => (8.90, 8.24, 0.96),
        16 => (10.14, 9.13, 1.38),
        17 => (11.00, 9.69, 1.35),
        35 => (10.08, 8.47, 1.16),
        53 => (9.90, 7.96, 0.96),
        _ => return None,
    };
    Some(parameters)
}

const fn index_for_atomic_number(atomic_number: usize) -> Option<usize> {
    if atomic_number == 0 || atomic_number > MAX_ATOMIC_NUMBER {
        None
    } else {
        Some(atomic_number - 1)
    }
}
