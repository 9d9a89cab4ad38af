//! Builders that promote completed frame accumulators into persisted
//! records. Each step returns its failure as a diagnostic value; the
//! dispatcher decides whether that failure is fatal or frame-local.

use super::frames::{BasisFrame, GeometryFrame, OrbitalFrame};
use crate::common::constants::{BOHR_TO_ANGSTROM, EXPONENT_BOHR_TO_ANGSTROM};
use crate::data::charges::gasteiger_charges;
use crate::data::{Geometry, MolecularOrbitals, Primitive, Shell, ShellList, ShellType};
use crate::domain::ParseDiagnostic;
use faer::Mat;

/// Promotes the geometry accumulator: shape check, Bohr to Angstrom, derived
/// partial charges. Failure here is fatal to the whole parse.
pub(super) fn build_geometry(
    frame: &GeometryFrame,
    line: usize,
) -> Result<Geometry, ParseDiagnostic> {
    let atoms = frame.atomic_numbers.len();
    if atoms == 0 || frame.coordinates.len() != 3 * atoms {
        return Err(ParseDiagnostic::GeometryShapeMismatch {
            line,
            atoms,
            coordinates: frame.coordinates.len(),
        });
    }

    let positions: Vec<[f64; 3]> = frame
        .coordinates
        .chunks_exact(3)
        .map(|chunk| {
            [
                chunk[0] * BOHR_TO_ANGSTROM,
                chunk[1] * BOHR_TO_ANGSTROM,
                chunk[2] * BOHR_TO_ANGSTROM,
            ]
        })
        .collect();

    let mut geometry = Geometry::new(frame.atomic_numbers.clone(), positions);
    geometry.partial_charges = gasteiger_charges(&geometry.atomic_numbers, &geometry.positions);
    Ok(geometry)
}

/// Builds the ordered shell list for one frame against its geometry.
/// Validates the accumulator arrays first; any failure is local to the
/// frame's orbital construction.
pub(super) fn build_shell_list(
    basis: &BasisFrame,
    geometry: &Geometry,
    line: usize,
) -> Result<ShellList, ParseDiagnostic> {
    validate_basis_arrays(basis, geometry.atom_count(), line)?;

    let mut shells = Vec::with_capacity(basis.shell_types.len());
    let mut cursor = PrimitiveCursor::new(basis);

    let per_shell = basis
        .shell_types
        .iter()
        .zip(&basis.primitive_counts)
        .zip(&basis.atom_map);
    for (index, ((&code, &primitive_count), &atom)) in per_shell.enumerate() {
        let center = geometry.positions[atom - 1];
        let segment =
            cursor
                .take(primitive_count)
                .ok_or(ParseDiagnostic::PrimitiveTotalMismatch {
                    line,
                    total: basis.total_primitives(),
                    exponents: basis.exponents.len(),
                    coefficients: basis.coefficients.len(),
                })?;

        if code == -1 {
            // A combined shell shares its exponents between an S part using
            // the primary coefficients and a P part using the secondary set.
            let Some(sp_coefficients) = segment.sp_coefficients else {
                return Err(ParseDiagnostic::SpCoefficientMismatch {
                    line,
                    expected: basis.total_primitives(),
                    found: basis.sp_coefficients.len(),
                });
            };
            shells.push(make_shell(
                ShellType::S,
                center,
                segment.exponents,
                segment.coefficients,
            ));
            shells.push(make_shell(
                ShellType::P,
                center,
                segment.exponents,
                sp_coefficients,
            ));
            continue;
        }

        let shell_type = match code {
            0 => ShellType::S,
            1 => ShellType::P,
            -2 => ShellType::SphericalD,
            2 => ShellType::CartesianD,
            -3 => ShellType::SphericalF,
            3 => ShellType::CartesianF,
            -4 => ShellType::SphericalG,
            4 => ShellType::CartesianG,
            unknown => {
                return Err(ParseDiagnostic::UnknownShellType {
                    line,
                    shell: index,
                    code: unknown,
                });
            }
        };
        shells.push(make_shell(
            shell_type,
            center,
            segment.exponents,
            segment.coefficients,
        ));
    }

    Ok(ShellList { shells })
}

/// Combines the orbital accumulator with the frame's shell list. A frame
/// without alpha orbital energies simply carries no orbital data.
pub(super) fn build_molecular_orbitals(
    orbital: &OrbitalFrame,
    basis: &BasisFrame,
    geometry: &Geometry,
    line: usize,
) -> Result<Option<MolecularOrbitals>, ParseDiagnostic> {
    if orbital.alpha_energies.is_empty() {
        return Ok(None);
    }

    let shells = build_shell_list(basis, geometry, line)?;
    let basis_functions = shells.basis_function_count();

    for (energies, coefficients) in [
        (&orbital.alpha_energies, &orbital.alpha_coefficients),
        (&orbital.beta_energies, &orbital.beta_coefficients),
    ] {
        if basis_functions == 0 || coefficients.len() != basis_functions * energies.len() {
            return Err(ParseDiagnostic::OrbitalShapeMismatch {
                line,
                basis_functions,
                orbitals: energies.len(),
                coefficients: coefficients.len(),
            });
        }
    }

    let record = MolecularOrbitals {
        alpha_electrons: orbital.alpha_electrons,
        beta_electrons: orbital.beta_electrons,
        alpha_energies: orbital.alpha_energies.clone(),
        beta_energies: orbital.beta_energies.clone(),
        alpha_coefficients: coefficient_matrix(&orbital.alpha_coefficients, basis_functions),
        beta_coefficients: coefficient_matrix(&orbital.beta_coefficients, basis_functions),
        shells,
    };
    Ok(Some(record))
}

/// Expands a packed lower triangle into the full symmetric `3N x 3N`
/// force-constant matrix, or `None` when the length does not fit.
pub(super) fn expand_hessian(packed: &[f64], atom_count: usize) -> Option<Mat<f64>> {
    let dimension = 3 * atom_count;
    if dimension == 0 || packed.len() != hessian_triangle_length(atom_count) {
        return None;
    }

    let mut matrix = Mat::zeros(dimension, dimension);
    let mut index = 0;
    for row in 0..dimension {
        for col in 0..=row {
            matrix[(row, col)] = packed[index];
            matrix[(col, row)] = packed[index];
            index += 1;
        }
    }
    Some(matrix)
}

pub(super) fn hessian_triangle_length(atom_count: usize) -> usize {
    let dimension = 3 * atom_count;
    dimension * (dimension + 1) / 2
}

fn validate_basis_arrays(
    basis: &BasisFrame,
    atom_count: usize,
    line: usize,
) -> Result<(), ParseDiagnostic> {
    for (shell, &atom) in basis.atom_map.iter().enumerate() {
        if atom == 0 || atom > atom_count {
            return Err(ParseDiagnostic::ShellAtomOutOfRange {
                line,
                shell,
                atom,
                atom_count,
            });
        }
    }

    let types = basis.shell_types.len();
    if basis.atom_map.len() != types || basis.primitive_counts.len() != types {
        return Err(ParseDiagnostic::ShellCountMismatch {
            line,
            types,
            atom_maps: basis.atom_map.len(),
            primitive_counts: basis.primitive_counts.len(),
        });
    }

    let total = basis.total_primitives();
    if basis.exponents.len() != total || basis.coefficients.len() != total {
        return Err(ParseDiagnostic::PrimitiveTotalMismatch {
            line,
            total,
            exponents: basis.exponents.len(),
            coefficients: basis.coefficients.len(),
        });
    }

    if !basis.sp_coefficients.is_empty() && basis.sp_coefficients.len() != total {
        return Err(ParseDiagnostic::SpCoefficientMismatch {
            line,
            expected: total,
            found: basis.sp_coefficients.len(),
        });
    }

    Ok(())
}

fn make_shell(
    shell_type: ShellType,
    center: [f64; 3],
    exponents: &[f64],
    coefficients: &[f64],
) -> Shell {
    let primitives = exponents
        .iter()
        .zip(coefficients)
        .map(|(&exponent, &coefficient)| Primitive {
            exponent: exponent * EXPONENT_BOHR_TO_ANGSTROM,
            coefficient,
        })
        .collect();
    Shell {
        shell_type,
        center,
        primitives,
    }
}

/// Orbital coefficients arrive orbital-major: each orbital's expansion over
/// every basis function, orbital after orbital.
fn coefficient_matrix(flat: &[f64], basis_functions: usize) -> Mat<f64> {
    let orbitals = flat.len() / basis_functions;
    let mut matrix = Mat::zeros(basis_functions, orbitals);
    for orbital in 0..orbitals {
        for function in 0..basis_functions {
            matrix[(function, orbital)] = flat[orbital * basis_functions + function];
        }
    }
    matrix
}

/// Sequential, bounds-checked consumption of the flat primitive arrays, one
/// segment per shell, never reset.
struct PrimitiveCursor<'a> {
    exponents: &'a [f64],
    coefficients: &'a [f64],
    sp_coefficients: &'a [f64],
    position: usize,
}

struct PrimitiveSegment<'a> {
    exponents: &'a [f64],
    coefficients: &'a [f64],
    sp_coefficients: Option<&'a [f64]>,
}

impl<'a> PrimitiveCursor<'a> {
    fn new(basis: &'a BasisFrame) -> Self {
        Self {
            exponents: &basis.exponents,
            coefficients: &basis.coefficients,
            sp_coefficients: &basis.sp_coefficients,
            position: 0,
        }
    }

    fn take(&mut self, count: usize) -> Option<PrimitiveSegment<'a>> {
        let end = self.position.checked_add(count)?;
        let exponents = self.exponents.get(self.position..end)?;
        let coefficients = self.coefficients.get(self.position..end)?;
        let sp_coefficients = if self.sp_coefficients.is_empty() {
            None
        } else {
            self.sp_coefficients.get(self.position..end)
        };
        self.position = end;
        Some(PrimitiveSegment {
            exponents,
            coefficients,
            sp_coefficients,
        })
    }
}
