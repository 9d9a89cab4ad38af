//! Formatted-checkpoint parsing.
//!
//! One forward pass over the record lines. The dispatcher stages data in
//! frame accumulators, promotes them through the builders at each frame
//! boundary ("Current cartesian coordinates") and at end of stream, and
//! collects diagnostics along the way. Collections are published only when
//! no error-severity diagnostic was recorded; a fatal condition stops the
//! pass immediately.

mod arrays;
mod builders;
mod frames;
mod records;
mod stream;

use std::path::Path;

use crate::data::{DataBank, GeometryList, MolecularOrbitalsList};
use crate::domain::{DiagnosticSink, FchkError, FchkResult, ParseDiagnostic};
use arrays::{parse_double_token, read_double_array, read_integer_array, read_unsigned_array};
use builders::{build_geometry, build_molecular_orbitals, expand_hessian, hessian_triangle_length};
use frames::{BasisFrame, GeometryFrame, OrbitalFrame};
use records::{RecordKind, split_record_line};
use stream::LineStream;

/// Everything one parse produced. Collections are `None` when the parse
/// failed or when they ended up empty; the diagnostic list is always
/// complete.
#[derive(Debug)]
pub struct ParseOutcome {
    pub geometries: Option<GeometryList>,
    pub orbitals: Option<MolecularOrbitalsList>,
    pub diagnostics: DiagnosticSink,
}

impl ParseOutcome {
    /// True iff no error-severity diagnostic was recorded. Warnings from
    /// frame-local failures leave success intact.
    pub fn success(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// Moves the collections into the bank and reports the success flag.
    /// A failed parse carries no collections, so publishing it is a no-op
    /// that returns false.
    pub fn publish_into(&mut self, bank: &mut DataBank) -> bool {
        if let Some(geometries) = self.geometries.take() {
            bank.publish_geometries(geometries);
        }
        if let Some(orbitals) = self.orbitals.take() {
            bank.publish_orbitals(orbitals);
        }
        self.success()
    }
}

/// Parses checkpoint text already in memory.
pub fn parse_checkpoint(content: &str) -> ParseOutcome {
    CheckpointParser::new(content).run()
}

/// Reads a checkpoint file and parses its contents.
pub fn parse_checkpoint_file(path: impl AsRef<Path>) -> FchkResult<ParseOutcome> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| FchkError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_checkpoint(&content))
}

/// Dispatcher state for one pass: the line source, the three accumulators,
/// the growing output collections, and the diagnostic sink.
struct CheckpointParser<'a> {
    stream: LineStream<'a>,
    sink: DiagnosticSink,
    geometry_frame: GeometryFrame,
    basis: BasisFrame,
    orbital: OrbitalFrame,
    geometries: GeometryList,
    orbitals: MolecularOrbitalsList,
}

impl<'a> CheckpointParser<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            stream: LineStream::new(content),
            sink: DiagnosticSink::new(),
            geometry_frame: GeometryFrame::default(),
            basis: BasisFrame::default(),
            orbital: OrbitalFrame::default(),
            geometries: GeometryList::new(),
            orbitals: MolecularOrbitalsList::new(),
        }
    }

    fn run(mut self) -> ParseOutcome {
        while let Some(line) = self.stream.next_line() {
            let (key, value) = split_record_line(line);
            let Some(kind) = RecordKind::from_key(key) else {
                continue;
            };

            // A repeated coordinate record opens a new frame; the prior
            // frame's orbital data is promoted first.
            if kind == RecordKind::CartesianCoordinates {
                self.finish_frame();
            }

            let before = self.sink.len();
            if let Err(diagnostic) = self.handle_record(kind, value) {
                // One message per failed record: keep the reader's more
                // specific diagnostic when it already logged one.
                if self.sink.len() == before {
                    self.sink.record(diagnostic);
                }
                return self.finish();
            }
        }

        self.finish_frame();
        self.finish()
    }

    fn handle_record(&mut self, kind: RecordKind, value: &str) -> Result<(), ParseDiagnostic> {
        match kind {
            RecordKind::AlphaElectronCount => {
                self.orbital.alpha_electrons =
                    scalar_unsigned(value).ok_or_else(|| self.malformed(kind))?;
            }
            RecordKind::BetaElectronCount => {
                self.orbital.beta_electrons =
                    scalar_unsigned(value).ok_or_else(|| self.malformed(kind))?;
            }
            RecordKind::AtomicNumbers => {
                let count = array_count(value).ok_or_else(|| self.malformed(kind))?;
                self.geometry_frame.atomic_numbers =
                    read_unsigned_array(&mut self.stream, count, &mut self.sink);
            }
            RecordKind::CartesianCoordinates => {
                let count = array_count(value).ok_or_else(|| self.malformed(kind))?;
                self.geometry_frame.coordinates =
                    read_double_array(&mut self.stream, count, &mut self.sink);
                let line = self.stream.line_number();
                let geometry = build_geometry(&self.geometry_frame, line)?;
                self.geometries.push(geometry);
            }
            // The basis size is derived from the shell list, never stored.
            RecordKind::BasisFunctionCount => {}
            RecordKind::ShellTypes => {
                let count = array_count(value).ok_or_else(|| self.malformed(kind))?;
                self.basis.shell_types =
                    read_integer_array(&mut self.stream, count, &mut self.sink);
            }
            RecordKind::ShellPrimitiveCounts => {
                let count = array_count(value).ok_or_else(|| self.malformed(kind))?;
                self.basis.primitive_counts =
                    read_unsigned_array(&mut self.stream, count, &mut self.sink);
            }
            RecordKind::ShellToAtomMap => {
                let count = array_count(value).ok_or_else(|| self.malformed(kind))?;
                self.basis.atom_map = read_unsigned_array(&mut self.stream, count, &mut self.sink);
            }
            RecordKind::PrimitiveExponents => {
                let count = array_count(value).ok_or_else(|| self.malformed(kind))?;
                self.basis.exponents = read_double_array(&mut self.stream, count, &mut self.sink);
            }
            RecordKind::ContractionCoefficients => {
                let count = array_count(value).ok_or_else(|| self.malformed(kind))?;
                self.basis.coefficients =
                    read_double_array(&mut self.stream, count, &mut self.sink);
            }
            RecordKind::SpContractionCoefficients => {
                let count = array_count(value).ok_or_else(|| self.malformed(kind))?;
                self.basis.sp_coefficients =
                    read_double_array(&mut self.stream, count, &mut self.sink);
            }
            RecordKind::ScfEnergy => {
                let line = self.stream.line_number();
                let Some(geometry) = self.geometries.last_mut() else {
                    return Err(ParseDiagnostic::RecordBeforeGeometry {
                        line,
                        key: kind.key(),
                    });
                };
                let Some(energy) = scalar_double(value) else {
                    return Err(ParseDiagnostic::MalformedRecord {
                        line,
                        key: kind.key(),
                    });
                };
                geometry.scf_energy = Some(energy);
                geometry.total_energy = Some(energy);
            }
            RecordKind::TotalEnergy => {
                let line = self.stream.line_number();
                let Some(geometry) = self.geometries.last_mut() else {
                    return Err(ParseDiagnostic::RecordBeforeGeometry {
                        line,
                        key: kind.key(),
                    });
                };
                let Some(energy) = scalar_double(value) else {
                    return Err(ParseDiagnostic::MalformedRecord {
                        line,
                        key: kind.key(),
                    });
                };
                geometry.total_energy = Some(energy);
            }
            RecordKind::AlphaOrbitalCoefficients => {
                let count = array_count(value).ok_or_else(|| self.malformed(kind))?;
                let values = read_double_array(&mut self.stream, count, &mut self.sink);
                self.orbital.beta_coefficients = values.clone();
                self.orbital.alpha_coefficients = values;
            }
            RecordKind::BetaOrbitalCoefficients => {
                let count = array_count(value).ok_or_else(|| self.malformed(kind))?;
                self.orbital.beta_coefficients =
                    read_double_array(&mut self.stream, count, &mut self.sink);
            }
            RecordKind::AlphaOrbitalEnergies => {
                let count = array_count(value).ok_or_else(|| self.malformed(kind))?;
                let values = read_double_array(&mut self.stream, count, &mut self.sink);
                self.orbital.beta_energies = values.clone();
                self.orbital.alpha_energies = values;
            }
            RecordKind::BetaOrbitalEnergies => {
                let count = array_count(value).ok_or_else(|| self.malformed(kind))?;
                self.orbital.beta_energies =
                    read_double_array(&mut self.stream, count, &mut self.sink);
            }
            RecordKind::DipoleMoment => {
                let line = self.stream.line_number();
                if self.geometries.last().is_none() {
                    return Err(ParseDiagnostic::RecordBeforeGeometry {
                        line,
                        key: kind.key(),
                    });
                }
                let count = array_count(value).ok_or_else(|| self.malformed(kind))?;
                let values = read_double_array(&mut self.stream, count, &mut self.sink);
                if values.len() != 3 {
                    return Err(self.malformed(kind));
                }
                if let Some(geometry) = self.geometries.last_mut() {
                    geometry.dipole_moment = Some([values[0], values[1], values[2]]);
                }
            }
            RecordKind::ForceConstants => {
                let line = self.stream.line_number();
                if self.geometries.last().is_none() {
                    return Err(ParseDiagnostic::RecordBeforeGeometry {
                        line,
                        key: kind.key(),
                    });
                }
                let count = array_count(value).ok_or_else(|| self.malformed(kind))?;
                let before = self.sink.len();
                let packed = read_double_array(&mut self.stream, count, &mut self.sink);
                if self.sink.len() > before {
                    // The reader logged the failure; nothing left to attach.
                    return Ok(());
                }
                let line = self.stream.line_number();
                if let Some(geometry) = self.geometries.last_mut() {
                    let atoms = geometry.atom_count();
                    match expand_hessian(&packed, atoms) {
                        Some(matrix) => geometry.hessian = Some(matrix),
                        None => self.sink.record(ParseDiagnostic::HessianSizeMismatch {
                            line,
                            atoms,
                            expected: hessian_triangle_length(atoms),
                            found: packed.len(),
                        }),
                    }
                }
            }
        }
        Ok(())
    }

    /// Promotes the accumulated orbital data of the frame that just ended.
    /// Failures here are frame-local: the diagnostic is a warning and the
    /// pass continues.
    fn finish_frame(&mut self) {
        let line = self.stream.line_number();
        let Some(geometry) = self.geometries.last() else {
            return;
        };
        match build_molecular_orbitals(&self.orbital, &self.basis, geometry, line) {
            Ok(Some(record)) => self.orbitals.push(record),
            Ok(None) => {}
            Err(diagnostic) => self.sink.record(diagnostic),
        }
        self.orbital.clear_frame_data();
    }

    fn finish(self) -> ParseOutcome {
        let failed = self.sink.has_errors();
        let mut geometries = None;
        let mut orbitals = None;
        if !failed {
            if !self.geometries.is_empty() {
                geometries = Some(self.geometries);
            }
            if !self.orbitals.is_empty() {
                orbitals = Some(self.orbitals);
            }
        }
        ParseOutcome {
            geometries,
            orbitals,
            diagnostics: self.sink,
        }
    }

    fn malformed(&self, kind: RecordKind) -> ParseDiagnostic {
        ParseDiagnostic::MalformedRecord {
            line: self.stream.line_number(),
            key: kind.key(),
        }
    }
}

/// Scalar records carry their value as token 1 of the value field; token 0
/// is the type marker.
fn scalar_double(value: &str) -> Option<f64> {
    parse_double_token(value.split_whitespace().nth(1)?)
}

fn scalar_unsigned(value: &str) -> Option<usize> {
    value.split_whitespace().nth(1)?.parse().ok()
}

/// Array records carry their element count as token 2, after the type
/// marker and the `N=` marker.
fn array_count(value: &str) -> Option<usize> {
    value.split_whitespace().nth(2)?.parse().ok()
}
