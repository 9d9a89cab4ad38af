//! Serializable and human-readable projections of a parse outcome.
//!
//! `CheckpointSummary` flattens the published collections into plain values
//! suitable for JSON output; `render_human_summary` prints the same content
//! as fixed-format text lines.

use serde::Serialize;

use crate::data::{Geometry, MolecularOrbitals};
use crate::domain::{FchkResult, Spin};
use crate::parser::ParseOutcome;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointSummary {
    pub success: bool,
    pub geometries: Vec<GeometrySummary>,
    pub orbital_sets: Vec<OrbitalSetSummary>,
    pub diagnostics: Vec<DiagnosticSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometrySummary {
    pub atoms: usize,
    pub formula: String,
    pub scf_energy: Option<f64>,
    pub total_energy: Option<f64>,
    pub dipole_moment: Option<[f64; 3]>,
    pub has_hessian: bool,
    pub total_charge: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitalSetSummary {
    pub basis_functions: usize,
    pub shells: usize,
    pub alpha_electrons: usize,
    pub beta_electrons: usize,
    pub alpha_orbitals: usize,
    pub beta_orbitals: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticSummary {
    pub severity: String,
    pub message: String,
}

impl CheckpointSummary {
    pub fn from_outcome(outcome: &ParseOutcome) -> Self {
        let geometries = outcome
            .geometries
            .iter()
            .flat_map(|list| &list.items)
            .map(GeometrySummary::from_geometry)
            .collect();
        let orbital_sets = outcome
            .orbitals
            .iter()
            .flat_map(|list| &list.items)
            .map(OrbitalSetSummary::from_orbitals)
            .collect();
        let diagnostics = outcome
            .diagnostics
            .entries()
            .iter()
            .map(|diagnostic| DiagnosticSummary {
                severity: diagnostic.severity().as_str().to_string(),
                message: diagnostic.to_string(),
            })
            .collect();

        Self {
            success: outcome.success(),
            geometries,
            orbital_sets,
            diagnostics,
        }
    }

    pub fn to_json(&self, pretty: bool) -> FchkResult<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        Ok(rendered?)
    }
}

impl GeometrySummary {
    fn from_geometry(geometry: &Geometry) -> Self {
        Self {
            atoms: geometry.atom_count(),
            formula: geometry.formula(),
            scf_energy: geometry.scf_energy,
            total_energy: geometry.total_energy,
            dipole_moment: geometry.dipole_moment,
            has_hessian: geometry.has_hessian(),
            total_charge: geometry.total_charge(),
        }
    }
}

impl OrbitalSetSummary {
    fn from_orbitals(orbitals: &MolecularOrbitals) -> Self {
        Self {
            basis_functions: orbitals.basis_function_count(),
            shells: orbitals.shells.shell_count(),
            alpha_electrons: orbitals.alpha_electrons,
            beta_electrons: orbitals.beta_electrons,
            alpha_orbitals: orbitals.orbital_count(Spin::Alpha),
            beta_orbitals: orbitals.orbital_count(Spin::Beta),
        }
    }
}

pub fn render_human_summary(summary: &CheckpointSummary) -> String {
    let mut lines = Vec::new();

    lines.push("formatted checkpoint summary".to_string());
    lines.push(format!(
        "status {}",
        if summary.success { "ok" } else { "failed" }
    ));
    lines.push(format!(
        "geometries {} orbital-sets {} diagnostics {}",
        summary.geometries.len(),
        summary.orbital_sets.len(),
        summary.diagnostics.len()
    ));

    for (index, geometry) in summary.geometries.iter().enumerate() {
        lines.push(format!(
            "geometry {:>3} formula {} atoms {} charge {}",
            index + 1,
            geometry.formula,
            geometry.atoms,
            fixed(geometry.total_charge, 9, 5)
        ));
        if let Some(energy) = geometry.scf_energy {
            lines.push(format!("  scf-energy {}", fixed(energy, 16, 8)));
        }
        if let Some(energy) = geometry.total_energy {
            lines.push(format!("  total-energy {}", fixed(energy, 16, 8)));
        }
        if let Some([x, y, z]) = geometry.dipole_moment {
            lines.push(format!(
                "  dipole {} {} {}",
                fixed(x, 9, 5),
                fixed(y, 9, 5),
                fixed(z, 9, 5)
            ));
        }
        if geometry.has_hessian {
            lines.push("  hessian attached".to_string());
        }
    }

    for (index, set) in summary.orbital_sets.iter().enumerate() {
        lines.push(format!(
            "orbitals {:>3} basis {} shells {} alpha-orbitals {} beta-orbitals {} electrons {}/{}",
            index + 1,
            set.basis_functions,
            set.shells,
            set.alpha_orbitals,
            set.beta_orbitals,
            set.alpha_electrons,
            set.beta_electrons
        ));
    }

    for diagnostic in &summary.diagnostics {
        lines.push(format!("{}: {}", diagnostic.severity, diagnostic.message));
    }

    lines.join("\n")
}

fn fixed(value: f64, width: usize, precision: usize) -> String {
    format!("{value:>width$.precision$}")
}
