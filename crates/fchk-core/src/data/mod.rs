pub mod bank;
pub mod charges;
pub mod geometry;
pub mod orbitals;
pub mod shell;

pub use bank::{DataBank, GeometryList, MolecularOrbitalsList, RecordList};
pub use geometry::Geometry;
pub use orbitals::MolecularOrbitals;
pub use shell::{Primitive, Shell, ShellList, ShellType};
