//! Parser and data model for Gaussian-style formatted checkpoint files.
//!
//! The crate reads the fixed-column record stream of an `.fchk` file in one
//! forward pass, accumulates per-frame state, and publishes geometry and
//! molecular-orbital collections with derived properties attached: unit
//! conversion to Angstrom, Gasteiger partial charges, expanded Hessians, and
//! per-frame shell lists. Malformed input surfaces as an ordered diagnostic
//! list rather than a panic; error-severity entries fail the parse as a
//! whole, warning-severity entries only drop the affected frame's orbitals.

pub mod common;
pub mod data;
pub mod domain;
pub mod parser;
pub mod summary;

pub use data::DataBank;
pub use parser::{ParseOutcome, parse_checkpoint, parse_checkpoint_file};
pub use summary::{CheckpointSummary, render_human_summary};
