//! Code generation helpers for encounter_engine.
//!
//! This crate parses the identifier data files under `data/` and generates
//! the `SpeciesId` and `MoveId` newtypes used by the encounter engine.

mod helpers;
mod models;
mod moves;
mod species;

use std::path::Path;
use std::println;

/// Generate all code from the data directory into the output directory.
///
/// This is the main entry point called from encounter_engine's build.rs.
pub fn generate_all(out_dir: &Path, data_dir: &Path) {
    // Rerun if any data file changes
    for file in &["species.json", "moves.json"] {
        println!("cargo:rerun-if-changed={}", data_dir.join(file).display());
    }

    species::generate(out_dir, data_dir);
    moves::generate(out_dir, data_dir);
}
