//! Format conversion through the Open Babel command line.
//!
//! The docking engine only consumes PDBQT and the rest of the pipeline only
//! speaks PDB, so every run brackets the engine with conversions. Open Babel
//! also carries the ligand from SMILES to an embedded 3D conformer, which the
//! engine needs as a starting point.

use crate::dock::error::Error;
use crate::dock::tools::{run_tool, ToolPaths};
use std::path::Path;
use std::process::Command;

/// Converts a cleaned receptor PDB into rigid-receptor PDBQT.
///
/// `-xr` drops the flexibility annotations a receptor must not carry and `-h`
/// adds hydrogens, which the engine's scoring function expects.
pub fn receptor_to_pdbqt(tools: &ToolPaths, pdb: &Path, out: &Path) -> Result<(), Error> {
    let mut command = Command::new(&tools.obabel);
    command
        .arg(pdb)
        .arg("-O")
        .arg(out)
        .args(["-xr", "-h"]);
    run_tool(command)?;
    Ok(())
}

/// Builds a docking-ready ligand PDBQT from a SMILES string.
///
/// `-r` strips salts down to the largest fragment, `-h` adds hydrogens and
/// `--gen3d` embeds a 3D conformer.
pub fn ligand_from_smiles(tools: &ToolPaths, smiles: &str, out: &Path) -> Result<(), Error> {
    let mut command = Command::new(&tools.obabel);
    command
        .arg(format!("-:{smiles}"))
        .arg("-O")
        .arg(out)
        .args(["-r", "-h", "--gen3d"]);
    run_tool(command)?;
    Ok(())
}

/// Converts an engine output PDBQT (a docked pose) back to plain PDB.
pub fn pdbqt_to_pdb(tools: &ToolPaths, pdbqt: &Path, out: &Path) -> Result<(), Error> {
    let mut command = Command::new(&tools.obabel);
    command.arg(pdbqt).arg("-O").arg(out);
    run_tool(command)?;
    Ok(())
}
