//! Splitting the engine's multi-pose output into addressable pose files.
//!
//! The engine writes every binding mode into a single PDBQT. `vina_split`
//! explodes that into one `*_ligand_N.pdbqt` per mode; the pose index is
//! recovered from the filename because it is the only place the split tool
//! records it. Filenames are never trusted for ordering: the extracted index
//! is, and the returned list is sorted by it.

use crate::dock::convert::pdbqt_to_pdb;
use crate::dock::error::Error;
use crate::dock::tools::{run_tool, ToolPaths};
use std::path::{Path, PathBuf};
use std::process::Command;

/// One docked pose on disk, converted back to PDB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoseFile {
    /// Pose index extracted from the split tool's filename, 1-based.
    pub index: u32,
    /// Converted PDB file for this pose.
    pub path: PathBuf,
}

/// Splits the raw engine output and converts each pose to PDB.
///
/// Returns the poses sorted ascending by index so iteration order matches the
/// engine's rank order regardless of zero padding in the generated names.
///
/// # Errors
///
/// [`Error::EngineInvocation`] when `vina_split` or the converter fails, and
/// [`Error::AmbiguousPoseFilename`] when a generated filename carries no digit
/// run to take the index from.
pub fn split_poses(tools: &ToolPaths, raw_output: &Path) -> Result<Vec<PoseFile>, Error> {
    let mut command = Command::new(&tools.vina_split);
    command.arg("--input").arg(raw_output);
    run_tool(command)?;

    let dir = raw_output.parent().unwrap_or_else(|| Path::new("."));

    let mut poses = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.contains("_ligand_") || path.extension() != Some("pdbqt".as_ref()) {
            continue;
        }

        let index = pose_index(name)?;
        let pdb = path.with_extension("pdb");
        pdbqt_to_pdb(tools, &path, &pdb)?;
        poses.push(PoseFile { index, path: pdb });
    }

    poses.sort_by_key(|pose| pose.index);
    Ok(poses)
}

/// First run of ASCII digits in the filename, parsed as the pose index.
fn pose_index(name: &str) -> Result<u32, Error> {
    let bytes = name.as_bytes();
    let start = bytes
        .iter()
        .position(|b| b.is_ascii_digit())
        .ok_or_else(|| Error::ambiguous_pose(name))?;
    let end = bytes[start..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |n| start + n);

    name[start..end]
        .parse()
        .map_err(|_| Error::ambiguous_pose(name))
}
