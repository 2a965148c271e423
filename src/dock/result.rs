//! The reduced docking result: poses joined to scores, plus export.

use crate::dock::error::Error;
use crate::dock::poses::PoseFile;
use crate::dock::scores::ScoreTable;
use crate::io;
use crate::model::structure::Structure;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// A single docked pose with its parsed structure.
#[derive(Debug, Clone)]
pub struct Pose {
    /// Pose index recovered from the split tool's filename, 1-based.
    pub index: u32,
    /// File name the pose was written under by the split/convert stage.
    pub file_name: String,
    pub structure: Structure,
}

/// Everything a docking run produces, reduced to one value.
///
/// Pose indices ascend in lockstep with the score table's rank order: the
/// n-th smallest pose index corresponds to the n-th score row. That pairing is
/// validated at construction, so lookups here cannot go out of sync.
#[derive(Debug, Clone)]
pub struct DockingResult {
    /// Cleaned receptor the poses were docked against.
    pub receptor: Structure,
    pub poses: BTreeMap<u32, Pose>,
    pub scores: ScoreTable,
}

/// Joins pose files and score rows into a [`DockingResult`].
///
/// Pose structures are parsed from disk here. The pose and score cardinalities
/// must agree; a mismatch means the engine output and its report diverged, and
/// silently pairing them would attach wrong affinities to poses.
///
/// # Errors
///
/// [`Error::PoseCountMismatch`] on diverging cardinalities, or a structure
/// error when a pose PDB fails to parse.
pub fn aggregate(
    receptor: Structure,
    pose_files: Vec<PoseFile>,
    scores: ScoreTable,
) -> Result<DockingResult, Error> {
    if pose_files.len() != scores.len() {
        return Err(Error::PoseCountMismatch {
            poses: pose_files.len(),
            scores: scores.len(),
        });
    }

    let mut poses = BTreeMap::new();
    for file in pose_files {
        let structure = io::read_pdb_file(&file.path)?;
        let file_name = file
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        poses.insert(
            file.index,
            Pose {
                index: file.index,
                file_name,
                structure,
            },
        );
    }

    Ok(DockingResult {
        receptor,
        poses,
        scores,
    })
}

impl DockingResult {
    /// Binding affinity (kcal/mol) for the pose with the given index.
    pub fn affinity_for(&self, index: u32) -> Option<f64> {
        self.poses
            .keys()
            .position(|k| *k == index)
            .map(|rank| self.scores[rank].affinity)
    }

    /// Poses keyed by file name, each paired with its affinity.
    pub fn by_file_name(&self) -> BTreeMap<&str, (&Pose, f64)> {
        self.poses
            .values()
            .zip(&self.scores)
            .map(|(pose, row)| (pose.file_name.as_str(), (pose, row.affinity)))
            .collect()
    }

    /// Writes the result out as a directory: `scores.csv`, one PDB per pose
    /// under its original file name, and the receptor as `clean_receptor.pdb`.
    pub fn save(&self, dir: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(dir)?;

        let mut csv = std::fs::File::create(dir.join("scores.csv"))?;
        writeln!(
            csv,
            "index,pose rank,binding affinity (kcal/mol),\
             rmsd to best upper bound,rmsd to best lower bound"
        )?;
        for (i, row) in self.scores.iter().enumerate() {
            writeln!(
                csv,
                "{i},{},{},{},{}",
                row.mode, row.affinity, row.rmsd_ub, row.rmsd_lb
            )?;
        }

        for pose in self.poses.values() {
            io::write_pdb_file(&dir.join(&pose.file_name), &pose.structure)?;
        }
        io::write_pdb_file(&dir.join("clean_receptor.pdb"), &self.receptor)?;

        Ok(())
    }
}
