//! Docking orchestration and result reduction.
//!
//! This module drives the external AutoDock Vina engine and its companions:
//! receptor and ligand conversion through Open Babel, the synchronous docking
//! search, parsing of the engine's textual score report, and splitting of the
//! multi-pose output into individually addressable poses joined to their
//! scores. All subprocess work happens inside a per-run scratch directory so
//! concurrent runs never share mutable state.

mod convert;
mod engine;
mod error;
mod poses;
mod result;
mod scores;
mod tools;

pub use convert::{ligand_from_smiles, pdbqt_to_pdb, receptor_to_pdbqt};
pub use engine::{run_docking, DockingConfig, DEFAULT_EXHAUSTIVENESS};
pub use error::Error;
pub use poses::{split_poses, PoseFile};
pub use result::{aggregate, DockingResult, Pose};
pub use scores::{parse_scores, ScoreRow, ScoreTable};
pub use tools::ToolPaths;
