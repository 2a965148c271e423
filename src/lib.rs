//! # DockForge
//!
//! **DockForge** prepares protein receptors and small-molecule ligands for molecular docking, drives an AutoDock Vina search, and reduces the raw engine output into structured, queryable results. The crate favors deterministic geometry, strong typing, and clean error surfaces so screening pipelines remain auditable from structure cleanup to scored poses.
//!
//! ## Features
//!
//! - **Structure cleanup** – Chain selection with a deterministic tie-break and hetero-residue keep-lists produce reproducible receptor inputs.
//! - **Binding-site geometry** – Axis-aligned search boxes derived from residue selections with a fixed padding margin.
//! - **Engine orchestration** – Synchronous invocation of `vina`, `vina_split`, and `obabel` with isolated per-run scratch workspaces.
//! - **Result reduction** – The engine's textual score table and multi-pose output are reduced into a [`dock::DockingResult`] joining rank-ordered scores to indexed poses.
//! - **Residue renumbering** – Global sequence alignment maps canonical residue numbering onto the as-modeled structure sequence.

mod model;

pub mod dock;
pub mod io;
pub mod ops;

pub use model::atom::Atom;
pub use model::chain::Chain;
pub use model::residue::Residue;
pub use model::structure::Structure;
pub use model::types::{Element, Point, ResidueCategory};
