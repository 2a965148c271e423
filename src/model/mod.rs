//! Core data structures modeling docked receptors and ligand poses.
//!
//! This module defines the foundational types for representing atoms, residues, chains,
//! and structures. These types form the backbone of `dockforge` and are consumed and
//! mutated by the PDB parsers, the cleanup and geometry operations, and the docking
//! result reduction.

pub mod atom;
pub mod chain;
pub mod residue;
pub mod structure;
pub mod types;
