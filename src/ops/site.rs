//! Binding-site search-box geometry.
//!
//! The docking engine searches an axis-aligned box. The box is derived from the
//! atoms of a residue selection: its center is the mean coordinate and its size
//! is the per-axis extent scaled by a fixed padding factor so the search volume
//! strictly contains the site.

use crate::model::structure::Structure;
use crate::model::types::{Point, ResidueCategory};
use crate::ops::error::Error;
use nalgebra::Vector3;
use std::collections::BTreeSet;

/// Padding factor applied to the per-axis extent of the site.
pub const BOX_PADDING: f64 = 1.2;

/// Axis-aligned search volume handed to the docking engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchBox {
    /// Arithmetic mean of the contributing atom coordinates.
    pub center: Point,
    /// Per-axis extent (max − min) scaled by [`BOX_PADDING`].
    pub size: Vector3<f64>,
}

impl SearchBox {
    /// The six engine flags in `--center_x .. --size_z` order.
    pub fn as_args(&self) -> [(&'static str, f64); 6] {
        [
            ("--center_x", self.center.x),
            ("--center_y", self.center.y),
            ("--center_z", self.center.z),
            ("--size_x", self.size.x),
            ("--size_y", self.size.y),
            ("--size_z", self.size.z),
        ]
    }
}

/// Computes the search box around the standard-residue atoms whose residue
/// numbers are in `residues`. Chain ids are ignored; callers pass structures
/// already reduced to a single chain.
///
/// A single-atom site yields a zero-size box, which is accepted here; whether
/// a zero-volume box is usable is the docking adapter's decision.
///
/// # Errors
///
/// [`Error::EmptySite`] when no atom matches the selection (including an empty
/// selection).
pub fn compute_box(structure: &Structure, residues: &BTreeSet<i32>) -> Result<SearchBox, Error> {
    let mut count = 0usize;
    let mut sum = Vector3::zeros();
    let mut min = Vector3::repeat(f64::INFINITY);
    let mut max = Vector3::repeat(f64::NEG_INFINITY);

    for (_, residue) in structure.iter_residues_with_chain() {
        if residue.category != ResidueCategory::Standard || !residues.contains(&residue.id) {
            continue;
        }
        for atom in residue.iter_atoms() {
            sum += atom.pos.coords;
            min = min.inf(&atom.pos.coords);
            max = max.sup(&atom.pos.coords);
            count += 1;
        }
    }

    if count == 0 {
        return Err(Error::EmptySite);
    }

    Ok(SearchBox {
        center: Point::from(sum / count as f64),
        size: (max - min) * BOX_PADDING,
    })
}
