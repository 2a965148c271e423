//! Preparation operations applied to structures before docking.
//!
//! Cleanup, binding-site geometry, and sequence-offset mapping live here. Each
//! operation consumes model types and produces either a new structure or a small
//! value object, reporting failures through the shared [`Error`] type.

mod align;
mod clean;
mod error;
mod site;

pub use align::{aligned_strings, diff, Mismatch};
pub use clean::{clean_pdb, clean_structure, CleanConfig};
pub use error::Error;
pub use site::{compute_box, SearchBox, BOX_PADDING};
