//! Receptor cleanup: chain selection and hetero-residue filtering.
//!
//! Cleaning reduces a raw structure to a single chain of standard residues plus a
//! whitelist of hetero residues, which is the input every later docking stage
//! assumes. The selected chain defaults to the lexicographically smallest chain
//! id carrying standard residues, so repeated runs over the same file are
//! reproducible regardless of record order.

use crate::io;
use crate::model::structure::Structure;
use crate::model::types::ResidueCategory;
use crate::ops::error::Error;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Controls for the cleanup pass.
#[derive(Debug, Clone, Default)]
pub struct CleanConfig {
    /// Chain to keep. When `None`, the lexicographically smallest chain id
    /// with standard residues is selected.
    pub chain: Option<String>,
    /// Hetero residue names to retain; every other hetero residue is discarded.
    pub keep_hetero: HashSet<String>,
}

impl CleanConfig {
    /// Convenience constructor for a keep-list-only cleanup with default chain
    /// selection.
    pub fn keeping<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            chain: None,
            keep_hetero: names.into_iter().map(Into::into).collect(),
        }
    }
}

/// Produces a cleaned copy of the structure.
///
/// Standard residues are restricted to the selected chain. Hetero residues are
/// restricted to that chain only when at least one hetero residue carries its
/// id; otherwise hetero residues from every chain remain candidates, which
/// handles single-chain files whose hetero records are tagged inconsistently.
/// Hetero residues whose names are not in the keep-list are dropped entirely.
///
/// # Errors
///
/// [`Error::MalformedStructure`] when the structure has no standard residues,
/// [`Error::ChainNotFound`] when an explicitly requested chain has none.
pub fn clean_structure(structure: &Structure, config: &CleanConfig) -> Result<Structure, Error> {
    let selected = select_chain(structure, config.chain.as_deref())?;

    let hetero_chains = structure.chains_with_category(ResidueCategory::Hetero);
    let filter_hetero_by_chain = hetero_chains.iter().any(|id| *id == selected);

    let mut cleaned = structure.clone();
    for chain in cleaned.iter_chains_mut() {
        let is_selected = chain.id == selected;
        chain.retain_residues(|residue| match residue.category {
            ResidueCategory::Standard => is_selected,
            ResidueCategory::Hetero => {
                let chain_ok = !filter_hetero_by_chain || is_selected;
                chain_ok && config.keep_hetero.contains(residue.name.as_str())
            }
        });
    }
    cleaned.prune_empty_chains();

    Ok(cleaned)
}

/// Cleans a PDB file on disk and writes the result to `save_path`.
///
/// Returns the save path so callers can thread it into the next stage.
pub fn clean_pdb(
    source: &Path,
    save_path: &Path,
    config: &CleanConfig,
) -> Result<PathBuf, Error> {
    let structure = io::read_pdb_file(source)?;
    let cleaned = clean_structure(&structure, config)?;
    io::write_pdb_file(save_path, &cleaned)?;
    Ok(save_path.to_path_buf())
}

fn select_chain(structure: &Structure, requested: Option<&str>) -> Result<String, Error> {
    let mut candidates = structure.chains_with_category(ResidueCategory::Standard);
    if candidates.is_empty() {
        return Err(Error::MalformedStructure);
    }

    match requested {
        Some(id) => {
            if candidates.iter().any(|c| *c == id) {
                Ok(id.to_string())
            } else {
                Err(Error::chain_not_found(id))
            }
        }
        None => {
            candidates.sort_unstable();
            Ok(candidates[0].to_string())
        }
    }
}
