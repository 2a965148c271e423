use anyhow::{Context, Result};
use clap::Args;

use dockforge::ops::{clean_structure, CleanConfig};
use dockforge::Structure;

use crate::commands::{build_name_set, run_with_spinner};

/// Reduces a receptor to one chain plus whitelisted hetero residues.
#[derive(Debug, Default, Args)]
pub struct CleanArgs {
    /// Chain to keep; defaults to the lexicographically smallest chain
    /// carrying standard residues.
    #[arg(long, value_name = "CHAIN_ID")]
    pub chain: Option<String>,
    /// Hetero residue names to keep (cofactors, metals); repeatable.
    #[arg(long = "keep", value_name = "RES_NAME")]
    pub keep: Vec<String>,
}

/// Produces the cleaned copy of the structure.
pub fn run(structure: &Structure, args: &CleanArgs) -> Result<Structure> {
    run_with_spinner("Cleaning receptor", || {
        let config = CleanConfig {
            chain: args.chain.clone(),
            keep_hetero: build_name_set(&args.keep),
        };
        clean_structure(structure, &config).context("Failed to clean receptor")
    })
}
