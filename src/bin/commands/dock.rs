use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use dockforge::dock::{run_docking, DockingConfig, ToolPaths, DEFAULT_EXHAUSTIVENESS};

use crate::commands::{build_name_set, parse_residue_list, run_with_spinner};

/// Runs the full docking pipeline and saves a results directory.
#[derive(Debug, Args)]
pub struct DockArgs {
    /// Receptor structure in PDB format.
    #[arg(long, value_name = "FILE")]
    pub receptor: PathBuf,
    /// Ligand as a SMILES string.
    #[arg(long, value_name = "SMILES")]
    pub smiles: String,
    /// Comma-separated binding-site residue numbers, e.g. `10,14,92`.
    #[arg(long, value_name = "RES_NUMBERS")]
    pub residues: String,
    /// Receptor chain to dock against.
    #[arg(long, value_name = "CHAIN_ID")]
    pub chain: Option<String>,
    /// Hetero residue names to keep in the receptor; repeatable.
    #[arg(long = "keep", value_name = "RES_NAME")]
    pub keep: Vec<String>,
    /// Engine search effort.
    #[arg(long, default_value_t = DEFAULT_EXHAUSTIVENESS)]
    pub exhaustiveness: u32,
    /// Path to the vina executable.
    #[arg(long, value_name = "PATH")]
    pub vina: Option<PathBuf>,
    /// Path to the vina_split executable.
    #[arg(long = "vina-split", value_name = "PATH")]
    pub vina_split: Option<PathBuf>,
    /// Path to the obabel executable.
    #[arg(long, value_name = "PATH")]
    pub obabel: Option<PathBuf>,
    /// Directory to write scores.csv, the poses, and the cleaned receptor.
    #[arg(long, value_name = "DIR")]
    pub out: PathBuf,
}

/// Runs the docking pipeline described by the arguments.
pub fn run(args: &DockArgs) -> Result<()> {
    let mut tools = ToolPaths::default();
    if let Some(vina) = &args.vina {
        tools.vina = vina.clone();
    }
    if let Some(vina_split) = &args.vina_split {
        tools.vina_split = vina_split.clone();
    }
    if let Some(obabel) = &args.obabel {
        tools.obabel = obabel.clone();
    }

    let config = DockingConfig {
        sites: parse_residue_list(&args.residues)?,
        keep_hetero: build_name_set(&args.keep),
        chain: args.chain.clone(),
        exhaustiveness: args.exhaustiveness,
    };

    let result = run_with_spinner("Docking ligand", || {
        run_docking(&tools, &args.receptor, &args.smiles, &config).context("Docking run failed")
    })?;

    result
        .save(&args.out)
        .with_context(|| format!("Failed to save results to {}", args.out.display()))?;

    println!(
        "Saved {} poses to {}",
        result.poses.len(),
        args.out.display()
    );
    Ok(())
}
