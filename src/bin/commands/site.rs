use anyhow::{Context, Result};
use clap::Args;
use prettytable::{Table, format, row};

use dockforge::ops::compute_box;
use dockforge::Structure;

use crate::commands::parse_residue_list;

/// Prints the docking search box derived from a binding-site selection.
#[derive(Debug, Default, Args)]
pub struct SiteArgs {
    /// Comma-separated binding-site residue numbers, e.g. `10,14,92`.
    #[arg(long, value_name = "RES_NUMBERS")]
    pub residues: String,
}

/// Computes and prints the search box for the selection.
pub fn run(structure: &Structure, args: &SiteArgs) -> Result<()> {
    let residues = parse_residue_list(&args.residues)?;
    let search_box =
        compute_box(structure, &residues).context("Failed to compute search box")?;

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["Flag", "Value (Å)"]);
    for (flag, value) in search_box.as_args() {
        table.add_row(row![flag, format!("{value:.3}")]);
    }
    table
        .print(&mut std::io::stdout())
        .context("Failed to render search box table")?;
    Ok(())
}
