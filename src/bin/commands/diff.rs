use anyhow::{Context, Result};
use clap::Args;
use prettytable::{Table, format, row};

use dockforge::ops::{aligned_strings, diff};

/// Reports mismatches between a canonical and an as-modeled sequence.
#[derive(Debug, Default, Args)]
pub struct DiffArgs {
    /// Canonical (expected) one-letter sequence.
    #[arg(long, value_name = "SEQ")]
    pub canonical: String,
    /// As-modeled (observed) one-letter sequence.
    #[arg(long, value_name = "SEQ")]
    pub modeled: String,
}

/// Aligns the sequences and prints the mismatch table.
pub fn run(args: &DiffArgs) -> Result<()> {
    let (aligned_canonical, aligned_modeled) =
        aligned_strings(&args.canonical, &args.modeled);
    println!("canonical  {}", aligned_canonical);
    println!("modeled    {}", aligned_modeled);

    let mismatches = diff(&args.canonical, &args.modeled);
    if mismatches.is_empty() {
        println!("No mismatches.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["Position", "Canonical", "Modeled"]);
    for (position, mismatch) in &mismatches {
        table.add_row(row![position, mismatch.from, mismatch.to]);
    }
    table
        .print(&mut std::io::stdout())
        .context("Failed to render mismatch table")?;
    Ok(())
}
