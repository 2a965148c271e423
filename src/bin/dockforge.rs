use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::IoParameters;
use commands::{clean, diff, dock, site};

#[derive(Parser, Debug)]
#[command(
    name = "dockforge",
    about = "A command-line pipeline for receptor preparation, binding-site boxing, and AutoDock Vina docking with reduced results.",
    version,
    author,
    arg_required_else_help = true
)]
struct Cli {
    /// Input file path. When omitted, stdin is used.
    #[arg(short, long, value_name = "FILE", global = true)]
    input: Option<PathBuf>,
    /// Output file path. When omitted, stdout is used.
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reduce a receptor to one chain plus whitelisted hetero residues.
    Clean(clean::CleanArgs),
    /// Print the docking search box for a binding-site selection.
    Site(site::SiteArgs),
    /// Run the full docking pipeline and save a results directory.
    Dock(dock::DockArgs),
    /// Align two sequences and report their mismatches.
    Diff(diff::DiffArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let io_params = IoParameters {
        input: cli.input.clone(),
        output: cli.output.clone(),
    };

    match cli.command {
        Command::Clean(args) => {
            commands::ensure_noninteractive_stdout("clean", &io_params)?;
            let structure = commands::load_input(&io_params)?;
            let cleaned = clean::run(&structure, &args)?;
            commands::save_output(&cleaned, &io_params)?;
        }
        Command::Site(args) => {
            let structure = commands::load_input(&io_params)?;
            site::run(&structure, &args)?;
        }
        Command::Dock(args) => {
            dock::run(&args)?;
        }
        Command::Diff(args) => {
            diff::run(&args)?;
        }
    }

    Ok(())
}
