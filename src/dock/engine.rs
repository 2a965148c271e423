//! The docking engine adapter: one synchronous run, end to end.
//!
//! A run owns a scratch [`TempDir`] for every intermediate file (cleaned
//! receptor, converted inputs, raw multi-pose output, split poses). Nothing
//! outside the scratch directory is touched, so concurrent runs compose
//! freely; everything the caller keeps is parsed into the returned
//! [`DockingResult`] before the scratch directory is dropped.

use crate::dock::convert::{ligand_from_smiles, receptor_to_pdbqt};
use crate::dock::error::Error;
use crate::dock::poses::split_poses;
use crate::dock::result::{aggregate, DockingResult};
use crate::dock::scores::parse_scores;
use crate::dock::tools::{run_tool, ToolPaths};
use crate::io;
use crate::ops::{clean_structure, compute_box, CleanConfig};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Engine default for the search exhaustiveness.
pub const DEFAULT_EXHAUSTIVENESS: u32 = 8;

/// Everything a docking run needs besides the receptor and ligand themselves.
#[derive(Debug, Clone)]
pub struct DockingConfig {
    /// Residue numbers defining the binding site. Must be non-empty.
    pub sites: BTreeSet<i32>,
    /// Hetero residue names to keep in the receptor (cofactors, metals).
    pub keep_hetero: HashSet<String>,
    /// Receptor chain to dock against; defaults to the lexicographically
    /// smallest chain with standard residues.
    pub chain: Option<String>,
    /// Engine search effort; higher is slower and more thorough.
    pub exhaustiveness: u32,
}

impl Default for DockingConfig {
    fn default() -> Self {
        Self {
            sites: BTreeSet::new(),
            keep_hetero: HashSet::new(),
            chain: None,
            exhaustiveness: DEFAULT_EXHAUSTIVENESS,
        }
    }
}

impl DockingConfig {
    /// Config targeting the given binding-site residues, defaults elsewhere.
    pub fn targeting<I: IntoIterator<Item = i32>>(sites: I) -> Self {
        Self {
            sites: sites.into_iter().collect(),
            ..Self::default()
        }
    }
}

/// Runs the full docking pipeline against one receptor and one SMILES ligand.
///
/// Cleans the receptor, derives the search box from the site residues,
/// converts both inputs, invokes the engine synchronously, then reduces the
/// raw output and score report into a [`DockingResult`].
///
/// # Errors
///
/// [`Error::NoBindingSite`] when `config.sites` is empty (checked before any
/// subprocess is spawned); otherwise whatever stage fails first.
pub fn run_docking(
    tools: &ToolPaths,
    receptor: &Path,
    smiles: &str,
    config: &DockingConfig,
) -> Result<DockingResult, Error> {
    if config.sites.is_empty() {
        return Err(Error::NoBindingSite);
    }

    let scratch = TempDir::new()?;

    let clean_config = CleanConfig {
        chain: config.chain.clone(),
        keep_hetero: config.keep_hetero.clone(),
    };
    let cleaned = clean_structure(&io::read_pdb_file(receptor)?, &clean_config)
        .map_err(Error::Prepare)?;
    let search_box = compute_box(&cleaned, &config.sites).map_err(Error::Prepare)?;

    let clean_pdb = scratch.path().join("clean_receptor.pdb");
    io::write_pdb_file(&clean_pdb, &cleaned)?;

    let receptor_pdbqt = scratch.path().join("receptor.pdbqt");
    let ligand_pdbqt = scratch.path().join("ligand.pdbqt");
    receptor_to_pdbqt(tools, &clean_pdb, &receptor_pdbqt)?;
    ligand_from_smiles(tools, smiles, &ligand_pdbqt)?;

    let raw_output = scratch.path().join("out.pdbqt");
    let mut command = Command::new(&tools.vina);
    command
        .arg("--receptor")
        .arg(&receptor_pdbqt)
        .arg("--ligand")
        .arg(&ligand_pdbqt)
        .arg("--out")
        .arg(&raw_output)
        .args(["--exhaustiveness", &config.exhaustiveness.to_string()]);
    for (flag, value) in search_box.as_args() {
        command.args([flag, &value.to_string()]);
    }
    let output = run_tool(command)?;

    let stdout = String::from_utf8(output.stdout)
        .map_err(|_| Error::engine("engine stdout was not valid UTF-8"))?;
    if stdout.trim().is_empty() {
        return Err(Error::engine("engine produced no output"));
    }

    let scores = parse_scores(&stdout)?;
    let pose_files = split_poses(tools, &raw_output)?;

    aggregate(cleaned, pose_files, scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::Atom;
    use crate::model::chain::Chain;
    use crate::model::residue::Residue;
    use crate::model::structure::Structure;
    use crate::model::types::{Element, Point, ResidueCategory};

    #[test]
    fn empty_site_fails_before_any_subprocess() {
        // Nonexistent tools prove nothing was spawned.
        let tools = ToolPaths {
            vina: "dockforge-no-vina".into(),
            vina_split: "dockforge-no-split".into(),
            obabel: "dockforge-no-obabel".into(),
        };

        let err = run_docking(
            &tools,
            Path::new("missing.pdb"),
            "CCO",
            &DockingConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::NoBindingSite));
    }

    #[test]
    fn default_config_uses_engine_exhaustiveness() {
        assert_eq!(DockingConfig::default().exhaustiveness, 8);
        assert_eq!(DockingConfig::targeting([10, 14]).exhaustiveness, 8);
    }

    #[test]
    fn full_pipeline_with_stubbed_tools() {
        let dir = tempfile::TempDir::new().unwrap();
        let tools = stub_tools(dir.path());

        let receptor = dir.path().join("receptor.pdb");
        crate::io::write_pdb_file(&receptor, &receptor_structure()).unwrap();

        let result = run_docking(
            &tools,
            &receptor,
            "c1ccccc1",
            &DockingConfig::targeting([10, 14]),
        )
        .unwrap();

        assert_eq!(result.scores.len(), 2);
        assert_eq!(result.poses.len(), 2);
        assert_eq!(result.affinity_for(1), Some(-7.1));
        assert_eq!(result.affinity_for(2), Some(-6.8));
        assert!(result.receptor.chain("A").is_some());
    }

    fn receptor_structure() -> Structure {
        let mut chain = Chain::new("A");
        for id in [10, 14] {
            let mut residue = Residue::new(id, "ALA", ResidueCategory::Standard);
            residue.add_atom(Atom::new(
                "CA",
                Element::C,
                Point::new(id as f64, 0.0, 0.0),
            ));
            chain.add_residue(residue);
        }
        Structure::from_iter([chain])
    }

    /// Shell stand-ins for the three tools: `vina` prints a two-row score
    /// table and creates its `--out` file, `vina_split` drops two ligand
    /// PDBQTs next to its input, `obabel` creates its `-O` target (a minimal
    /// parseable PDB when the target is one).
    fn stub_tools(dir: &Path) -> ToolPaths {
        let vina = dir.join("vina");
        std::fs::write(
            &vina,
            "#!/bin/sh\n\
             prev=\"\"\n\
             for a in \"$@\"; do\n\
               if [ \"$prev\" = \"--out\" ]; then : > \"$a\"; fi\n\
               prev=\"$a\"\n\
             done\n\
             printf 'mode | affinity\\n-----+------------+----------+----------\\n'\n\
             printf '   1         -7.1      0.000      0.000\\n'\n\
             printf '   2         -6.8      1.000      2.000\\n'\n",
        )
        .unwrap();

        let vina_split = dir.join("vina_split");
        std::fs::write(
            &vina_split,
            "#!/bin/sh\n\
             prev=\"\"\n\
             for a in \"$@\"; do\n\
               if [ \"$prev\" = \"--input\" ]; then input=\"$a\"; fi\n\
               prev=\"$a\"\n\
             done\n\
             d=$(dirname \"$input\")\n\
             : > \"$d/out_ligand_1.pdbqt\"\n\
             : > \"$d/out_ligand_2.pdbqt\"\n",
        )
        .unwrap();

        let obabel = dir.join("obabel");
        std::fs::write(
            &obabel,
            "#!/bin/sh\n\
             prev=\"\"\n\
             for a in \"$@\"; do\n\
               if [ \"$prev\" = \"-O\" ]; then out=\"$a\"; fi\n\
               prev=\"$a\"\n\
             done\n\
             case \"$out\" in\n\
               *.pdb) printf 'ATOM      1  C1  LIG A   1       0.000   0.000   0.000  1.00  0.00           C\\nEND\\n' > \"$out\" ;;\n\
               *) : > \"$out\" ;;\n\
             esac\n",
        )
        .unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            for script in [&vina, &vina_split, &obabel] {
                std::fs::set_permissions(script, std::fs::Permissions::from_mode(0o755)).unwrap();
            }
        }

        ToolPaths {
            vina,
            vina_split,
            obabel,
        }
    }
}
