use crate::io::error::Error;
use crate::model::{
    atom::Atom,
    residue::Residue,
    structure::Structure,
    types::{Element, Point, ResidueCategory},
};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Reads a structure from PDB-format text.
///
/// `ATOM  ` and `HETATM` records are parsed; everything else is ignored. Chains
/// and residues are kept in file order, which downstream cleanup relies on.
/// Alternate locations other than blank or `A` are skipped. Residues are keyed
/// by sequence number plus insertion code, so numbering conventions that reuse
/// a number with distinct codes stay separate residues.
pub fn read<R: BufRead>(reader: R) -> Result<Structure, Error> {
    let mut structure = Structure::new();

    let mut line_num = 0;
    for line in reader.lines() {
        line_num += 1;
        let line = line.map_err(|e| Error::from_io(e, None))?;

        let is_atom = line.starts_with("ATOM  ");
        let is_hetatm = line.starts_with("HETATM");
        if !is_atom && !is_hetatm {
            continue;
        }

        let category = if is_hetatm {
            ResidueCategory::Hetero
        } else {
            ResidueCategory::Standard
        };

        parse_atom_record(&line, line_num, category, &mut structure)?;
    }

    Ok(structure)
}

/// Reads a structure from a PDB file, attaching the path to any error.
pub fn read_file(path: &Path) -> Result<Structure, Error> {
    let file = File::open(path).map_err(|e| Error::from_io(e, Some(path.to_path_buf())))?;
    read(BufReader::new(file)).map_err(|e| attach_path(e, path))
}

fn attach_path(error: Error, path: &Path) -> Error {
    match error {
        Error::Io { source, .. } => Error::from_io(source, Some(path.to_path_buf())),
        Error::Parse {
            line_number,
            details,
            ..
        } => Error::parse(Some(path.to_path_buf()), line_number, details),
    }
}

fn parse_atom_record(
    line: &str,
    line_num: usize,
    category: ResidueCategory,
    structure: &mut Structure,
) -> Result<(), Error> {
    if line.len() < 54 {
        return Err(Error::parse(None, line_num, "Atom record too short"));
    }

    let atom_name = line[12..16].trim().to_string();
    let alt_loc = line.chars().nth(16).unwrap_or(' ');
    if alt_loc != ' ' && alt_loc != 'A' {
        return Ok(());
    }

    let res_name = line[17..20].trim().to_string();
    let chain_id = line.chars().nth(21).unwrap_or(' ').to_string();

    let res_seq = line[22..26]
        .trim()
        .parse::<i32>()
        .map_err(|_| Error::parse(None, line_num, "Invalid residue sequence number"))?;

    let icode_char = line.chars().nth(26).unwrap_or(' ');
    let icode = if icode_char == ' ' {
        None
    } else {
        Some(icode_char)
    };

    let x = parse_coord(&line[30..38], line_num, "X")?;
    let y = parse_coord(&line[38..46], line_num, "Y")?;
    let z = parse_coord(&line[46..54], line_num, "Z")?;
    let pos = Point::new(x, y, z);

    let element_str = if line.len() >= 78 { &line[76..78] } else { "  " };
    let element = if !element_str.trim().is_empty() {
        Element::from_str(element_str.trim()).unwrap_or(Element::Unknown)
    } else if category == ResidueCategory::Standard {
        // Standard-residue names like CA or CD are carbons, never metals, so
        // only the leading letter is trusted.
        atom_name
            .chars()
            .find(|c| c.is_ascii_alphabetic())
            .map(|c| {
                Element::from_str(&c.to_ascii_uppercase().to_string())
                    .unwrap_or(Element::Unknown)
            })
            .unwrap_or(Element::Unknown)
    } else {
        Element::from_atom_name(&atom_name)
    };

    let chain = structure.chain_mut_or_insert(&chain_id);

    match chain.residue_at_mut(res_seq, icode) {
        Some(residue) => {
            if residue.name != res_name || residue.category != category {
                return Err(Error::parse(
                    None,
                    line_num,
                    format!(
                        "Residue {}{}{} redefined as '{}' (previously '{}')",
                        chain_id,
                        res_seq,
                        icode_char,
                        res_name,
                        residue.name
                    ),
                ));
            }
            if residue.atom(&atom_name).is_none() {
                residue.add_atom(Atom::new(&atom_name, element, pos));
            }
        }
        None => {
            let mut residue = Residue::with_icode(res_seq, icode, &res_name, category);
            residue.add_atom(Atom::new(&atom_name, element, pos));
            chain.add_residue(residue);
        }
    }

    Ok(())
}

fn parse_coord(slice: &str, line_num: usize, axis: &str) -> Result<f64, Error> {
    slice
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::parse(None, line_num, format!("Invalid {} coordinate", axis)))
}
