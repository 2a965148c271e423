use crate::io::error::Error;
use crate::model::{residue::Residue, structure::Structure, types::ResidueCategory};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes a structure as PDB-format text.
///
/// Atoms are emitted in model order under the record type implied by their
/// residue category, with a `TER` record after the last standard residue of
/// each chain and a final `END`.
pub fn write<W: Write>(mut writer: W, structure: &Structure) -> Result<(), Error> {
    let mut serial = 1usize;

    for chain in structure.iter_chains() {
        for residue in chain.iter_residues() {
            for atom in residue.iter_atoms() {
                write_atom_record(&mut writer, serial, residue, &chain.id, atom)?;
                serial += 1;
            }
        }

        if let Some(last_standard) = chain
            .iter_residues()
            .rev()
            .find(|res| res.category == ResidueCategory::Standard)
        {
            write_ter_record(&mut writer, serial, last_standard, &chain.id)?;
            serial += 1;
        }
    }

    writeln!(writer, "END   ").map_err(|e| Error::from_io(e, None))
}

/// Writes a structure to a PDB file, attaching the path to any error.
pub fn write_file(path: &Path, structure: &Structure) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| Error::from_io(e, Some(path.to_path_buf())))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, structure)?;
    writer
        .flush()
        .map_err(|e| Error::from_io(e, Some(path.to_path_buf())))
}

fn write_atom_record<W: Write>(
    writer: &mut W,
    serial: usize,
    residue: &Residue,
    chain_id: &str,
    atom: &crate::model::atom::Atom,
) -> Result<(), Error> {
    let atom_name = if atom.name.len() >= 4 {
        format!("{:<4}", &atom.name[0..4])
    } else {
        format!(" {:<3}", atom.name)
    };

    let res_name = if residue.name.len() > 3 {
        &residue.name[0..3]
    } else {
        &residue.name
    };

    let element_str = format!("{:>2}", atom.element.symbol().to_uppercase());

    writeln!(
        writer,
        "{:6}{:5} {:4}{:1}{:3} {:1}{:4}{:1}   {:8.3}{:8.3}{:8.3}{:6.2}{:6.2}          {:2}",
        residue.category.record_type(),
        serial % 100000,
        atom_name,
        ' ',
        res_name,
        chain_id.chars().next().unwrap_or(' '),
        residue.id % 10000,
        residue.icode.unwrap_or(' '),
        atom.pos.x,
        atom.pos.y,
        atom.pos.z,
        1.00,
        0.00,
        element_str
    )
    .map_err(|e| Error::from_io(e, None))
}

fn write_ter_record<W: Write>(
    writer: &mut W,
    serial: usize,
    residue: &Residue,
    chain_id: &str,
) -> Result<(), Error> {
    let res_name = if residue.name.len() > 3 {
        &residue.name[0..3]
    } else {
        &residue.name
    };

    writeln!(
        writer,
        "TER   {:5}      {:3} {:1}{:4}{:1}",
        serial % 100000,
        res_name,
        chain_id.chars().next().unwrap_or(' '),
        residue.id % 10000,
        residue.icode.unwrap_or(' ')
    )
    .map_err(|e| Error::from_io(e, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::pdb::reader::{read, read_file};
    use crate::model::atom::Atom;
    use crate::model::chain::Chain;
    use crate::model::residue::Residue;
    use crate::model::types::{Element, Point};
    use std::io::Cursor;

    fn make_structure() -> Structure {
        let mut structure = Structure::new();
        let mut chain = Chain::new("A");

        let mut gly = Residue::new(1, "GLY", ResidueCategory::Standard);
        gly.add_atom(Atom::new("N", Element::N, Point::new(1.0, 2.0, 3.0)));
        gly.add_atom(Atom::new("CA", Element::C, Point::new(1.5, 2.5, 3.5)));

        let mut lig = Residue::new(2, "LIG", ResidueCategory::Hetero);
        lig.add_atom(Atom::new("C1", Element::C, Point::new(4.0, 5.0, 6.0)));

        chain.add_residue(gly);
        chain.add_residue(lig);
        structure.add_chain(chain);
        structure
    }

    #[test]
    fn write_emits_atom_hetatm_ter_and_end() {
        let structure = make_structure();

        let mut buffer = Vec::new();
        write(&mut buffer, &structure).expect("writer should succeed");

        let output = String::from_utf8(buffer).expect("valid UTF-8");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 5, "unexpected number of lines: {lines:?}");
        assert!(lines[0].starts_with("ATOM  "));
        assert!(lines[1].starts_with("ATOM  "));
        assert!(lines[2].starts_with("HETATM"));
        assert!(lines[3].starts_with("TER   "));
        assert_eq!(lines[4], "END   ");
    }

    #[test]
    fn write_puts_ter_after_last_standard_residue() {
        let structure = make_structure();

        let mut buffer = Vec::new();
        write(&mut buffer, &structure).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let ter = output
            .lines()
            .find(|l| l.starts_with("TER"))
            .expect("TER record present");
        assert_eq!(ter[17..20].trim(), "GLY");
    }

    #[test]
    fn write_then_read_round_trips_model() {
        let structure = make_structure();

        let mut buffer = Vec::new();
        write(&mut buffer, &structure).unwrap();
        let reread = read(Cursor::new(buffer)).unwrap();

        assert_eq!(reread.chain_count(), 1);
        let chain = reread.chain("A").unwrap();
        assert_eq!(chain.residue_count(), 2);
        assert!(chain.residue(1).unwrap().is_standard());
        assert!(chain.residue(2).unwrap().is_hetero());

        let ca = chain.residue(1).unwrap().atom("CA").unwrap();
        assert!((ca.pos.x - 1.5).abs() < 1e-3);
    }

    #[test]
    fn write_round_trips_insertion_codes() {
        let mut structure = Structure::new();
        let mut chain = Chain::new("H");
        let mut plain = Residue::new(100, "ALA", ResidueCategory::Standard);
        plain.add_atom(Atom::new("CA", Element::C, Point::new(1.0, 0.0, 0.0)));
        let mut inserted = Residue::with_icode(100, Some('A'), "GLY", ResidueCategory::Standard);
        inserted.add_atom(Atom::new("CA", Element::C, Point::new(2.0, 0.0, 0.0)));
        chain.add_residue(plain);
        chain.add_residue(inserted);
        structure.add_chain(chain);

        let mut buffer = Vec::new();
        write(&mut buffer, &structure).unwrap();

        let output = String::from_utf8(buffer.clone()).unwrap();
        let second = output.lines().nth(1).unwrap();
        assert_eq!(&second[26..27], "A", "insertion code column: {second:?}");

        let reread = read(Cursor::new(buffer)).unwrap();
        let chain = reread.chain("H").unwrap();
        assert_eq!(chain.residue_count(), 2);
        assert_eq!(chain.residue_at(100, Some('A')).unwrap().name, "GLY");
    }

    #[test]
    fn write_file_creates_readable_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.pdb");
        let structure = make_structure();

        write_file(&path, &structure).unwrap();
        let reread = read_file(&path).unwrap();

        assert_eq!(reread.atom_count(), 3);
    }
}
