use super::atom::Atom;
use super::types::{one_letter_code, ResidueCategory};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub id: i32,
    /// PDB insertion code distinguishing residues that share a sequence number
    /// (antibody and protease numbering conventions). `None` for the common
    /// un-inserted case.
    pub icode: Option<char>,
    pub name: String,
    pub category: ResidueCategory,
    atoms: Vec<Atom>,
}

impl Residue {
    /// Creates an empty residue without an insertion code.
    ///
    /// # Arguments
    ///
    /// * `id` - Residue sequence number from the source file.
    /// * `name` - Residue name such as `"ALA"` or `"HEM"`.
    /// * `category` - Standard or hetero partition of the residue.
    ///
    /// # Returns
    ///
    /// A residue with no atoms attached yet.
    pub fn new(id: i32, name: &str, category: ResidueCategory) -> Self {
        Self::with_icode(id, None, name, category)
    }

    /// Creates an empty residue carrying an explicit insertion code.
    pub fn with_icode(id: i32, icode: Option<char>, name: &str, category: ResidueCategory) -> Self {
        Self {
            id,
            icode,
            name: name.to_string(),
            category,
            atoms: Vec::new(),
        }
    }

    pub fn is_standard(&self) -> bool {
        self.category == ResidueCategory::Standard
    }

    pub fn is_hetero(&self) -> bool {
        self.category == ResidueCategory::Hetero
    }

    /// One-letter amino-acid code, or `None` for non-protein residues.
    pub fn one_letter(&self) -> Option<char> {
        one_letter_code(&self.name)
    }

    /// Appends an atom to the residue.
    ///
    /// # Arguments
    ///
    /// * `atom` - Atom to append; its name must be unique within the residue.
    pub fn add_atom(&mut self, atom: Atom) {
        debug_assert!(
            self.atom(&atom.name).is_none(),
            "Attempted to add a duplicate atom name '{}' to residue '{}'",
            atom.name,
            self.name
        );
        self.atoms.push(atom);
    }

    pub fn atom(&self, name: &str) -> Option<&Atom> {
        self.atoms.iter().find(|a| a.name == name)
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter_atoms(&self) -> std::slice::Iter<'_, Atom> {
        self.atoms.iter()
    }

    pub fn iter_atoms_mut(&mut self) -> std::slice::IterMut<'_, Atom> {
        self.atoms.iter_mut()
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Residue {{ id: {}, name: \"{}\", category: {}, atoms: {} }}",
            self.id,
            self.name,
            self.category,
            self.atom_count()
        )
    }
}
